pub mod admin_dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod status_pages;
pub mod student_dashboard;
pub mod submit_proposal;
pub mod trash_bin;
pub mod view_proposals;

pub use admin_dashboard::AdminDashboard;
pub use home::Home;
pub use login::Login;
pub use register::Register;
pub use status_pages::{NotFound, Unauthorized};
pub use student_dashboard::StudentDashboard;
pub use submit_proposal::SubmitProposal;
pub use trash_bin::TrashBin;
pub use view_proposals::ViewProposals;
