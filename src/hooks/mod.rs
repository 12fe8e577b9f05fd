pub mod session_context;
pub mod use_dashboard;
pub mod use_proposal_list;
pub mod use_trash_bin;

pub use session_context::{use_app_context, AppContext, AppContextProvider};
pub use use_dashboard::{use_dashboard, DashboardData};
pub use use_proposal_list::{use_proposal_list, UseProposalListHandle};
pub use use_trash_bin::{use_trash_bin, UseTrashBinHandle};
