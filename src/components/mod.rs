pub mod proposal_row;
pub mod protected_route;
pub mod review_modal;
pub mod status_badge;

pub use proposal_row::ProposalRow;
pub use protected_route::ProtectedRoute;
pub use review_modal::ReviewModal;
pub use status_badge::StatusBadge;
