pub mod dashboard;
pub mod proposal_list;
pub mod request_tracker;
pub mod submit_form;
pub mod trash_bin;

pub use dashboard::ProposalStats;
pub use proposal_list::{ListAction, ProposalListState, RowView, StatusFilter};
pub use request_tracker::{RequestKey, RequestTracker, RowOp, Ticket};
pub use trash_bin::{TrashAction, TrashBinState};
