pub mod auth;
pub mod proposal;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Role, Session};
pub use proposal::{Proposal, ProposalDraft, ProposalField, ProposalId, ProposalStatus, ReviewForm};
