pub mod api_client;
pub mod auth_service;
pub mod proposal_service;

#[cfg(test)]
pub mod mock;

pub use api_client::ApiClient;
pub use auth_service::{AuthApi, AuthService};
pub use proposal_service::ProposalApi;
