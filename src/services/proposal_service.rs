use crate::error::ApiError;
use crate::models::{Proposal, ProposalDraft, ProposalId, ReviewForm};

/// Proposal endpoints. Soft-delete and restore semantics live in the
/// backend; the client only issues the requests.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait ProposalApi {
    /// `GET /proposals?username=`
    async fn list_all(&self, username: Option<&str>) -> Result<Vec<Proposal>, ApiError>;

    /// `POST /proposals?username=`
    async fn create(
        &self,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError>;

    /// `PUT /proposals/{id}?username=`
    async fn update(
        &self,
        id: ProposalId,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError>;

    /// `DELETE /proposals/{id}?username=`
    async fn remove(&self, id: ProposalId, username: Option<&str>) -> Result<(), ApiError>;

    /// `PUT /proposals/{id}/review`
    async fn set_review(&self, id: ProposalId, review: &ReviewForm) -> Result<Proposal, ApiError>;

    /// `GET /proposals/trash`
    async fn list_trash(&self) -> Result<Vec<Proposal>, ApiError>;

    /// `PUT /proposals/{id}/restore`
    async fn restore(&self, id: ProposalId) -> Result<Proposal, ApiError>;
}
