// ============================================================================
// PROPOSAL LIST - state machine behind /view
// ============================================================================
// Pure state + actions. The hook owns the reducer and runs the async effects
// below, which turn a gateway result into the next action.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use crate::error::{delete_failure_message, LOAD_FAILED, REVIEW_FAILED, UPDATE_FAILED};
use crate::models::{Proposal, ProposalDraft, ProposalField, ProposalId, ProposalStatus, ReviewForm};
use crate::services::ProposalApi;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProposalStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(ProposalStatus::Pending),
        StatusFilter::Only(ProposalStatus::Approved),
        StatusFilter::Only(ProposalStatus::Rejected),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown values fall back to `All`
    pub fn parse(raw: &str) -> Self {
        ProposalStatus::parse(raw).map(StatusFilter::Only).unwrap_or_default()
    }

    pub fn matches(&self, status: ProposalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: ProposalId,
    pub draft: ProposalDraft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewSession {
    pub id: ProposalId,
    pub form: ReviewForm,
}

/// One table row. Only the row matching the single edit session is `Editing`.
#[derive(Clone, Debug, PartialEq)]
pub enum RowView {
    Display(Proposal),
    Editing { proposal: Proposal, draft: ProposalDraft },
}

impl RowView {
    pub fn proposal(&self) -> &Proposal {
        match self {
            RowView::Display(proposal) | RowView::Editing { proposal, .. } => proposal,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowView::Editing { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProposalListState {
    /// Last successful fetch, in backend order
    pub proposals: Vec<Proposal>,
    pub loading: bool,
    pub error: Option<String>,
    pub status_filter: StatusFilter,
    pub search_term: String,
    pub editing: Option<EditSession>,
    pub review: Option<ReviewSession>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    LoadStarted,
    Loaded {
        proposals: Vec<Proposal>,
        at: DateTime<Utc>,
    },
    LoadFailed(String),
    SetSearch(String),
    SetStatusFilter(StatusFilter),
    BeginEdit(ProposalId),
    EditField(ProposalField, String),
    CancelEdit,
    EditSaved(ProposalId),
    EditFailed(String),
    Deleted(ProposalId),
    DeleteFailed(String),
    OpenReview(ProposalId),
    SetReviewStatus(ProposalStatus),
    SetReviewComments(String),
    CancelReview,
    ReviewSaved(ProposalId),
    ReviewFailed(String),
}

impl ListAction {
    /// Successful mutations are followed by a full refresh
    pub fn requires_reload(&self) -> bool {
        matches!(
            self,
            ListAction::EditSaved(_) | ListAction::Deleted(_) | ListAction::ReviewSaved(_)
        )
    }
}

impl ProposalListState {
    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if self.error.is_some() {
            ListPhase::Error
        } else if self.last_loaded_at.is_some() {
            ListPhase::Loaded
        } else {
            ListPhase::Idle
        }
    }

    fn find(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn filtered(&self) -> Vec<&Proposal> {
        let needle = self.search_term.to_lowercase();
        self.proposals
            .iter()
            .filter(|p| self.status_filter.matches(p.status) && p.matches_search(&needle))
            .collect()
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.filtered()
            .into_iter()
            .map(|proposal| match &self.editing {
                Some(edit) if edit.id == proposal.id => RowView::Editing {
                    proposal: proposal.clone(),
                    draft: edit.draft.clone(),
                },
                _ => RowView::Display(proposal.clone()),
            })
            .collect()
    }

    /// "No proposals found" only after a load has completed
    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.last_loaded_at.is_some() && self.filtered().is_empty()
    }

    pub fn reviewing(&self) -> Option<(&Proposal, &ReviewForm)> {
        let review = self.review.as_ref()?;
        self.find(review.id).map(|proposal| (proposal, &review.form))
    }

    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::LoadStarted => self.loading = true,
            ListAction::Loaded { proposals, at } => {
                self.proposals = proposals;
                self.loading = false;
                self.error = None;
                self.last_loaded_at = Some(at);
                // Overlays pointing at rows that disappeared are closed
                if let Some(id) = self.editing.as_ref().map(|e| e.id) {
                    if self.find(id).is_none() {
                        self.editing = None;
                    }
                }
                if let Some(id) = self.review.as_ref().map(|r| r.id) {
                    if self.find(id).is_none() {
                        self.review = None;
                    }
                }
            }
            ListAction::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ListAction::SetSearch(term) => self.search_term = term,
            ListAction::SetStatusFilter(filter) => self.status_filter = filter,
            ListAction::BeginEdit(id) => {
                if let Some(proposal) = self.find(id) {
                    let draft = ProposalDraft::from_proposal(proposal);
                    self.editing = Some(EditSession { id, draft });
                }
            }
            ListAction::EditField(field, value) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.draft.set_field(field, value);
                }
            }
            ListAction::CancelEdit => self.editing = None,
            ListAction::EditSaved(id) => {
                if self.editing.as_ref().is_some_and(|e| e.id == id) {
                    self.editing = None;
                }
                self.error = None;
            }
            ListAction::Deleted(id) => {
                if self.editing.as_ref().is_some_and(|e| e.id == id) {
                    self.editing = None;
                }
                if self.review.as_ref().is_some_and(|r| r.id == id) {
                    self.review = None;
                }
                self.error = None;
            }
            ListAction::OpenReview(id) => {
                if let Some(proposal) = self.find(id) {
                    let form = ReviewForm::from_proposal(proposal);
                    self.review = Some(ReviewSession { id, form });
                }
            }
            ListAction::SetReviewStatus(status) => {
                if let Some(review) = self.review.as_mut() {
                    review.form.status = status;
                }
            }
            ListAction::SetReviewComments(comments) => {
                if let Some(review) = self.review.as_mut() {
                    review.form.review_comments = comments;
                }
            }
            ListAction::CancelReview => self.review = None,
            ListAction::ReviewSaved(id) => {
                if self.review.as_ref().is_some_and(|r| r.id == id) {
                    self.review = None;
                }
                self.error = None;
            }
            ListAction::EditFailed(message)
            | ListAction::DeleteFailed(message)
            | ListAction::ReviewFailed(message) => self.error = Some(message),
        }
    }
}

impl Reducible for ProposalListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

// ----------------------------------------------------------------------------
// Effects
// ----------------------------------------------------------------------------

pub async fn load_proposals<G: ProposalApi>(gateway: &G, username: Option<&str>) -> ListAction {
    match gateway.list_all(username).await {
        Ok(proposals) => ListAction::Loaded {
            proposals,
            at: Utc::now(),
        },
        Err(e) => {
            log::error!("❌ [PROPOSALS] Load failed: {}", e);
            ListAction::LoadFailed(LOAD_FAILED.to_string())
        }
    }
}

/// Validates locally first; an invalid draft never reaches the backend.
pub async fn persist_edit<G: ProposalApi>(
    gateway: &G,
    id: ProposalId,
    draft: &ProposalDraft,
    username: Option<&str>,
) -> ListAction {
    if let Err(e) = draft.validate() {
        return ListAction::EditFailed(e.to_string());
    }
    match gateway.update(id, draft, username).await {
        Ok(_) => {
            log::info!("✏️ [PROPOSALS] Proposal {} updated", id);
            ListAction::EditSaved(id)
        }
        Err(e) => {
            log::error!("❌ [PROPOSALS] Update of {} failed: {}", id, e);
            ListAction::EditFailed(UPDATE_FAILED.to_string())
        }
    }
}

/// Callers must have asked for confirmation already.
pub async fn delete_proposal<G: ProposalApi>(
    gateway: &G,
    id: ProposalId,
    username: Option<&str>,
) -> ListAction {
    match gateway.remove(id, username).await {
        Ok(()) => {
            log::info!("🗑️ [PROPOSALS] Proposal {} moved to trash", id);
            ListAction::Deleted(id)
        }
        Err(e) => {
            log::error!("❌ [PROPOSALS] Delete of {} failed: {}", id, e);
            ListAction::DeleteFailed(delete_failure_message(&e))
        }
    }
}

pub async fn persist_review<G: ProposalApi>(
    gateway: &G,
    id: ProposalId,
    form: &ReviewForm,
) -> ListAction {
    match gateway.set_review(id, form).await {
        Ok(_) => {
            log::info!("📝 [PROPOSALS] Review saved for {} ({})", id, form.status);
            ListAction::ReviewSaved(id)
        }
        Err(e) => {
            log::error!("❌ [PROPOSALS] Review of {} failed: {}", id, e);
            ListAction::ReviewFailed(REVIEW_FAILED.to_string())
        }
    }
}
