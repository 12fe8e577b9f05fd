//! In-memory backend used by the unit tests. Echoes writes back the way the
//! real backend does and keeps active and trashed proposals apart.

use std::cell::{Cell, RefCell};

use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, Proposal, ProposalDraft, ProposalId, ProposalStatus,
    RegisterRequest, ReviewForm,
};
use crate::services::{AuthApi, ProposalApi};

pub fn proposal(id: ProposalId, title: &str) -> Proposal {
    Proposal {
        id,
        student_name: Some(format!("Student {}", id)),
        student_id: Some(format!("S-{:03}", id)),
        project_title: Some(title.to_string()),
        description: Some(format!("{} description", title)),
        status: ProposalStatus::Pending,
        review_comments: None,
        deleted: false,
    }
}

#[derive(Default)]
pub struct MockGateway {
    active: RefCell<Vec<Proposal>>,
    trash: RefCell<Vec<Proposal>>,
    next_error: RefCell<Option<ApiError>>,
    calls: Cell<usize>,
    last_username: RefCell<Option<String>>,
}

impl MockGateway {
    pub fn with(proposals: Vec<Proposal>) -> Self {
        Self {
            active: RefCell::new(proposals),
            ..Self::default()
        }
    }

    /// The next call fails with `err`, whatever it is
    pub fn fail_next(&self, err: ApiError) {
        *self.next_error.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_username(&self) -> Option<String> {
        self.last_username.borrow().clone()
    }

    pub fn active(&self) -> Vec<Proposal> {
        self.active.borrow().clone()
    }

    pub fn trashed(&self) -> Vec<Proposal> {
        self.trash.borrow().clone()
    }

    fn enter(&self, username: Option<&str>) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_username.borrow_mut() = username.map(str::to_owned);
        match self.next_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::from_status(404, Some(r#"{"message":"Proposal not found"}"#.into()))
    }
}

impl ProposalApi for MockGateway {
    async fn list_all(&self, username: Option<&str>) -> Result<Vec<Proposal>, ApiError> {
        self.enter(username)?;
        Ok(self.active())
    }

    async fn create(
        &self,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError> {
        self.enter(username)?;
        let next_id = self
            .active
            .borrow()
            .iter()
            .chain(self.trash.borrow().iter())
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;
        let created = Proposal {
            id: next_id,
            student_name: Some(draft.student_name.clone()),
            student_id: Some(draft.student_id.clone()),
            project_title: Some(draft.project_title.clone()),
            description: Some(draft.description.clone()),
            status: ProposalStatus::Pending,
            review_comments: None,
            deleted: false,
        };
        self.active.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: ProposalId,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError> {
        self.enter(username)?;
        let mut active = self.active.borrow_mut();
        let row = active.iter_mut().find(|p| p.id == id).ok_or_else(Self::not_found)?;
        row.student_name = Some(draft.student_name.clone());
        row.student_id = Some(draft.student_id.clone());
        row.project_title = Some(draft.project_title.clone());
        row.description = Some(draft.description.clone());
        Ok(row.clone())
    }

    async fn remove(&self, id: ProposalId, username: Option<&str>) -> Result<(), ApiError> {
        self.enter(username)?;
        let mut active = self.active.borrow_mut();
        let index = active.iter().position(|p| p.id == id).ok_or_else(Self::not_found)?;
        let mut removed = active.remove(index);
        removed.deleted = true;
        self.trash.borrow_mut().push(removed);
        Ok(())
    }

    async fn set_review(&self, id: ProposalId, review: &ReviewForm) -> Result<Proposal, ApiError> {
        self.enter(None)?;
        let mut active = self.active.borrow_mut();
        let row = active.iter_mut().find(|p| p.id == id).ok_or_else(Self::not_found)?;
        row.status = review.status;
        row.review_comments = Some(review.review_comments.clone());
        Ok(row.clone())
    }

    async fn list_trash(&self) -> Result<Vec<Proposal>, ApiError> {
        self.enter(None)?;
        Ok(self.trashed())
    }

    async fn restore(&self, id: ProposalId) -> Result<Proposal, ApiError> {
        self.enter(None)?;
        let mut trash = self.trash.borrow_mut();
        let index = trash.iter().position(|p| p.id == id).ok_or_else(Self::not_found)?;
        let mut restored = trash.remove(index);
        restored.deleted = false;
        self.active.borrow_mut().push(restored.clone());
        Ok(restored)
    }
}

/// Auth backend that either always accepts or always fails
pub struct MockAuthApi {
    outcome: Result<LoginResponse, ApiError>,
}

impl MockAuthApi {
    pub fn accepting(token: &str, role: &str, username: &str) -> Self {
        Self {
            outcome: Ok(LoginResponse {
                token: Some(token.to_string()),
                role: Some(role.to_string()),
                username: Some(username.to_string()),
            }),
        }
    }

    pub fn failing(err: ApiError) -> Self {
        Self { outcome: Err(err) }
    }
}

impl AuthApi for MockAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.outcome.clone()
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
        self.outcome.clone().map(|_| ())
    }
}
