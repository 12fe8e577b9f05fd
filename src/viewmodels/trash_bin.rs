// ============================================================================
// TRASH BIN - soft-deleted proposals (admin only)
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::error::{RESTORE_FAILED, TRASH_LOAD_FAILED};
use crate::models::{Proposal, ProposalId};
use crate::services::ProposalApi;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrashBinState {
    pub proposals: Vec<Proposal>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrashAction {
    LoadStarted,
    Loaded(Vec<Proposal>),
    LoadFailed(String),
    Restored(ProposalId),
    RestoreFailed(String),
}

impl TrashAction {
    pub fn requires_reload(&self) -> bool {
        matches!(self, TrashAction::Restored(_))
    }
}

impl TrashBinState {
    pub fn show_empty_state(&self) -> bool {
        self.loaded && !self.loading && self.proposals.is_empty()
    }

    pub fn apply(&mut self, action: TrashAction) {
        match action {
            TrashAction::LoadStarted => self.loading = true,
            TrashAction::Loaded(proposals) => {
                self.proposals = proposals;
                self.loading = false;
                self.loaded = true;
                self.error = None;
            }
            TrashAction::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            TrashAction::Restored(_) => self.error = None,
            TrashAction::RestoreFailed(message) => self.error = Some(message),
        }
    }
}

impl Reducible for TrashBinState {
    type Action = TrashAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub async fn fetch_trash<G: ProposalApi>(gateway: &G) -> TrashAction {
    match gateway.list_trash().await {
        Ok(proposals) => {
            log::info!("🗑️ [TRASH] {} deleted proposals", proposals.len());
            TrashAction::Loaded(proposals)
        }
        Err(e) => {
            log::error!("❌ [TRASH] Load failed: {}", e);
            TrashAction::LoadFailed(TRASH_LOAD_FAILED.to_string())
        }
    }
}

/// Callers must have asked for confirmation already.
pub async fn restore_proposal<G: ProposalApi>(gateway: &G, id: ProposalId) -> TrashAction {
    match gateway.restore(id).await {
        Ok(_) => {
            log::info!("♻️ [TRASH] Proposal {} restored", id);
            TrashAction::Restored(id)
        }
        Err(e) => {
            log::error!("❌ [TRASH] Restore of {} failed: {}", id, e);
            TrashAction::RestoreFailed(RESTORE_FAILED.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::mock::{proposal, MockGateway};
    use futures::executor::block_on;

    fn gateway_with_trashed_row() -> MockGateway {
        let gateway = MockGateway::with(vec![proposal(1, "Robot Arm"), proposal(2, "Database")]);
        block_on(gateway.remove(2, None)).unwrap();
        gateway
    }

    #[test]
    fn restore_moves_proposal_back_to_the_active_list() {
        let gateway = gateway_with_trashed_row();
        let mut state = TrashBinState::default();
        state.apply(block_on(fetch_trash(&gateway)));
        assert_eq!(state.proposals.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

        let result = block_on(restore_proposal(&gateway, 2));
        assert!(result.requires_reload());
        state.apply(result);
        state.apply(block_on(fetch_trash(&gateway)));

        let active = block_on(gateway.list_all(None)).unwrap();
        let trash = block_on(gateway.list_trash()).unwrap();
        assert!(active.iter().any(|p| p.id == 2 && !p.deleted));
        assert!(trash.iter().all(|p| p.id != 2));
        assert!(state.show_empty_state());
    }

    #[test]
    fn failed_restore_keeps_the_row_and_reports() {
        let gateway = gateway_with_trashed_row();
        let mut state = TrashBinState::default();
        state.apply(block_on(fetch_trash(&gateway)));

        gateway.fail_next(ApiError::from_status(500, None));
        state.apply(block_on(restore_proposal(&gateway, 2)));

        assert_eq!(state.error.as_deref(), Some(RESTORE_FAILED));
        assert_eq!(state.proposals.len(), 1);
        assert_eq!(gateway.trashed().len(), 1);
    }

    #[test]
    fn failed_load_reports_and_shows_no_empty_state() {
        let gateway = MockGateway::default();
        gateway.fail_next(ApiError::Network("down".into()));
        let mut state = TrashBinState::default();

        state.apply(TrashAction::LoadStarted);
        state.apply(block_on(fetch_trash(&gateway)));

        assert_eq!(state.error.as_deref(), Some(TRASH_LOAD_FAILED));
        assert!(!state.show_empty_state());
    }
}
