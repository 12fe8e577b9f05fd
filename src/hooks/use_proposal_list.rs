// ============================================================================
// USE PROPOSAL LIST - reducer + effects for /view
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ProposalField, ProposalId, ProposalStatus};
use crate::services::ApiClient;
use crate::utils::confirm;
use crate::viewmodels::proposal_list::{
    delete_proposal, load_proposals, persist_edit, persist_review,
};
use crate::viewmodels::{ListAction, ProposalListState, RequestKey, RequestTracker, RowOp, StatusFilter};

const DELETE_PROMPT: &str = "Are you sure you want to delete this proposal?";

#[derive(Clone)]
pub struct UseProposalListHandle {
    pub state: UseReducerHandle<ProposalListState>,
    pub refresh: Callback<()>,
    pub set_search: Callback<String>,
    pub set_status_filter: Callback<StatusFilter>,
    pub begin_edit: Callback<ProposalId>,
    pub edit_field: Callback<(ProposalField, String)>,
    pub cancel_edit: Callback<()>,
    pub save_edit: Callback<ProposalId>,
    pub delete: Callback<ProposalId>,
    pub open_review: Callback<ProposalId>,
    pub set_review_status: Callback<ProposalStatus>,
    pub set_review_comments: Callback<String>,
    pub cancel_review: Callback<()>,
    pub save_review: Callback<ProposalId>,
}

/// Runs gateway calls and feeds their result back into the reducer, unless
/// the ticket was superseded or the view is gone.
#[derive(Clone)]
struct ListEffects {
    api: ApiClient,
    username: Option<String>,
    tracker: Rc<RefCell<RequestTracker>>,
    dispatcher: UseReducerDispatcher<ProposalListState>,
}

impl ListEffects {
    fn load(&self) {
        self.dispatcher.dispatch(ListAction::LoadStarted);
        let api = self.api.clone();
        let username = self.username.clone();
        self.spawn(RequestKey::Fetch, async move {
            load_proposals(&api, username.as_deref()).await
        });
    }

    fn spawn<F>(&self, key: RequestKey, task: F)
    where
        F: Future<Output = ListAction> + 'static,
    {
        let ticket = self.tracker.borrow_mut().issue(key);
        let effects = self.clone();
        spawn_local(async move {
            let action = task.await;
            let mut tracker = effects.tracker.borrow_mut();
            if !tracker.settle(key, ticket) {
                log::warn!(
                    "⏭️ [PROPOSALS] Dropping stale response for {:?} ({} still in flight)",
                    key,
                    tracker.in_flight()
                );
                return;
            }
            drop(tracker);
            let reload = action.requires_reload();
            effects.dispatcher.dispatch(action);
            if reload {
                effects.load();
            }
        });
    }
}

fn dispatch_with<T: 'static>(
    dispatcher: UseReducerDispatcher<ProposalListState>,
    make: fn(T) -> ListAction,
) -> Callback<T> {
    Callback::from(move |value| dispatcher.dispatch(make(value)))
}

/// `username` scopes the list and is attached to edits and deletes.
#[hook]
pub fn use_proposal_list(api: ApiClient, username: Option<String>) -> UseProposalListHandle {
    let state = use_reducer(ProposalListState::default);
    let tracker = use_mut_ref(RequestTracker::new);

    let effects = ListEffects {
        api,
        username: username.clone(),
        tracker: tracker.clone(),
        dispatcher: state.dispatcher(),
    };

    // Load on mount and whenever the user changes; drop everything on unmount
    {
        let effects = effects.clone();
        use_effect_with(username, move |_| {
            effects.tracker.borrow_mut().reopen();
            effects.load();
            move || tracker.borrow_mut().close()
        });
    }

    let refresh = {
        let effects = effects.clone();
        Callback::from(move |_| effects.load())
    };

    let set_search = dispatch_with(state.dispatcher(), ListAction::SetSearch);
    let set_status_filter = dispatch_with(state.dispatcher(), ListAction::SetStatusFilter);
    let begin_edit = dispatch_with(state.dispatcher(), ListAction::BeginEdit);
    let open_review = dispatch_with(state.dispatcher(), ListAction::OpenReview);
    let set_review_status = dispatch_with(state.dispatcher(), ListAction::SetReviewStatus);
    let set_review_comments = dispatch_with(state.dispatcher(), ListAction::SetReviewComments);

    let edit_field = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (ProposalField, String)| {
            dispatcher.dispatch(ListAction::EditField(field, value))
        })
    };

    let cancel_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ListAction::CancelEdit))
    };

    let cancel_review = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ListAction::CancelReview))
    };

    let save_edit = {
        let state = state.clone();
        let effects = effects.clone();
        Callback::from(move |id: ProposalId| {
            let Some(draft) = state
                .editing
                .as_ref()
                .filter(|edit| edit.id == id)
                .map(|edit| edit.draft.clone())
            else {
                return;
            };
            let api = effects.api.clone();
            let username = effects.username.clone();
            effects.spawn(RequestKey::row(id, RowOp::Edit), async move {
                persist_edit(&api, id, &draft, username.as_deref()).await
            });
        })
    };

    let delete = {
        let effects = effects.clone();
        Callback::from(move |id: ProposalId| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            let api = effects.api.clone();
            let username = effects.username.clone();
            effects.spawn(RequestKey::row(id, RowOp::Delete), async move {
                delete_proposal(&api, id, username.as_deref()).await
            });
        })
    };

    let save_review = {
        let state = state.clone();
        let effects = effects.clone();
        Callback::from(move |id: ProposalId| {
            let Some(form) = state
                .review
                .as_ref()
                .filter(|review| review.id == id)
                .map(|review| review.form.clone())
            else {
                return;
            };
            let api = effects.api.clone();
            effects.spawn(RequestKey::row(id, RowOp::Review), async move {
                persist_review(&api, id, &form).await
            });
        })
    };

    UseProposalListHandle {
        state,
        refresh,
        set_search,
        set_status_filter,
        begin_edit,
        edit_field,
        cancel_edit,
        save_edit,
        delete,
        open_review,
        set_review_status,
        set_review_comments,
        cancel_review,
        save_review,
    }
}
