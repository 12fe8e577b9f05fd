// ============================================================================
// USE TRASH BIN - deleted proposals, restore with confirmation
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::ProposalId;
use crate::services::ApiClient;
use crate::utils::confirm;
use crate::viewmodels::trash_bin::{fetch_trash, restore_proposal};
use crate::viewmodels::{RequestKey, RequestTracker, RowOp, TrashAction, TrashBinState};

const RESTORE_PROMPT: &str = "Are you sure you want to restore this proposal?";

#[derive(Clone)]
pub struct UseTrashBinHandle {
    pub state: UseReducerHandle<TrashBinState>,
    pub refresh: Callback<()>,
    pub restore: Callback<ProposalId>,
}

fn load(
    api: ApiClient,
    tracker: Rc<RefCell<RequestTracker>>,
    dispatcher: UseReducerDispatcher<TrashBinState>,
) {
    dispatcher.dispatch(TrashAction::LoadStarted);
    let ticket = tracker.borrow_mut().issue(RequestKey::Fetch);
    spawn_local(async move {
        let action = fetch_trash(&api).await;
        if tracker.borrow_mut().settle(RequestKey::Fetch, ticket) {
            dispatcher.dispatch(action);
        }
    });
}

/// Nothing is fetched unless `enabled` (the viewer is an admin).
#[hook]
pub fn use_trash_bin(api: ApiClient, enabled: bool) -> UseTrashBinHandle {
    let state = use_reducer(TrashBinState::default);
    let tracker = use_mut_ref(RequestTracker::new);

    {
        let api = api.clone();
        let tracker = tracker.clone();
        let dispatcher = state.dispatcher();
        use_effect_with(enabled, move |enabled| {
            if *enabled {
                tracker.borrow_mut().reopen();
                load(api, tracker.clone(), dispatcher);
            } else {
                log::warn!("🚫 [TRASH] Not an admin, skipping fetch");
            }
            move || tracker.borrow_mut().close()
        });
    }

    let refresh = {
        let api = api.clone();
        let tracker = tracker.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_| load(api.clone(), tracker.clone(), dispatcher.clone()))
    };

    let restore = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: ProposalId| {
            if !confirm(RESTORE_PROMPT) {
                return;
            }
            let key = RequestKey::row(id, RowOp::Restore);
            let ticket = tracker.borrow_mut().issue(key);
            let api = api.clone();
            let tracker = tracker.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let action = restore_proposal(&api, id).await;
                if !tracker.borrow_mut().settle(key, ticket) {
                    return;
                }
                let reload = action.requires_reload();
                dispatcher.dispatch(action);
                if reload {
                    load(api, tracker, dispatcher);
                }
            });
        })
    };

    UseTrashBinHandle {
        state,
        refresh,
        restore,
    }
}
