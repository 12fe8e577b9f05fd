use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Proposal;
use crate::services::{ApiClient, ProposalApi};
use crate::viewmodels::{RequestKey, RequestTracker};

#[derive(Clone, PartialEq, Default)]
pub struct DashboardData {
    pub proposals: Vec<Proposal>,
    pub loading: bool,
}

/// One-shot fetch for the dashboards. Failures are logged and leave the
/// list empty; the dashboards have no error banner.
#[hook]
pub fn use_dashboard(api: ApiClient, username: Option<String>) -> UseStateHandle<DashboardData> {
    let data = use_state(|| DashboardData {
        proposals: Vec::new(),
        loading: true,
    });
    let tracker = use_mut_ref(RequestTracker::new);

    {
        let data = data.clone();
        use_effect_with(username, move |username| {
            tracker.borrow_mut().reopen();
            let ticket = tracker.borrow_mut().issue(RequestKey::Fetch);
            let username = username.clone();
            let pending = tracker.clone();
            spawn_local(async move {
                let result = api.list_all(username.as_deref()).await;
                if !pending.borrow_mut().settle(RequestKey::Fetch, ticket) {
                    return;
                }
                match result {
                    Ok(proposals) => data.set(DashboardData {
                        proposals,
                        loading: false,
                    }),
                    Err(e) => {
                        log::error!("❌ [DASHBOARD] Could not load proposals: {}", e);
                        data.set(DashboardData::default());
                    }
                }
            });
            move || tracker.borrow_mut().close()
        });
    }

    data
}
