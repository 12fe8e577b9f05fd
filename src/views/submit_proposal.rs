use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_app_context;
use crate::models::{ProposalDraft, ProposalField};
use crate::routes::Route;
use crate::viewmodels::submit_form::{
    probe_message, submit_proposal, SUCCESS_BANNER_MS, SUCCESS_MESSAGE,
};

fn placeholder(field: ProposalField) -> String {
    format!("Enter {}", field.label().to_lowercase())
}

#[function_component(SubmitProposal)]
pub fn submit_proposal_view() -> Html {
    let ctx = use_app_context();
    let draft = use_state(ProposalDraft::default);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let connection = use_state(|| None::<String>);
    // Dropping the timeout cancels it, so it dies with the view
    let banner_timer = use_mut_ref(|| None::<Timeout>);

    let on_field = |field: ProposalField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ProposalField::Description => {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                }
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*draft).clone();
            next.set_field(field, value);
            draft.set(next);
        })
    };

    let on_submit = {
        let api = ctx.api.clone();
        let username = ctx.session.acting_username();
        let draft = draft.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();
        let banner_timer = banner_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitting.set(true);
            error.set(None);
            success.set(false);

            let api = api.clone();
            let username = username.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let success = success.clone();
            let banner_timer = banner_timer.clone();
            spawn_local(async move {
                match submit_proposal(&api, &draft, username.as_deref()).await {
                    Ok(_) => {
                        success.set(true);
                        draft.set(ProposalDraft::default());
                        let hide = success.clone();
                        *banner_timer.borrow_mut() =
                            Some(Timeout::new(SUCCESS_BANNER_MS, move || hide.set(false)));
                    }
                    Err(e) => error.set(Some(e.user_message(CONFIG.backend_port()))),
                }
                submitting.set(false);
            });
        })
    };

    let on_test_connection = {
        let api = ctx.api.clone();
        let connection = connection.clone();
        Callback::from(move |_: MouseEvent| {
            connection.set(Some("Testing connection...".to_string()));
            let api = api.clone();
            let connection = connection.clone();
            spawn_local(async move {
                let result = api.test_connection(CONFIG.connection_timeout_ms).await;
                connection.set(Some(probe_message(&result)));
            });
        })
    };

    let text_field = |field: ProposalField| {
        html! {
            <div class="form-group">
                <label>{format!("{} *", field.label())}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder={placeholder(field)}
                    value={draft.field(field).to_string()}
                    oninput={on_field(field)}
                    required=true
                />
            </div>
        }
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"Submit Project Proposal"}</h1>
                <p>{"Share your innovative project ideas with our team"}</p>
                <Link<Route> to={Route::Home} classes="nav-link">{"← Back to Home"}</Link<Route>>
            </div>
            <div class="card">
                <form class="form" onsubmit={on_submit}>
                    if *success {
                        <div class="success">{format!("✓ {}", SUCCESS_MESSAGE)}</div>
                    }
                    if let Some(message) = (*error).clone() {
                        <div class="error">{format!("⚠ {}", message)}</div>
                    }
                    if let Some(status) = (*connection).clone() {
                        <div class={if status.starts_with('✅') { "success" } else { "error" }}>{status}</div>
                    }
                    {text_field(ProposalField::StudentName)}
                    {text_field(ProposalField::StudentId)}
                    {text_field(ProposalField::ProjectTitle)}
                    <div class="form-group">
                        <label>{format!("{} *", ProposalField::Description.label())}</label>
                        <textarea
                            class="form-textarea"
                            placeholder={placeholder(ProposalField::Description)}
                            value={draft.description.clone()}
                            oninput={on_field(ProposalField::Description)}
                            required=true
                        />
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn" disabled={*submitting}>
                            { if *submitting { "⏳ Submitting..." } else { "🚀 Submit Proposal" } }
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_test_connection}>
                            {"🔗 Test Connection"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
