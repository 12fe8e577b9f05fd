use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ProposalRow, ReviewModal};
use crate::hooks::{use_app_context, use_proposal_list};
use crate::routes::Route;
use crate::models::Session;
use crate::viewmodels::proposal_list::ListPhase;
use crate::viewmodels::StatusFilter;

/// Admins review everything; everyone else sees the list as their own
fn heading(session: &Session) -> (&'static str, &'static str) {
    if session.is_admin() {
        ("All Project Proposals", "Review and manage all submitted project proposals")
    } else {
        ("My Proposals", "View your submitted proposals and their status")
    }
}

#[function_component(ViewProposals)]
pub fn view_proposals() -> Html {
    let ctx = use_app_context();
    let session = &ctx.session;
    let is_admin = session.is_admin();
    let is_student = session.is_student();
    let list = use_proposal_list(ctx.api.clone(), session.acting_username());
    let state = list.state.clone();

    let on_search = list.set_search.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let on_filter = list.set_status_filter.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        StatusFilter::parse(&select.value())
    });

    let (title, subtitle) = heading(session);

    let rows = state.rows();
    let table = if rows.is_empty() {
        if state.show_empty_state() {
            html! { <div class="empty-state">{"No proposals found."}</div> }
        } else {
            html! {}
        }
    } else {
        html! {
            <div class="table-container">
                <table class="proposals-table">
                    <thead>
                        <tr>
                            <th>{"Student Name"}</th>
                            <th>{"Project Title"}</th>
                            <th>{"Description"}</th>
                            <th>{"Status"}</th>
                            <th>{"Review Comments"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|row| {
                            let key = row.proposal().id.to_string();
                            html! {
                                <ProposalRow
                                    key={key}
                                    {row}
                                    can_review={is_admin}
                                    on_edit={list.begin_edit.clone()}
                                    on_field={list.edit_field.clone()}
                                    on_save={list.save_edit.clone()}
                                    on_cancel={list.cancel_edit.clone()}
                                    on_delete={list.delete.clone()}
                                    on_review={list.open_review.clone()}
                                />
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let review = match state.reviewing() {
        Some((proposal, form)) if is_admin => html! {
            <ReviewModal
                proposal={proposal.clone()}
                form={form.clone()}
                on_status={list.set_review_status.clone()}
                on_comments={list.set_review_comments.clone()}
                on_save={list.save_review.clone()}
                on_cancel={list.cancel_review.clone()}
            />
        },
        _ => html! {},
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{title}</h1>
                <p>{subtitle}</p>
                <nav class="nav">
                    <Link<Route> to={Route::Home} classes="nav-link">{"← Back to Home"}</Link<Route>>
                    if is_student {
                        <Link<Route> to={Route::Submit} classes="nav-link">{"+ New Proposal"}</Link<Route>>
                    }
                    if is_admin {
                        <Link<Route> to={Route::Trash} classes="nav-link">{"🗑️ Trash Bin"}</Link<Route>>
                    }
                    <button class="nav-link" onclick={list.refresh.reform(|_| ())}>{"🔄 Refresh"}</button>
                </nav>
            </div>
            <div class="card">
                <div class="list-controls">
                    <input
                        type="text"
                        placeholder="Search proposals..."
                        value={state.search_term.clone()}
                        oninput={on_search}
                    />
                    <label>
                        {"Filter by Status: "}
                        <select onchange={on_filter}>
                            { for StatusFilter::ALL.iter().map(|filter| html! {
                                <option
                                    value={filter.as_str()}
                                    selected={*filter == state.status_filter}
                                >
                                    {filter.as_str()}
                                </option>
                            }) }
                        </select>
                    </label>
                </div>

                if let Some(message) = state.error.clone() {
                    <div class="error">{format!("⚠ {}", message)}</div>
                }
                if state.phase() == ListPhase::Loading {
                    <div class="loading">{"⏳ Loading proposals..."}</div>
                }
                {table}
                if let Some(at) = state.last_loaded_at {
                    <p class="last-updated">
                        {format!("Last updated {}", at.with_timezone(&chrono::Local).format("%H:%M:%S"))}
                    </p>
                }
            </div>
            {review}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn session(role: Option<Role>) -> Session {
        Session {
            token: role.map(|_| "token".to_string()),
            role,
            username: role.map(|_| "ada".to_string()),
        }
    }

    #[test]
    fn only_admins_get_the_review_heading() {
        assert_eq!(heading(&session(Some(Role::Admin))).0, "All Project Proposals");
        assert_eq!(heading(&session(Some(Role::Student))).0, "My Proposals");
        assert_eq!(heading(&session(None)).0, "My Proposals");
    }
}
