use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app_context, use_trash_bin};
use crate::routes::Route;

#[function_component(TrashBin)]
pub fn trash_bin() -> Html {
    let ctx = use_app_context();
    let is_admin = ctx.session.is_admin();
    let trash = use_trash_bin(ctx.api.clone(), is_admin);
    let state = trash.state.clone();

    if !is_admin {
        return html! {
            <div class="container">
                <div class="header">
                    <h1>{"Access Denied"}</h1>
                    <p>{"Only administrators can access the trash bin."}</p>
                </div>
            </div>
        };
    }

    let body = if state.loading && !state.loaded {
        html! { <div class="loading">{"⏳ Loading deleted proposals..."}</div> }
    } else if state.show_empty_state() {
        html! {
            <div class="empty-state">
                <h3>{"Trash bin is empty"}</h3>
                <p>{"No deleted proposals found."}</p>
            </div>
        }
    } else {
        html! {
            <div class="table-container">
                <table class="proposals-table">
                    <thead>
                        <tr>
                            <th>{"Student Name"}</th>
                            <th>{"Student ID"}</th>
                            <th>{"Project Title"}</th>
                            <th>{"Description"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.proposals.iter().map(|p| {
                            let id = p.id;
                            html! {
                                <tr key={id.to_string()}>
                                    <td>{p.display_student_name()}</td>
                                    <td>{p.student_id.clone().unwrap_or_default()}</td>
                                    <td>{p.project_title.clone().unwrap_or_default()}</td>
                                    <td class="description-cell">{p.description.clone().unwrap_or_default()}</td>
                                    <td><span class="status-badge status-deleted">{"Deleted"}</span></td>
                                    <td>
                                        <button class="btn btn-restore" onclick={trash.restore.reform(move |_| id)}>
                                            {"🔄 Restore"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"🗑️ Trash Bin"}</h1>
                <p>{"Manage deleted proposals"}</p>
                <nav class="nav">
                    <Link<Route> to={Route::ViewProposals} classes="nav-link">{"← Back to Proposals"}</Link<Route>>
                    <button class="nav-link" onclick={trash.refresh.reform(|_| ())}>{"🔄 Refresh"}</button>
                </nav>
            </div>
            <div class="card">
                if let Some(message) = state.error.clone() {
                    <div class="error">{format!("⚠ {}", message)}</div>
                }
                {body}
            </div>
        </div>
    }
}
