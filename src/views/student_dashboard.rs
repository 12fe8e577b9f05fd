use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StatusBadge;
use crate::config::CONFIG;
use crate::hooks::{use_app_context, use_dashboard};
use crate::routes::Route;
use crate::viewmodels::dashboard::recent;
use crate::viewmodels::ProposalStats;

#[function_component(StudentDashboard)]
pub fn student_dashboard() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let username = ctx.session.username.clone();
    let data = use_dashboard(ctx.api.clone(), username.clone());

    let stats = ProposalStats::from_proposals(&data.proposals);
    let limit = CONFIG.dashboard_config.student_recent_limit;

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let recent_rows = if data.loading {
        html! { <div class="loading">{"Loading..."}</div> }
    } else if data.proposals.is_empty() {
        html! {
            <div class="empty-state">
                <p>{"No proposals submitted yet."}</p>
                <Link<Route> to={Route::Submit} classes="nav-link">{"Submit your first proposal"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <table class="proposals-table">
                <thead>
                    <tr>
                        <th>{"Project Title"}</th>
                        <th>{"Status"}</th>
                        <th>{"Review Comments"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for recent(&data.proposals, limit).iter().map(|p| html! {
                        <tr key={p.id.to_string()}>
                            <td>{p.project_title.clone().unwrap_or_default()}</td>
                            <td><StatusBadge status={p.status} /></td>
                            <td>{p.display_comments()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"Student Dashboard"}</h1>
                <p>{format!("Welcome, {}!", username.as_deref().unwrap_or_default())}</p>
                <nav class="nav">
                    <Link<Route> to={Route::Submit} classes="nav-link">{"Submit Proposal"}</Link<Route>>
                    <Link<Route> to={Route::ViewProposals} classes="nav-link">{"My Proposals"}</Link<Route>>
                    <button class="nav-link" onclick={on_logout}>{"Logout"}</button>
                </nav>
            </div>
            <div class="card">
                <h2>{"Quick Stats"}</h2>
                <div class="stats-grid">
                    <div class="stat">
                        <h3>{"Total Proposals"}</h3>
                        <p class="stat-value">{stats.total}</p>
                    </div>
                    <div class="stat stat-approved">
                        <h3>{"Approved"}</h3>
                        <p class="stat-value">{stats.approved}</p>
                    </div>
                    <div class="stat stat-pending">
                        <h3>{"Pending"}</h3>
                        <p class="stat-value">{stats.pending}</p>
                    </div>
                </div>
            </div>
            <div class="card">
                <h2>{"Recent Proposals"}</h2>
                {recent_rows}
            </div>
        </div>
    }
}
