use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StatusBadge;
use crate::config::CONFIG;
use crate::hooks::{use_app_context, use_dashboard};
use crate::routes::Route;
use crate::viewmodels::dashboard::recent;
use crate::viewmodels::ProposalStats;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();
    // Admins see every proposal, so no username filter
    let data = use_dashboard(ctx.api.clone(), None);

    let stats = ProposalStats::from_proposals(&data.proposals);
    let limit = CONFIG.dashboard_config.admin_recent_limit;

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let submissions = if data.loading {
        html! { <div class="loading">{"Loading..."}</div> }
    } else if data.proposals.is_empty() {
        html! { <div class="empty-state">{"No proposals submitted yet."}</div> }
    } else {
        html! {
            <table class="proposals-table">
                <thead>
                    <tr>
                        <th>{"Student"}</th>
                        <th>{"Project Title"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for recent(&data.proposals, limit).iter().map(|p| html! {
                        <tr key={p.id.to_string()}>
                            <td>{p.display_student_name()}</td>
                            <td>{p.project_title.clone().unwrap_or_default()}</td>
                            <td><StatusBadge status={p.status} /></td>
                            <td>
                                <Link<Route> to={Route::ViewProposals} classes="btn-review">{"Review"}</Link<Route>>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"Admin Dashboard"}</h1>
                <p>{format!("Welcome, Professor {}!", ctx.session.username.as_deref().unwrap_or_default())}</p>
                <nav class="nav">
                    <Link<Route> to={Route::ViewProposals} classes="nav-link">{"All Proposals"}</Link<Route>>
                    <Link<Route> to={Route::Trash} classes="nav-link">{"Trash Bin"}</Link<Route>>
                    <button class="nav-link" onclick={on_logout}>{"🚪 Logout"}</button>
                </nav>
            </div>
            <div class="card">
                <h2>{"System Overview"}</h2>
                <div class="stats-grid">
                    <div class="stat">
                        <h3>{"Total Proposals"}</h3>
                        <p class="stat-value">{stats.total}</p>
                    </div>
                    <div class="stat stat-pending">
                        <h3>{"Pending Review"}</h3>
                        <p class="stat-value">{stats.pending}</p>
                    </div>
                    <div class="stat stat-approved">
                        <h3>{"Approved"}</h3>
                        <p class="stat-value">{stats.approved}</p>
                    </div>
                    <div class="stat stat-rejected">
                        <h3>{"Rejected"}</h3>
                        <p class="stat-value">{stats.rejected}</p>
                    </div>
                </div>
            </div>
            <div class="card">
                <h2>{"Recent Submissions"}</h2>
                {submissions}
            </div>
        </div>
    }
}
