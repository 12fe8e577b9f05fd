use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::models::Role;
use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let ctx = use_app_context();
    let session = ctx.session.clone();

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.logout())
    };

    let nav = if session.is_authenticated() {
        let dashboard = match session.role {
            Some(Role::Student) => html! {
                <Link<Route> to={Route::StudentDashboard} classes="nav-link">{"Student Dashboard"}</Link<Route>>
            },
            _ => html! {
                <Link<Route> to={Route::AdminDashboard} classes="nav-link">{"Admin Dashboard"}</Link<Route>>
            },
        };
        html! {
            <>
                {dashboard}
                <button class="nav-link" onclick={on_logout}>{"Logout"}</button>
            </>
        }
    } else {
        html! {
            <>
                <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="nav-link">{"Register"}</Link<Route>>
            </>
        }
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"Welcome to the Project Proposal Review Portal"}</h1>
                <p>{"Streamline your project proposal submission and review process"}</p>
                <nav class="nav">
                    {nav}
                    <Link<Route> to={Route::Submit} classes="nav-link">{"Submit Proposal"}</Link<Route>>
                    <Link<Route> to={Route::ViewProposals} classes="nav-link">{"View Proposals"}</Link<Route>>
                </nav>
            </div>
            <div class="card">
                <h2>{"Features"}</h2>
                <div class="feature-grid">
                    <div class="feature">
                        <div class="feature-icon">{"📝"}</div>
                        <h3>{"Easy Submission"}</h3>
                        <p>{"Submit your project proposals with a simple, intuitive form"}</p>
                    </div>
                    <div class="feature">
                        <div class="feature-icon">{"👀"}</div>
                        <h3>{"Quick Review"}</h3>
                        <p>{"View and manage all submitted proposals in one place"}</p>
                    </div>
                    <div class="feature">
                        <div class="feature-icon">{"⚡"}</div>
                        <h3>{"Fast & Secure"}</h3>
                        <p>{"Built with modern technology for optimal performance"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
