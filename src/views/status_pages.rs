use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Landing page for guard rejections
#[function_component(Unauthorized)]
pub fn unauthorized() -> Html {
    html! {
        <div class="container">
            <div class="header">
                <h1>{"Unauthorized"}</h1>
                <p>{"You don't have permission to access this page."}</p>
                <Link<Route> to={Route::Home} classes="nav-link">{"← Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="header">
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="nav-link">{"← Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}
