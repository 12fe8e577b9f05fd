use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::models::Role;
use crate::routes::{decide, GuardDecision, Route};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub required_role: Option<Role>,
    pub children: Children,
}

/// Renders its children only when the guard allows it. The store is read on
/// every render so a logout in another view is seen on the next navigation.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let ctx = use_app_context();
    let session = ctx.auth.current_session();

    match decide(&session, props.required_role) {
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::RedirectTo(route) => {
            log::warn!("🚧 [GUARD] Redirecting to {}", route.to_path());
            html! { <Redirect<Route> to={route} /> }
        }
    }
}
