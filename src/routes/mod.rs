pub mod guard;

use yew_router::prelude::*;

use crate::models::Role;

pub use guard::{decide, GuardDecision};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/student-dashboard")]
    StudentDashboard,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/submit")]
    Submit,
    #[at("/view")]
    ViewProposals,
    #[at("/trash")]
    Trash,
    #[at("/unauthorized")]
    Unauthorized,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Role a session must hold to render this route; `None` means public
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::StudentDashboard => Some(Role::Student),
            Route::AdminDashboard | Route::Trash => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.required_role().is_some()
    }

    /// Landing page after login
    pub fn dashboard_for(role: Option<Role>) -> Route {
        match role {
            Some(Role::Admin) => Route::AdminDashboard,
            _ => Route::StudentDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_portal_urls() {
        assert_eq!(Route::StudentDashboard.to_path(), "/student-dashboard");
        assert_eq!(Route::AdminDashboard.to_path(), "/admin-dashboard");
        assert_eq!(Route::ViewProposals.to_path(), "/view");
        assert_eq!(Route::Trash.to_path(), "/trash");
        assert_eq!(Route::recognize("/submit"), Some(Route::Submit));
        assert_eq!(Route::recognize("/unauthorized"), Some(Route::Unauthorized));
    }

    #[test]
    fn only_dashboards_and_trash_are_protected() {
        let protected: Vec<Route> = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::StudentDashboard,
            Route::AdminDashboard,
            Route::Submit,
            Route::ViewProposals,
            Route::Trash,
            Route::Unauthorized,
            Route::NotFound,
        ]
        .into_iter()
        .filter(Route::is_protected)
        .collect();

        assert_eq!(
            protected,
            vec![Route::StudentDashboard, Route::AdminDashboard, Route::Trash]
        );
        assert_eq!(Route::Trash.required_role(), Some(Role::Admin));
        assert_eq!(Route::StudentDashboard.required_role(), Some(Role::Student));
    }

    #[test]
    fn login_lands_on_the_role_dashboard() {
        assert_eq!(Route::dashboard_for(Some(Role::Admin)), Route::AdminDashboard);
        assert_eq!(Route::dashboard_for(Some(Role::Student)), Route::StudentDashboard);
        assert_eq!(Route::dashboard_for(None), Route::StudentDashboard);
    }
}
