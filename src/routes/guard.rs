// ============================================================================
// ROUTE GUARD - pure allow / redirect decision
// ============================================================================

use crate::models::{Role, Session};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(Route),
}

/// Callers pass the session as it is *now*; the decision is never cached.
pub fn decide(session: &Session, required_role: Option<Role>) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::RedirectTo(Route::Login);
    }
    match required_role {
        Some(role) if session.role != Some(role) => GuardDecision::RedirectTo(Route::Unauthorized),
        _ => GuardDecision::Allow,
    }
}
