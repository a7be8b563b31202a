use thiserror::Error;

use crate::permissions::Permission;
use crate::routes::Route;
use crate::session::Session;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Check a session's role against a required permission.
///
/// - No IO
/// - No panics
pub fn authorize(session: &Session, required: Permission) -> Result<(), AuthzError> {
    if session.can(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required))
    }
}

/// Outcome of opening a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
    Forbidden(Permission),
}

/// Decide whether `route` may be shown for the current session.
///
/// Protected routes without a session redirect to the login page; a logged-in
/// user visiting the login page is sent to the dashboard.
pub fn guard(route: Route, session: Option<&Session>) -> RouteDecision {
    let Some(session) = session else {
        return if route.is_public() {
            RouteDecision::Allow
        } else {
            RouteDecision::Redirect(Route::Login)
        };
    };

    if route == Route::Login {
        return RouteDecision::Redirect(Route::Dashboard);
    }

    match route.required_permission() {
        None => RouteDecision::Allow,
        Some(permission) => match authorize(session, permission) {
            Ok(()) => RouteDecision::Allow,
            Err(AuthzError::Forbidden(permission)) => {
                tracing::debug!(
                    route = %route.path(),
                    role = %session.role(),
                    %permission,
                    "route denied"
                );
                RouteDecision::Forbidden(permission)
            }
        },
    }
}
