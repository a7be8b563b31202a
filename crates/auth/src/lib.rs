//! `backoffice-auth` — session, roles and route gating for the back office.
//!
//! This crate is intentionally decoupled from HTTP: the session is a plain
//! value handed to whichever collaborator performs network calls.

pub mod authorize;
pub mod navigation;
pub mod permissions;
pub mod roles;
pub mod routes;
pub mod session;
pub mod user;

pub use authorize::{AuthzError, RouteDecision, authorize, guard};
pub use navigation::{NavItem, navigation};
pub use permissions::Permission;
pub use roles::Role;
pub use routes::Route;
pub use session::{AuthenticatedUser, BearerToken, Session};
pub use user::{EditUserForm, LoginForm, LoginRequest, RegisterUser, RegisterUserForm, UpdateUser, User};
