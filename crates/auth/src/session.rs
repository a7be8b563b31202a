//! The logged-in user and their bearer token.
//!
//! A `Session` is created from a login response and passed explicitly to every
//! network call; nothing reads it from ambient state.

use serde::{Deserialize, Serialize};

use crate::permissions::Permission;
use crate::roles::Role;
use crate::user::User;

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Login response body: the user record plus its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: User,
    pub token: BearerToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: User,
    token: BearerToken,
}

impl Session {
    pub fn new(user: User, token: BearerToken) -> Self {
        Self { user, token }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.user.role.grants(permission)
    }
}

impl From<AuthenticatedUser> for Session {
    fn from(value: AuthenticatedUser) -> Self {
        Self::new(value.user, value.token)
    }
}
