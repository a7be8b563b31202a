use serde::{Deserialize, Serialize};

use backoffice_core::error::{is_email, required};
use backoffice_core::{Entity, UserId, ValidationErrors};

use crate::roles::Role;

/// Minimum password length accepted by the user forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A back-office user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub username: String,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Credentials sent to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl core::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim().to_string();
        if !is_email(&email) {
            errors.push("email", "Invalid email address");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Payload for creating a user account (admin only).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl core::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterUserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterUserForm {
    pub fn validate(&self) -> Result<RegisterUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username = required(&mut errors, "username", &self.username, "Username is required");
        let email = self.email.trim().to_string();
        if !is_email(&email) {
            errors.push("email", "Invalid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        errors.into_result(RegisterUser {
            username,
            email,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

/// Payload for updating a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditUserForm {
    pub username: String,
    pub role: Role,
}

impl EditUserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
        }
    }

    pub fn validate(&self) -> Result<UpdateUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username = required(&mut errors, "username", &self.username, "Username is required");
        errors.into_result(UpdateUser {
            username,
            role: self.role,
        })
    }
}
