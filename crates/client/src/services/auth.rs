use reqwest::Method;

use backoffice_auth::{AuthenticatedUser, LoginRequest, RegisterUser, Session, User};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ClientError> {
        let authenticated: AuthenticatedUser = self
            .send_with_body("Login", self.anonymous(Method::POST, "/auth/login"), credentials)
            .await?;
        tracing::info!(
            user_id = %authenticated.user.id,
            role = %authenticated.user.role,
            "logged in"
        );
        Ok(Session::from(authenticated))
    }

    /// Create a user account. Admin only on the server side.
    pub async fn register_user(
        &self,
        session: &Session,
        user: &RegisterUser,
    ) -> Result<User, ClientError> {
        self.send_with_body(
            "Register user",
            self.authed(Method::POST, "/auth/register", session),
            user,
        )
        .await
    }
}
