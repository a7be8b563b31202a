use reqwest::Method;

use backoffice_auth::{Session, UpdateUser, User};
use backoffice_core::UserId;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>, ClientError> {
        self.send_json("Fetch users", self.authed(Method::GET, "/users", session))
            .await
    }

    pub async fn get_user(&self, session: &Session, id: UserId) -> Result<User, ClientError> {
        self.send_json(
            "Fetch user",
            self.authed(Method::GET, &format!("/users/{id}"), session),
        )
        .await
    }

    pub async fn update_user(
        &self,
        session: &Session,
        id: UserId,
        user: &UpdateUser,
    ) -> Result<User, ClientError> {
        self.send_with_body(
            "Update user",
            self.authed(Method::PUT, &format!("/users/{id}"), session),
            user,
        )
        .await
    }

    pub async fn delete_user(&self, session: &Session, id: UserId) -> Result<(), ClientError> {
        self.send_empty(
            "Delete user",
            self.authed(Method::DELETE, &format!("/users/{id}"), session),
        )
        .await
    }
}
