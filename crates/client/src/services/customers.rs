use reqwest::Method;

use backoffice_auth::Session;
use backoffice_core::CustomerId;
use backoffice_customers::{Customer, NewCustomer};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    pub async fn list_customers(&self, session: &Session) -> Result<Vec<Customer>, ClientError> {
        self.send_json("Fetch customers", self.authed(Method::GET, "/customers", session))
            .await
    }

    pub async fn get_customer(
        &self,
        session: &Session,
        id: CustomerId,
    ) -> Result<Customer, ClientError> {
        self.send_json(
            "Fetch customer",
            self.authed(Method::GET, &format!("/customers/{id}"), session),
        )
        .await
    }

    pub async fn create_customer(
        &self,
        session: &Session,
        customer: &NewCustomer,
    ) -> Result<Customer, ClientError> {
        self.send_with_body(
            "Create customer",
            self.authed(Method::POST, "/customers", session),
            customer,
        )
        .await
    }

    pub async fn update_customer(
        &self,
        session: &Session,
        id: CustomerId,
        customer: &NewCustomer,
    ) -> Result<Customer, ClientError> {
        self.send_with_body(
            "Update customer",
            self.authed(Method::PUT, &format!("/customers/{id}"), session),
            customer,
        )
        .await
    }

    pub async fn delete_customer(&self, session: &Session, id: CustomerId) -> Result<(), ClientError> {
        self.send_empty(
            "Delete customer",
            self.authed(Method::DELETE, &format!("/customers/{id}"), session),
        )
        .await
    }
}
