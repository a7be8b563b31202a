use reqwest::Method;

use backoffice_auth::Session;
use backoffice_core::{CustomerId, OrderId};
use backoffice_orders::{Order, OrderAndItems, OrderSubmission};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// Every order across all customers.
    pub async fn list_orders(&self, session: &Session) -> Result<Vec<Order>, ClientError> {
        self.send_json("Fetch orders", self.authed(Method::GET, "/orders", session))
            .await
    }

    pub async fn list_customer_orders(
        &self,
        session: &Session,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, ClientError> {
        self.send_json(
            "Fetch customer orders",
            self.authed(Method::GET, &format!("/customers/{customer_id}/orders"), session),
        )
        .await
    }

    /// Order header plus its items, each carrying the product name.
    pub async fn get_order(
        &self,
        session: &Session,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<OrderAndItems, ClientError> {
        self.send_json(
            "Fetch order",
            self.authed(
                Method::GET,
                &format!("/customers/{customer_id}/orders/{order_id}"),
                session,
            ),
        )
        .await
    }

    pub async fn create_order(
        &self,
        session: &Session,
        customer_id: CustomerId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError> {
        self.send_with_body(
            "Create order",
            self.authed(Method::POST, &format!("/customers/{customer_id}/orders"), session),
            submission,
        )
        .await
    }

    pub async fn update_order(
        &self,
        session: &Session,
        customer_id: CustomerId,
        order_id: OrderId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError> {
        self.send_with_body(
            "Update order",
            self.authed(
                Method::PUT,
                &format!("/customers/{customer_id}/orders/{order_id}"),
                session,
            ),
            submission,
        )
        .await
    }

    pub async fn delete_order(
        &self,
        session: &Session,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<(), ClientError> {
        self.send_empty(
            "Delete order",
            self.authed(
                Method::DELETE,
                &format!("/customers/{customer_id}/orders/{order_id}"),
                session,
            ),
        )
        .await
    }
}
