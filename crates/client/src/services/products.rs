use reqwest::Method;

use backoffice_auth::Session;
use backoffice_core::ProductId;
use backoffice_products::{NewProduct, Product};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    pub async fn list_products(&self, session: &Session) -> Result<Vec<Product>, ClientError> {
        self.send_json("Fetch products", self.authed(Method::GET, "/products", session))
            .await
    }

    pub async fn get_product(&self, session: &Session, id: ProductId) -> Result<Product, ClientError> {
        self.send_json(
            "Fetch product",
            self.authed(Method::GET, &format!("/products/{id}"), session),
        )
        .await
    }

    pub async fn create_product(
        &self,
        session: &Session,
        product: &NewProduct,
    ) -> Result<Product, ClientError> {
        self.send_with_body(
            "Create product",
            self.authed(Method::POST, "/products", session),
            product,
        )
        .await
    }

    pub async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<Product, ClientError> {
        self.send_with_body(
            "Update product",
            self.authed(Method::PUT, &format!("/products/{id}"), session),
            product,
        )
        .await
    }

    pub async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ClientError> {
        self.send_empty(
            "Delete product",
            self.authed(Method::DELETE, &format!("/products/{id}"), session),
        )
        .await
    }
}
