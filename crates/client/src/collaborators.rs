//! Collaborators of the order composition engine.
//!
//! The composer itself does no IO. A `CatalogProvider` supplies the product
//! snapshot it prices against, and a `SubmissionSink` receives the finished
//! payload. `ApiClient` implements both against the REST service.

use async_trait::async_trait;

use backoffice_auth::Session;
use backoffice_core::{CustomerId, OrderId};
use backoffice_orders::{Order, OrderComposer, OrderForm, OrderSubmission};
use backoffice_products::Catalog;

use crate::client::ApiClient;
use crate::error::ClientError;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self, session: &Session) -> Result<Catalog, ClientError>;
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn create(
        &self,
        session: &Session,
        customer_id: CustomerId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError>;

    async fn update(
        &self,
        session: &Session,
        customer_id: CustomerId,
        order_id: OrderId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError>;
}

/// Whether a submission creates a new order or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTarget {
    Create,
    Update(OrderId),
}

#[async_trait]
impl CatalogProvider for ApiClient {
    async fn fetch_catalog(&self, session: &Session) -> Result<Catalog, ClientError> {
        let products = self.list_products(session).await?;
        let catalog = Catalog::new(products);
        tracing::debug!(products = catalog.len(), "catalog snapshot fetched");
        Ok(catalog)
    }
}

#[async_trait]
impl SubmissionSink for ApiClient {
    async fn create(
        &self,
        session: &Session,
        customer_id: CustomerId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError> {
        self.create_order(session, customer_id, submission).await
    }

    async fn update(
        &self,
        session: &Session,
        customer_id: CustomerId,
        order_id: OrderId,
        submission: &OrderSubmission,
    ) -> Result<Order, ClientError> {
        self.update_order(session, customer_id, order_id, submission)
            .await
    }
}

/// Validate the composed order and hand it to `sink`.
///
/// Local validation failures come back as `ClientError::Rejected` and the sink
/// is never called.
pub async fn submit_order<S>(
    sink: &S,
    session: &Session,
    composer: &OrderComposer,
    form: &OrderForm,
    customer_id: CustomerId,
    target: SubmissionTarget,
) -> Result<Order, ClientError>
where
    S: SubmissionSink + ?Sized,
{
    let submission = composer
        .prepare_submission(form, customer_id)
        .inspect_err(|e| tracing::info!(%customer_id, error = %e, "order rejected before submission"))?;

    tracing::info!(
        %customer_id,
        lines = submission.items.len(),
        total = %submission.total_amount,
        ?target,
        "submitting order"
    );

    match target {
        SubmissionTarget::Create => sink.create(session, customer_id, &submission).await,
        SubmissionTarget::Update(order_id) => {
            sink.update(session, customer_id, order_id, &submission)
                .await
        }
    }
}
