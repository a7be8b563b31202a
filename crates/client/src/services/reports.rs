use reqwest::Method;

use backoffice_auth::Session;
use backoffice_core::CustomerId;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// Raw PDF bytes of the customer report.
    pub async fn customer_report_pdf(
        &self,
        session: &Session,
        customer_id: CustomerId,
    ) -> Result<Vec<u8>, ClientError> {
        let request = self
            .authed(
                Method::GET,
                &format!("/reports/customer/{customer_id}/pdf"),
                session,
            )
            .header(reqwest::header::ACCEPT, "application/pdf");
        let bytes = self.send_bytes("Download customer report", request).await?;
        tracing::info!(%customer_id, size = bytes.len(), "customer report downloaded");
        Ok(bytes)
    }
}
