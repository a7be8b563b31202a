//! Command-line entry point: log in, then report what the session can see.

use anyhow::Context;

use backoffice_auth::{LoginForm, navigation};
use backoffice_client::{ApiClient, CatalogProvider, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    backoffice_observability::init();

    let config = ClientConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, "starting back-office client");
    let client = ApiClient::new(&config)?;

    let form = LoginForm {
        email: std::env::var("BACKOFFICE_EMAIL").context("BACKOFFICE_EMAIL not set")?,
        password: std::env::var("BACKOFFICE_PASSWORD").context("BACKOFFICE_PASSWORD not set")?,
    };
    let credentials = form.validate()?;
    let session = client.login(&credentials).await?;

    for item in navigation(session.role()) {
        tracing::info!(title = item.title, path = %item.route.path(), "navigation entry");
    }

    let catalog = client.fetch_catalog(&session).await?;
    let in_stock = catalog.products().iter().filter(|p| p.in_stock()).count();
    tracing::info!(products = catalog.len(), in_stock, "catalog loaded");

    let dashboard = client.fetch_dashboard(&session).await?;
    tracing::info!(
        customers = dashboard.total_customers,
        orders = dashboard.total_orders(),
        top_country = ?dashboard.top_country().map(|l| l.country.as_str()),
        "dashboard loaded"
    );

    Ok(())
}
