//! Dashboard analytics.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use backoffice_auth::Session;
use backoffice_products::ProductCategory;

use crate::client::ApiClient;
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderByDay {
    pub day: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    /// Wire name of the category; unknown names are kept as-is.
    pub category: String,
    pub count: u64,
}

impl CategoryDistribution {
    pub fn known_category(&self) -> Option<ProductCategory> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == self.category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_customers: u64,
    #[serde(default)]
    pub orders_by_day: Vec<OrderByDay>,
    #[serde(default)]
    pub location_data: Vec<LocationData>,
    #[serde(default)]
    pub type_distribution: Vec<CategoryDistribution>,
}

impl DashboardData {
    pub fn total_orders(&self) -> u64 {
        self.orders_by_day.iter().map(|d| d.count).sum()
    }

    /// Country with the most orders; ties go to the first listed.
    pub fn top_country(&self) -> Option<&LocationData> {
        self.location_data
            .iter()
            .reduce(|best, next| if next.count > best.count { next } else { best })
    }
}

impl ApiClient {
    pub async fn fetch_dashboard(&self, session: &Session) -> Result<DashboardData, ClientError> {
        self.send_json("Fetch analytics", self.authed(Method::GET, "/analytics", session))
            .await
    }
}
