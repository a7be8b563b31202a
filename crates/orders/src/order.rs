use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use backoffice_core::{CustomerId, Entity, Money, OrderId, OrderItemId, ProductId};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the order still awaits delivery.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Shipped)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as returned by the REST service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub scheduled_delivery_date: DateTime<Utc>,
    #[serde(default)]
    pub date_delivered: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery_street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery_city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery_state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery_postal: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delivery_country: String,
}

/// Delivery columns are nullable server-side; read `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A persisted order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

/// An order line joined with its product name, as the order detail endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedOrderItem {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAndItems {
    pub order: Order,
    pub items: Vec<PopulatedOrderItem>,
}

impl OrderAndItems {
    /// Sum of the persisted line totals.
    pub fn items_total(&self) -> Money {
        Money::total(self.items.iter().map(|i| &i.item.total_price))
    }

    /// Whether the stored order total matches its lines.
    pub fn totals_agree(&self) -> bool {
        self.items_total() == self.order.total_amount.rounded()
    }
}
