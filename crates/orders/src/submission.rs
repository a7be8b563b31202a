//! Submission payload for creating or updating an order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::error::optional;
use backoffice_core::{CustomerId, Money, ProductId};

use crate::composition::{LineComputation, OrderLine};
use crate::form::OrderForm;
use crate::order::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    pub scheduled_delivery_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_delivered: Option<NaiveDate>,
    pub status: OrderStatus,
    pub delivery_street: String,
    pub delivery_city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_postal: Option<String>,
    pub delivery_country: String,
    pub items: Vec<SubmissionLine>,
    pub total_amount: Money,
}

/// Assemble the payload from form values, validated lines and their pricing.
///
/// `lines` and `computations` are paired by position; a length mismatch
/// truncates to the shorter list.
pub fn build_submission(
    form: &OrderForm,
    lines: &[OrderLine],
    computations: &[LineComputation],
    total: Money,
    customer_id: CustomerId,
) -> OrderSubmission {
    let items = lines
        .iter()
        .zip(computations)
        .map(|(line, computed)| SubmissionLine {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: computed.unit_price,
            total_price: computed.extended_price,
        })
        .collect();

    OrderSubmission {
        customer_id,
        order_date: form.order_date,
        scheduled_delivery_date: form.scheduled_delivery_date,
        date_delivered: form.date_delivered,
        status: form.status,
        delivery_street: form.delivery.street.clone(),
        delivery_city: form.delivery.city.clone(),
        delivery_state: optional(Some(&form.delivery.state)),
        delivery_postal: optional(Some(&form.delivery.postal)),
        delivery_country: form.delivery.country.clone(),
        items,
        total_amount: total,
    }
}
