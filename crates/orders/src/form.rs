//! Typed order details form (everything on an order except its lines).

use chrono::{Days, NaiveDate};

use backoffice_core::ValidationErrors;
use backoffice_core::error::{optional, required};
use backoffice_customers::Customer;

use crate::order::{Order, OrderStatus};

/// Days between the order date and the default scheduled delivery date.
pub const DEFAULT_DELIVERY_LEAD_DAYS: u64 = 14;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub order_date: NaiveDate,
    pub scheduled_delivery_date: NaiveDate,
    pub date_delivered: Option<NaiveDate>,
    pub status: OrderStatus,
    pub delivery: DeliveryAddress,
}

impl OrderForm {
    /// Create-form defaults: dated `today`, delivery scheduled two weeks out,
    /// pending, shipped to the customer's stored address.
    pub fn for_customer(customer: &Customer, today: NaiveDate) -> Self {
        let address = customer.address();
        Self {
            order_date: today,
            scheduled_delivery_date: today
                .checked_add_days(Days::new(DEFAULT_DELIVERY_LEAD_DAYS))
                .unwrap_or(today),
            date_delivered: None,
            status: OrderStatus::Pending,
            delivery: DeliveryAddress {
                street: address.street,
                city: address.city,
                state: address.state,
                postal: address.postal_code,
                country: address.country,
            },
        }
    }

    /// Edit-form defaults taken from an existing order.
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_date: order.order_date.date_naive(),
            scheduled_delivery_date: order.scheduled_delivery_date.date_naive(),
            date_delivered: order.date_delivered.map(|d| d.date_naive()),
            status: order.status,
            delivery: DeliveryAddress {
                street: order.delivery_street.clone(),
                city: order.delivery_city.clone(),
                state: order.delivery_state.clone(),
                postal: order.delivery_postal.clone(),
                country: order.delivery_country.clone(),
            },
        }
    }

    /// Check required delivery fields and return a trimmed copy.
    pub fn validate(&self) -> Result<OrderForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let street = required(
            &mut errors,
            "deliveryStreet",
            &self.delivery.street,
            "Street is required",
        );
        let city = required(&mut errors, "deliveryCity", &self.delivery.city, "City is required");
        let country = required(
            &mut errors,
            "deliveryCountry",
            &self.delivery.country,
            "Country is required",
        );

        errors.into_result(OrderForm {
            delivery: DeliveryAddress {
                street,
                city,
                state: optional(Some(&self.delivery.state)).unwrap_or_default(),
                postal: optional(Some(&self.delivery.postal)).unwrap_or_default(),
                country,
            },
            ..self.clone()
        })
    }
}
