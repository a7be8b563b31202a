use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use backoffice_core::error::{is_email, optional, required};
use backoffice_core::{CustomerId, Entity, ValidationErrors};

/// A customer as returned by the REST service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Address parts of a customer, used to prefill order delivery fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Customer {
    /// The customer's stored address; missing parts become empty strings.
    pub fn address(&self) -> CustomerAddress {
        let part = |value: &Option<String>| value.clone().unwrap_or_default();
        CustomerAddress {
            street: part(&self.street),
            city: part(&self.city),
            state: part(&self.state),
            postal_code: part(&self.postal_code),
            country: part(&self.country),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated payload for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Raw customer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl CustomerForm {
    pub fn from_customer(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
        }
    }

    pub fn validate(&self) -> Result<NewCustomer, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", &self.name, "Name is required");
        if !name.is_empty() && name.chars().count() < 2 {
            errors.push("name", "Name is required");
        }

        let email = self.email.trim().to_string();
        if !is_email(&email) {
            errors.push("email", "Invalid email address");
        }

        errors.into_result(NewCustomer {
            name,
            email,
            phone: optional(Some(&self.phone)),
            street: optional(Some(&self.street)),
            city: optional(Some(&self.city)),
            state: optional(Some(&self.state)),
            postal_code: optional(Some(&self.postal_code)),
            country: optional(Some(&self.country)),
        })
    }
}
