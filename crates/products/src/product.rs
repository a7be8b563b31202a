use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use backoffice_core::error::{optional, required};
use backoffice_core::{Entity, Money, ProductId, ValidationErrors};

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("static price pattern"));

static STOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("static stock pattern"));

/// Product categories offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    #[default]
    Trucks,
    LegoSets,
    Scooters,
    StuffedAnimals,
    Dolls,
    KitchenSets,
    JewelryKits,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Trucks,
        ProductCategory::LegoSets,
        ProductCategory::Scooters,
        ProductCategory::StuffedAnimals,
        ProductCategory::Dolls,
        ProductCategory::KitchenSets,
        ProductCategory::JewelryKits,
    ];

    /// Wire name, as used by the REST service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Trucks => "trucks",
            ProductCategory::LegoSets => "lego_sets",
            ProductCategory::Scooters => "scooters",
            ProductCategory::StuffedAnimals => "stuffed_animals",
            ProductCategory::Dolls => "dolls",
            ProductCategory::KitchenSets => "kitchen_sets",
            ProductCategory::JewelryKits => "jewelry_kits",
        }
    }

    /// Human-readable label for select inputs.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Trucks => "Trucks",
            ProductCategory::LegoSets => "Lego Sets",
            ProductCategory::Scooters => "Scooters",
            ProductCategory::StuffedAnimals => "Stuffed Animals",
            ProductCategory::Dolls => "Dolls",
            ProductCategory::KitchenSets => "Kitchen Sets",
            ProductCategory::JewelryKits => "Jewelry Kits",
        }
    }
}

/// A catalog product as returned by the REST service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    pub category: ProductCategory,
    #[serde(default)]
    pub image_url: Option<String>,
    pub stock_quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    pub stock_quantity: u32,
}

/// Raw product form input.
///
/// Price and stock stay text until validation so that partially typed values
/// can be held by the form without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: ProductCategory,
    pub image_url: String,
    pub stock_quantity: String,
}

impl ProductForm {
    /// A blank create form (stock defaults to `"0"`).
    pub fn new() -> Self {
        Self {
            stock_quantity: "0".to_string(),
            ..Self::default()
        }
    }

    /// Edit defaults taken from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category: product.category,
            image_url: product.image_url.clone().unwrap_or_default(),
            stock_quantity: product.stock_quantity.to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", &self.name, "Name is required");

        let price_text = self.price.trim();
        let price = if PRICE_PATTERN.is_match(price_text) {
            price_text.parse::<Money>().ok()
        } else {
            None
        };
        if price.is_none() {
            errors.push("price", "Invalid price");
        }

        let stock_text = self.stock_quantity.trim();
        let stock_quantity = if STOCK_PATTERN.is_match(stock_text) {
            stock_text.parse::<u32>().ok()
        } else {
            None
        };
        if stock_quantity.is_none() {
            errors.push("stockQuantity", "Must be an integer");
        }

        match (price, stock_quantity) {
            (Some(price), Some(stock_quantity)) if errors.is_empty() => Ok(NewProduct {
                name,
                description: optional(Some(&self.description)),
                price,
                category: self.category,
                image_url: optional(Some(&self.image_url)),
                stock_quantity,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Fire Truck".to_string(),
            description: "  ".to_string(),
            price: "24.5".to_string(),
            category: ProductCategory::Trucks,
            image_url: String::new(),
            stock_quantity: "12".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_new_product() {
        let product = valid_form().validate().unwrap();
        assert_eq!(product.name, "Fire Truck");
        assert_eq!(product.price.to_string(), "24.50");
        assert_eq!(product.stock_quantity, 12);
        assert_eq!(product.description, None);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn rejects_price_with_more_than_two_decimals() {
        let form = ProductForm {
            price: "1.999".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("price"), Some("Invalid price"));
    }

    #[test]
    fn rejects_negative_or_textual_price() {
        for price in ["-1.00", "abc", "", "1.", ".50"] {
            let form = ProductForm {
                price: price.to_string(),
                ..valid_form()
            };
            assert!(form.validate().unwrap_err().has("price"), "price {price:?}");
        }
    }

    #[test]
    fn collects_every_field_error() {
        let form = ProductForm {
            name: " ".to_string(),
            price: "x".to_string(),
            stock_quantity: "1.5".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has("name"));
        assert!(errors.has("price"));
        assert!(errors.has("stockQuantity"));
    }

    #[test]
    fn blank_form_defaults_stock_to_zero() {
        let form = ProductForm::new();
        assert_eq!(form.stock_quantity, "0");
        assert_eq!(form.category, ProductCategory::Trucks);
    }

    #[test]
    fn edit_form_round_trips_existing_product() {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: "Doll House".to_string(),
            description: Some("Three floors".to_string()),
            price: "79.9".parse().unwrap(),
            category: ProductCategory::Dolls,
            image_url: None,
            stock_quantity: 4,
            created_at: now,
            updated_at: now,
        };

        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "79.90");

        let payload = form.validate().unwrap();
        assert_eq!(payload.price, product.price);
        assert_eq!(payload.description, product.description);
        assert_eq!(payload.category, ProductCategory::Dolls);
    }

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": "0191d3f6-8c2a-7c3e-9a55-6f1f4f2b9a10",
            "name": "Scooter",
            "description": null,
            "price": "49.99",
            "category": "scooters",
            "imageUrl": null,
            "stockQuantity": 3,
            "createdAt": "2025-07-31T10:00:00Z",
            "updatedAt": "2025-07-31T10:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, ProductCategory::Scooters);
        assert_eq!(product.price.to_string(), "49.99");
        assert!(product.in_stock());
    }

    #[test]
    fn category_wire_names_match_serde() {
        for category in ProductCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
