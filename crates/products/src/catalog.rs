//! Read-only product catalog snapshot.
//!
//! The catalog may be stale relative to the true price at submission time;
//! pricing always uses whatever snapshot it was handed.

use std::collections::HashMap;

use backoffice_core::{Entity, Money, ProductId};

use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a snapshot. When ids repeat, the first occurrence wins.
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            index.entry(*product.id()).or_insert(position);
        }
        Self { products, index }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Unit price for a line's selection; `0.00` when unset or unknown.
    pub fn unit_price(&self, id: Option<&ProductId>) -> Money {
        id.and_then(|id| self.get(id))
            .map(|product| product.price)
            .unwrap_or(Money::ZERO)
    }

    /// Products in the order the provider returned them.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
