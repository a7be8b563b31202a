//! Order composition engine.
//!
//! Holds the line selections of an order being composed and re-derives each
//! line's pricing plus the order total after every mutation. Pricing itself is
//! exposed as the pure functions [`compute_lines`] and [`compute_total`].

use serde::{Deserialize, Serialize};

use backoffice_core::{CustomerId, Money, ProductId};
use backoffice_products::Catalog;

use crate::error::{ComposeError, LineError};
use crate::form::OrderForm;
use crate::order::OrderItem;
use crate::submission::{OrderSubmission, build_submission};

/// One product + quantity pair of an order being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSelection {
    /// `None` until a product has been picked.
    pub product_id: Option<ProductId>,
    pub quantity: u32,
}

impl LineSelection {
    /// A fresh line: no product, quantity 1.
    pub fn blank() -> Self {
        Self {
            product_id: None,
            quantity: 1,
        }
    }

    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id: Some(product_id),
            quantity,
        }
    }
}

impl Default for LineSelection {
    fn default() -> Self {
        Self::blank()
    }
}

/// Derived pricing of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineComputation {
    pub unit_price: Money,
    /// `unit_price × quantity`, rounded half-up to two places.
    pub extended_price: Money,
}

/// A line that passed submission checks: product chosen, quantity ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Coerce raw quantity input to a count.
///
/// Anything that is not a non-negative integer (after trimming) becomes 0,
/// including values that overflow `u32`.
pub fn sanitize_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Price every selection against `catalog`. Unresolved products price at `0.00`.
pub fn compute_lines(selections: &[LineSelection], catalog: &Catalog) -> Vec<LineComputation> {
    selections
        .iter()
        .map(|selection| {
            let unit_price = catalog.unit_price(selection.product_id.as_ref());
            LineComputation {
                unit_price,
                extended_price: unit_price.times(selection.quantity),
            }
        })
        .collect()
}

/// Decimal sum of the extended prices, rounded half-up to two places.
pub fn compute_total(lines: &[LineComputation]) -> Money {
    Money::total(lines.iter().map(|line| &line.extended_price))
}

/// Stateful composer behind the order create/edit form.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    catalog: Catalog,
    lines: Vec<LineSelection>,
    computations: Vec<LineComputation>,
    total: Money,
}

impl OrderComposer {
    /// A composer with one blank line, as a new order starts.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_lines(catalog, vec![LineSelection::blank()])
    }

    pub fn with_lines(catalog: Catalog, lines: Vec<LineSelection>) -> Self {
        let mut composer = Self {
            catalog,
            lines,
            computations: Vec::new(),
            total: Money::ZERO,
        };
        composer.recompute();
        composer
    }

    /// Seed from an existing order's items. Prices are re-derived from `catalog`.
    pub fn from_items<'a, I>(catalog: Catalog, items: I) -> Self
    where
        I: IntoIterator<Item = &'a OrderItem>,
    {
        let lines = items
            .into_iter()
            .map(|item| LineSelection::new(item.product_id, item.quantity))
            .collect();
        Self::with_lines(catalog, lines)
    }

    /// Swap in a newer catalog snapshot.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.recompute();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Append a blank line and return its index.
    pub fn add_line(&mut self) -> usize {
        self.lines.push(LineSelection::blank());
        self.recompute();
        self.lines.len() - 1
    }

    pub fn remove_line(&mut self, index: usize) -> Result<LineSelection, ComposeError> {
        self.check_index(index)?;
        let removed = self.lines.remove(index);
        self.recompute();
        Ok(removed)
    }

    pub fn set_line_product(
        &mut self,
        index: usize,
        product_id: Option<ProductId>,
    ) -> Result<(), ComposeError> {
        self.check_index(index)?;
        self.lines[index].product_id = product_id;
        self.recompute();
        Ok(())
    }

    /// Set a quantity from raw input; returns the sanitized value stored.
    pub fn set_line_quantity(&mut self, index: usize, raw: &str) -> Result<u32, ComposeError> {
        let quantity = sanitize_quantity(raw);
        self.set_line_quantity_value(index, quantity)?;
        Ok(quantity)
    }

    pub fn set_line_quantity_value(
        &mut self,
        index: usize,
        quantity: u32,
    ) -> Result<(), ComposeError> {
        self.check_index(index)?;
        self.lines[index].quantity = quantity;
        self.recompute();
        Ok(())
    }

    pub fn lines(&self) -> &[LineSelection] {
        &self.lines
    }

    pub fn computations(&self) -> &[LineComputation] {
        &self.computations
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Submission checks: at least one line; every line has a product and a
    /// quantity of at least 1. Reports every offending line.
    pub fn validate(&self) -> Result<Vec<OrderLine>, ComposeError> {
        if self.lines.is_empty() {
            return Err(ComposeError::EmptyOrder);
        }

        let mut valid = Vec::with_capacity(self.lines.len());
        let mut errors = Vec::new();
        for (index, line) in self.lines.iter().enumerate() {
            if line.product_id.is_none() {
                errors.push(LineError::MissingProduct { index });
            }
            if line.quantity == 0 {
                errors.push(LineError::ZeroQuantity { index });
            }
            if let (Some(product_id), true) = (line.product_id, line.quantity > 0) {
                valid.push(OrderLine {
                    product_id,
                    quantity: line.quantity,
                });
            }
        }

        if errors.is_empty() {
            Ok(valid)
        } else {
            Err(ComposeError::InvalidLines(errors))
        }
    }

    /// Validate lines and form, then assemble the payload. Performs no IO.
    pub fn prepare_submission(
        &self,
        form: &OrderForm,
        customer_id: CustomerId,
    ) -> Result<OrderSubmission, ComposeError> {
        let lines = self.validate()?;
        let form = form.validate().map_err(ComposeError::InvalidForm)?;
        Ok(build_submission(
            &form,
            &lines,
            &self.computations,
            self.total,
            customer_id,
        ))
    }

    fn check_index(&self, index: usize) -> Result<(), ComposeError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(ComposeError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }

    fn recompute(&mut self) {
        self.computations = compute_lines(&self.lines, &self.catalog);
        self.total = compute_total(&self.computations);
        tracing::debug!(lines = self.lines.len(), total = %self.total, "order pricing recomputed");
    }
}
