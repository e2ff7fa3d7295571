use crate::matcher::match_items;
use crate::menu::{Catalog, MenuItem};
use crate::quantity::{Quantity, QuantityExtractor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while setting up order extraction
#[derive(Debug, Error)]
pub enum OrderError {
    /// Quantity pattern failed to compile
    #[error("failed to compile quantity pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One menu item referenced by an utterance, with its quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLine<'a> {
    /// Matched menu item
    pub item: &'a MenuItem,
    /// Units ordered
    pub quantity: Quantity,
}

impl OrderLine<'_> {
    /// Price of the line (unit price times quantity)
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity.get())
    }
}

/// Turns free-form utterances into order lines against a fixed catalog
///
/// Holds no per-call state; share it across tasks behind `Arc` or by reference.
#[derive(Debug, Clone)]
pub struct OrderExtractor {
    catalog: Arc<Catalog>,
    quantities: QuantityExtractor,
}

impl OrderExtractor {
    /// Creates an extractor over `catalog`
    ///
    /// # Errors
    /// Returns error if the quantity pattern fails to compile
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, OrderError> {
        Ok(Self {
            catalog,
            quantities: QuantityExtractor::new()?,
        })
    }

    /// Catalog the extractor matches against
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Extract the order lines stated in `utterance`
    ///
    /// Every matched item gets the utterance's single quantity. An empty
    /// result means the utterance wasn't understood.
    #[must_use]
    pub fn extract_order(&self, utterance: &str) -> Vec<OrderLine<'_>> {
        let quantity = self.quantities.extract(utterance);
        let lines: Vec<OrderLine<'_>> = match_items(utterance, &self.catalog)
            .into_iter()
            .map(|item| OrderLine { item, quantity })
            .collect();

        if lines.is_empty() {
            debug!(utterance = utterance, "no menu item matched");
        } else {
            info!(
                utterance = utterance,
                items = lines.len(),
                quantity = %quantity,
                "order extracted"
            );
        }

        lines
    }
}
