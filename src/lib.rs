//! Food Truck Voice - voice ordering for a food truck menu
//!
//! This library exports the order extraction core and its ambient modules.

/// Confirmation messages and the announcer seam
pub mod announce;
/// Configuration management
pub mod config;
/// Menu catalog
pub mod menu;
/// Matching utterances against menu items
pub mod matcher;
/// Order extraction
pub mod order;
/// Quantity extraction
pub mod quantity;
/// Logging setup
pub mod telemetry;

pub use menu::{Catalog, MenuItem};
pub use order::{OrderExtractor, OrderLine};
pub use quantity::Quantity;
