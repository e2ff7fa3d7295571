use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in food truck menu, used when no catalog file is configured
const BUILTIN_MENU: &str = include_str!("../assets/menu.toml");

/// A single orderable item on the menu
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name, also matched as a whole phrase
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    /// Menu section (display only)
    pub category: String,
    /// Display description
    pub description: String,
    /// Lowercase matching signals used when the full name is absent
    pub keywords: Vec<String>,
}

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog from {path}: {source}")]
    Read {
        /// Path to catalog file
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML or has the wrong shape
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two items share the same id
    #[error("duplicate menu item id {0}")]
    DuplicateId(u32),

    /// Item has an empty name
    #[error("menu item {id} has an empty name")]
    EmptyName {
        /// Offending item id
        id: u32,
    },

    /// Item price is negative or not a number
    #[error("menu item {id} has invalid price {price}")]
    InvalidPrice {
        /// Offending item id
        id: u32,
        /// Rejected price
        price: f64,
    },

    /// Item has no keywords
    #[error("menu item {id} has no keywords")]
    NoKeywords {
        /// Offending item id
        id: u32,
    },

    /// Item has a keyword that is empty after trimming
    #[error("menu item {id} has a blank keyword")]
    BlankKeyword {
        /// Offending item id
        id: u32,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<MenuItem>,
}

/// Read-only collection of menu items, in menu order
///
/// A catalog is validated once on construction and never mutated afterwards,
/// so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items, validating each one
    ///
    /// Keywords are normalized to lowercase.
    ///
    /// # Errors
    /// Returns error on duplicate ids, empty names, negative prices or missing keywords
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut validated = Vec::with_capacity(items.len());

        for mut item in items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: item.id });
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: item.id,
                    price: item.price,
                });
            }
            if item.keywords.is_empty() {
                return Err(CatalogError::NoKeywords { id: item.id });
            }
            if item.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::BlankKeyword { id: item.id });
            }

            for keyword in &mut item.keywords {
                *keyword = keyword.to_lowercase();
            }
            validated.push(item);
        }

        Ok(Self { items: validated })
    }

    /// Parse a catalog from a TOML document of `[[items]]` tables
    ///
    /// # Errors
    /// Returns error if the document is malformed or fails validation
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.items)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    /// Returns error if the file can't be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The food truck's built-in menu
    ///
    /// # Errors
    /// Returns error only if the embedded menu asset is invalid
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_MENU)
    }

    /// Items in menu order
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterate items in menu order
    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
