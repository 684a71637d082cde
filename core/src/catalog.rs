//! The fixed, ordered set of categories a widget filters.

use std::collections::HashSet;

use crate::{error::CatalogError, record::CategoryRecord};

/// Ordered, immutable sequence of [`CategoryRecord`]s.
///
/// Order is significant: it is the render order, and filtering never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CategoryRecord>,
}

impl Catalog {
    /// Builds a catalog from caller-provided records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyKey`] if a record has an empty key and
    /// [`CatalogError::DuplicateKey`] if two records share a key.
    pub fn new(records: impl IntoIterator<Item = CategoryRecord>) -> Result<Self, CatalogError> {
        let records: Vec<CategoryRecord> = records.into_iter().collect();
        let mut seen = HashSet::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.key.is_empty() {
                return Err(CatalogError::EmptyKey { position });
            }
            if !seen.insert(record.key.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    key: record.key.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    /// The built-in seven-entry catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let records = vec![
            CategoryRecord::new(
                "ps",
                "Products & Services",
                "/products/search",
                "Product & Service",
            ),
            CategoryRecord::new("loc", "Locations", "/locations/search", "Location"),
            CategoryRecord::new("res", "Resources", "/resources/search", "Resource"),
            CategoryRecord::new("rev", "Reviews", "/reviews/search", "Review"),
            CategoryRecord::new("ven", "Vendors", "/vendors/search", "Vendor"),
            CategoryRecord::new("ten", "Tenants", "/tenants/search", "Tenant"),
            CategoryRecord::new("pok", "Pokemon", "/pokemon/search", "Pokemon"),
        ];
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRecord> {
        self.records.iter()
    }

    /// Borrows the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CategoryRecord] {
        &self.records
    }

    /// Looks up a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CategoryRecord> {
        self.records.iter().find(|record| record.key == key)
    }

    /// Position of the record with the given key.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|record| record.key == key)
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.key.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CategoryRecord;
    type IntoIter = std::slice::Iter<'a, CategoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
