//! Design-variable catalogs.
//!
//! A catalog answers whether a variable name exists in the live variable
//! set. Binding itself happens in the generators; the audit only uses the
//! catalog to warn about names that would fail to bind.

use std::collections::{BTreeSet, HashSet};

/// Lookup of design-variable names.
pub trait VariableCatalog {
    /// Whether a variable with this exact name exists.
    fn contains(&self, name: &str) -> bool;
}

impl VariableCatalog for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

impl VariableCatalog for BTreeSet<String> {
    fn contains(&self, name: &str) -> bool {
        BTreeSet::contains(self, name)
    }
}
