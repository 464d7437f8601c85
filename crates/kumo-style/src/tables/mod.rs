//! Immutable lookup tables consulted by the classifiers.
//!
//! [`StyleTables`] bundles every table the parser needs. It is built once,
//! either from the built-in defaults or from a TOML theme file, and then
//! shared read-only by any number of parse calls.
//!
//! # Theme files
//!
//! Each section overrides the matching built-in table field by field. A map
//! given in the file replaces the built-in map of the same name.
//!
//! ```toml
//! [spacing]
//! base_unit = 4.0
//!
//! [color]
//! namespace = "kumo"
//!
//! [border]
//! dash_pattern = [4.0, 2.0]
//!
//! [typography.font_weights]
//! normal = 400
//! medium = 500
//! ```

mod border;
mod color;
mod radius;
mod spacing;
mod typography;

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

pub use border::BorderTable;
pub use color::{ColorLiteral, ColorTable};
pub use radius::{DEFAULT_RADIUS_KEY, RadiusScale};
pub use spacing::SpacingScale;
pub use typography::TypographyScale;

/// All lookup tables used by a [`ClassParser`](crate::ClassParser).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleTables {
    /// Spacing and size scale.
    pub spacing: SpacingScale,
    /// Corner radius keywords.
    pub radius: RadiusScale,
    /// Semantic color naming.
    pub color: ColorTable,
    /// Border widths and dash cadence.
    pub border: BorderTable,
    /// Font sizes and weights.
    pub typography: TypographyScale,
}

static_assertions::assert_impl_all!(StyleTables: Send, Sync);

impl StyleTables {
    /// The built-in design-system tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse tables from TOML text, validating every entry.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let tables: Self = toml::from_str(source)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML theme file.
    ///
    /// Sections and fields missing from the file keep their built-in
    /// values; a keyword map given in the file replaces the built-in map.
    /// The result is validated before it is returned.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the theme file.
    ///
    /// # Returns
    ///
    /// Returns `Ok(StyleTables)` ready for [`ClassParser::new`](crate::ClassParser::new).
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Toml`] if it
    /// is not valid TOML or holds unknown keys, and [`Error::InvalidTable`]
    /// if an entry could yield an unsound style.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let tables = StyleTables::from_file("kumo-theme.toml")?;
    /// let parser = ClassParser::new(tables)?;
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let tables = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: crate::targets::TABLES,
            path = %path.display(),
            "loaded theme tables"
        );
        Ok(tables)
    }

    /// Check that every value a parse can emit is non-negative, and that
    /// sizes and weights are strictly positive.
    pub fn validate(&self) -> Result<()> {
        self.spacing.validate()?;
        self.radius.validate()?;
        self.color.validate()?;
        self.border.validate()?;
        self.typography.validate()?;
        Ok(())
    }
}
