//! Component registry model.
//!
//! The registry describes, per component, the class strings generators feed
//! into the parser: the base styles, one string per variant value, and one
//! per size. Fields the audit does not need are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Class string attached to one variant value or size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VariantStyle {
    /// Space-separated utility classes.
    pub classes: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Styling entry for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classes every instance carries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_styles: Option<String>,
    /// Variant prop name to value name to classes.
    pub variants: BTreeMap<String, BTreeMap<String, VariantStyle>>,
    /// Size name to classes.
    pub sizes: BTreeMap<String, VariantStyle>,
}

/// The component styling registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Registry {
    /// Registry format or package version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Components by name.
    pub components: BTreeMap<String, Component>,
}

/// Where in the registry a class string lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClassSlot {
    /// `baseStyles`
    Base,
    /// `variants.<prop>.<value>`
    Variant { prop: String, value: String },
    /// `sizes.<size>`
    Size { size: String },
}

/// A class string's owner and slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassSource {
    /// Component name.
    pub component: String,
    /// Slot within the component.
    pub slot: ClassSlot,
}

impl fmt::Display for ClassSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            ClassSlot::Base => write!(f, "{}.baseStyles", self.component),
            ClassSlot::Variant { prop, value } => {
                write!(f, "{}.variants.{}.{}", self.component, prop, value)
            }
            ClassSlot::Size { size } => write!(f, "{}.sizes.{}", self.component, size),
        }
    }
}

impl Registry {
    /// Parse a registry from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a registry from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let registry = Self::from_json_str(&content)?;
        tracing::debug!(
            target: crate::targets::REGISTRY,
            path = %path.display(),
            components = registry.components.len(),
            "loaded component registry"
        );
        Ok(registry)
    }

    /// Get a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Every class string in the registry.
    ///
    /// Order is deterministic: components by name, then base styles,
    /// variants by prop and value, sizes by name.
    pub fn class_strings(&self) -> impl Iterator<Item = (ClassSource, &str)> {
        self.components
            .iter()
            .flat_map(|(name, component)| component.class_strings(name))
    }
}

impl Component {
    /// Every class string of this component, labelled with `name`.
    pub fn class_strings<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (ClassSource, &'a str)> + 'a {
        let source = move |slot: ClassSlot| ClassSource {
            component: name.to_string(),
            slot,
        };

        let base = self
            .base_styles
            .as_deref()
            .map(move |classes| (source(ClassSlot::Base), classes));

        let variants = self.variants.iter().flat_map(move |(prop, values)| {
            values.iter().map(move |(value, style)| {
                let slot = ClassSlot::Variant {
                    prop: prop.clone(),
                    value: value.clone(),
                };
                (source(slot), style.classes.as_str())
            })
        });

        let sizes = self.sizes.iter().map(move |(size, style)| {
            let slot = ClassSlot::Size { size: size.clone() };
            (source(slot), style.classes.as_str())
        });

        base.into_iter().chain(variants).chain(sizes)
    }
}
