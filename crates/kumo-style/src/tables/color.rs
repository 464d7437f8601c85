//! Semantic color tokens and literal sentinels.
//!
//! A semantic token such as `kumo-brand` names a themeable design variable.
//! Fills and strokes bind `color-kumo-brand`; text binds `text-color-kumo-brand`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Literal colors that are not design variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLiteral {
    /// `transparent`: explicitly no paint.
    Transparent,
    /// `white`: hardcoded white, not theme-aware.
    White,
}

impl ColorLiteral {
    /// Parse a literal keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "transparent" => Some(Self::Transparent),
            "white" => Some(Self::White),
            _ => None,
        }
    }
}

/// Naming rules for semantic color variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorTable {
    /// Token namespace (`kumo` in `bg-kumo-brand`).
    pub namespace: String,
    /// Prefix of fill and stroke variable names.
    pub variable_prefix: String,
    /// Prefix of text color variable names.
    pub text_variable_prefix: String,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            namespace: "kumo".into(),
            variable_prefix: "color".into(),
            text_variable_prefix: "text-color".into(),
        }
    }
}

impl ColorTable {
    /// Extract the semantic name from a utility value.
    ///
    /// `kumo-brand` yields `brand`; values outside the namespace, with an
    /// empty name, or with characters a variable name cannot hold yield `None`.
    pub fn semantic_name<'a>(&self, value: &'a str) -> Option<&'a str> {
        let name = value
            .strip_prefix(self.namespace.as_str())?
            .strip_prefix('-')?;

        let valid = !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

        valid.then_some(name)
    }

    /// Variable name bound to fills and strokes.
    pub fn fill_variable(&self, name: &str) -> String {
        format!("{}-{}-{}", self.variable_prefix, self.namespace, name)
    }

    /// Variable name bound to text fills.
    pub fn text_variable(&self, name: &str) -> String {
        format!("{}-{}-{}", self.text_variable_prefix, self.namespace, name)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("namespace", &self.namespace),
            ("variable_prefix", &self.variable_prefix),
            ("text_variable_prefix", &self.text_variable_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid_table("color", key, "must not be empty"));
            }
        }
        Ok(())
    }
}
