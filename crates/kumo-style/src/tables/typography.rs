//! Font size and font weight keywords.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::spacing::check_positive;
use crate::{Error, Result};

const BUILTIN_FONT_SIZES: &[(&str, f32)] = &[
    ("xs", 12.0),
    ("sm", 14.0),
    ("base", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
    ("5xl", 48.0),
    ("6xl", 60.0),
    ("7xl", 72.0),
    ("8xl", 96.0),
    ("9xl", 128.0),
];

const BUILTIN_FONT_WEIGHTS: &[(&str, u16)] = &[
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

/// Typography keyword tables for `text-{size}` and `font-{weight}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyScale {
    /// Size keyword to pixel font size.
    pub font_sizes: BTreeMap<String, f32>,
    /// Weight keyword to numeric weight.
    pub font_weights: BTreeMap<String, u16>,
}

impl Default for TypographyScale {
    fn default() -> Self {
        Self {
            font_sizes: BUILTIN_FONT_SIZES
                .iter()
                .map(|(key, px)| ((*key).to_string(), *px))
                .collect(),
            font_weights: BUILTIN_FONT_WEIGHTS
                .iter()
                .map(|(key, weight)| ((*key).to_string(), *weight))
                .collect(),
        }
    }
}

impl TypographyScale {
    /// Pixel font size for a size keyword.
    pub fn font_size(&self, keyword: &str) -> Option<f32> {
        self.font_sizes.get(keyword).copied()
    }

    /// Numeric weight for a weight keyword.
    pub fn font_weight(&self, keyword: &str) -> Option<u16> {
        self.font_weights.get(keyword).copied()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (key, px) in &self.font_sizes {
            check_positive("typography", key, *px)?;
        }
        for (key, weight) in &self.font_weights {
            if *weight == 0 {
                return Err(Error::invalid_table(
                    "typography",
                    key.as_str(),
                    "font weight must be positive",
                ));
            }
        }
        Ok(())
    }
}
