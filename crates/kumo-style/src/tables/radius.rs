//! Corner radius keywords.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::spacing::check_non_negative;
use crate::Result;

/// Key used for the bare `rounded` utility.
pub const DEFAULT_RADIUS_KEY: &str = "DEFAULT";

const BUILTIN_RADII: &[(&str, f32)] = &[
    ("none", 0.0),
    ("xs", 2.0),
    ("sm", 4.0),
    (DEFAULT_RADIUS_KEY, 4.0),
    ("md", 6.0),
    ("lg", 8.0),
    ("xl", 12.0),
    ("2xl", 16.0),
    ("3xl", 24.0),
    ("4xl", 32.0),
    ("full", 9999.0),
];

/// Keyword table for unqualified `rounded-*` utilities.
///
/// Side and corner qualified utilities (`rounded-t-lg`, `rounded-bl-none`)
/// have no entry here and stay unrecognized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadiusScale {
    /// Keyword to pixel radius.
    pub keywords: BTreeMap<String, f32>,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            keywords: BUILTIN_RADII
                .iter()
                .map(|(key, px)| ((*key).to_string(), *px))
                .collect(),
        }
    }
}

impl RadiusScale {
    /// Pixel radius for a keyword; `None` looks up the bare `rounded`.
    pub fn resolve(&self, keyword: Option<&str>) -> Option<f32> {
        self.keywords
            .get(keyword.unwrap_or(DEFAULT_RADIUS_KEY))
            .copied()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (key, px) in &self.keywords {
            check_non_negative("radius", key, *px)?;
        }
        Ok(())
    }
}
