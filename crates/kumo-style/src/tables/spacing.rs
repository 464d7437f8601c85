//! Spacing/size scale and arbitrary length values.
//!
//! Numeric utility suffixes (`p-2`, `h-8.5`, `gap-0.5`) resolve through
//! [`SpacingScale`]; bracketed literals (`w-[32rem]`, `min-w-[10px]`) are
//! tokenized with `cssparser` and converted to pixels.
//!
//! # Example
//!
//! ```
//! use kumo_style::tables::SpacingScale;
//!
//! let scale = SpacingScale::default();
//! assert_eq!(scale.resolve("2"), Some(8.0));
//! assert_eq!(scale.resolve("8.5"), Some(34.0));
//! assert_eq!(scale.resolve("[32rem]"), Some(512.0));
//! assert_eq!(scale.resolve("[10vh]"), None);
//! ```

use std::collections::BTreeMap;

use cssparser::{Parser, ParserInput, Token};
use serde::Deserialize;

use crate::{Error, Result};

/// Conventional scale keys and their pixel values (4px per unit).
const BUILTIN_SCALE: &[(&str, f32)] = &[
    ("0", 0.0),
    ("px", 1.0),
    ("0.5", 2.0),
    ("1", 4.0),
    ("1.5", 6.0),
    ("2", 8.0),
    ("2.5", 10.0),
    ("3", 12.0),
    ("3.5", 14.0),
    ("4", 16.0),
    ("5", 20.0),
    ("6", 24.0),
    ("7", 28.0),
    ("8", 32.0),
    ("9", 36.0),
    ("10", 40.0),
    ("11", 44.0),
    ("12", 48.0),
    ("14", 56.0),
    ("16", 64.0),
    ("20", 80.0),
    ("24", 96.0),
    ("28", 112.0),
    ("32", 128.0),
    ("36", 144.0),
    ("40", 160.0),
    ("44", 176.0),
    ("48", 192.0),
    ("52", 208.0),
    ("56", 224.0),
    ("60", 240.0),
    ("64", 256.0),
    ("72", 288.0),
    ("80", 320.0),
    ("96", 384.0),
];

/// Smallest fractional step the dynamic scale accepts.
const STEP_DIVISOR: f32 = 4.0;

/// Spacing and sizing scale shared by padding, gap, width and height utilities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingScale {
    /// Pixels per scale unit.
    pub base_unit: f32,
    /// Pixels per `rem` in arbitrary values.
    pub rem_px: f32,
    /// Explicit scale keys.
    pub scale: BTreeMap<String, f32>,
    /// Resolve unlisted quarter-step keys as `key * base_unit`.
    pub dynamic_steps: bool,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            base_unit: 4.0,
            rem_px: 16.0,
            scale: BUILTIN_SCALE
                .iter()
                .map(|(key, px)| ((*key).to_string(), *px))
                .collect(),
            dynamic_steps: true,
        }
    }
}

impl SpacingScale {
    /// Resolve a utility suffix to pixels.
    ///
    /// Explicit table keys win, then bracketed arbitrary values, then the
    /// dynamic quarter-step rule. Fractional keys are looked up as written,
    /// never rounded.
    pub fn resolve(&self, key: &str) -> Option<f32> {
        if let Some(px) = self.scale.get(key) {
            return Some(*px);
        }

        if key.starts_with('[') {
            return self.resolve_arbitrary(key);
        }

        if !self.dynamic_steps || !is_plain_decimal(key) {
            return None;
        }

        let steps: f32 = key.parse().ok()?;
        if !steps.is_finite() || steps < 0.0 || (steps * STEP_DIVISOR).fract() != 0.0 {
            return None;
        }

        Some(steps * self.base_unit)
    }

    /// Resolve a bracketed arbitrary length such as `[32rem]` or `[10px]`.
    ///
    /// The bracket content is tokenized as CSS and must be exactly one
    /// length. Units compare case-insensitively, as in CSS.
    ///
    /// # Arguments
    ///
    /// * `value` - The utility suffix including its brackets.
    ///
    /// # Returns
    ///
    /// The length in pixels: `px` as written, `rem` times
    /// [`rem_px`](Self::rem_px), and a bare `0` as zero. Any other unit, a
    /// unitless non-zero number, a negative or non-finite length, trailing
    /// tokens or missing brackets give `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use kumo_style::tables::SpacingScale;
    ///
    /// let scale = SpacingScale::default();
    /// assert_eq!(scale.resolve_arbitrary("[32rem]"), Some(512.0));
    /// assert_eq!(scale.resolve_arbitrary("[10PX]"), Some(10.0));
    /// assert_eq!(scale.resolve_arbitrary("[50%]"), None);
    /// assert_eq!(scale.resolve_arbitrary("10px"), None);
    /// ```
    pub fn resolve_arbitrary(&self, value: &str) -> Option<f32> {
        let inner = value.strip_prefix('[')?.strip_suffix(']')?;
        resolve_length(inner, self.rem_px)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_positive("spacing", "base_unit", self.base_unit)?;
        check_positive("spacing", "rem_px", self.rem_px)?;
        for (key, px) in &self.scale {
            check_non_negative("spacing", key, *px)?;
        }
        Ok(())
    }
}

/// Parse a CSS length limited to `px` and `rem`.
pub(crate) fn resolve_length(css: &str, rem_px: f32) -> Option<f32> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let token = parser.next().ok()?.clone();
    let px = match token {
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => value,
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("rem") => {
            value * rem_px
        }
        Token::Number { value, .. } if value == 0.0 => 0.0,
        _ => return None,
    };

    // Trailing tokens mean this was not a single length (`[1px_2px]`).
    if parser.expect_exhausted().is_err() {
        return None;
    }

    (px.is_finite() && px >= 0.0).then_some(px)
}

fn is_plain_decimal(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && key.bytes().filter(|b| *b == b'.').count() <= 1
        && !key.starts_with('.')
        && !key.ends_with('.')
}

pub(crate) fn check_non_negative(table: &'static str, key: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_table(
            table,
            key,
            format!("expected a non-negative number, got {value}"),
        ))
    }
}

pub(crate) fn check_positive(table: &'static str, key: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_table(
            table,
            key,
            format!("expected a positive number, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys() {
        let scale = SpacingScale::default();
        assert_eq!(scale.resolve("0"), Some(0.0));
        assert_eq!(scale.resolve("px"), Some(1.0));
        assert_eq!(scale.resolve("0.5"), Some(2.0));
        assert_eq!(scale.resolve("1.5"), Some(6.0));
        assert_eq!(scale.resolve("96"), Some(384.0));
    }

    #[test]
    fn fractional_keys_are_not_rounded() {
        let scale = SpacingScale::default();
        assert_eq!(scale.resolve("8.5"), Some(34.0));
        assert_eq!(scale.resolve("6.5"), Some(26.0));
        assert_eq!(scale.resolve("13"), Some(52.0));
        // Not a quarter step.
        assert_eq!(scale.resolve("1.3"), None);
    }

    #[test]
    fn dynamic_steps_can_be_disabled() {
        let scale = SpacingScale {
            dynamic_steps: false,
            ..SpacingScale::default()
        };
        assert_eq!(scale.resolve("2"), Some(8.0));
        assert_eq!(scale.resolve("8.5"), None);
    }

    #[test]
    fn rejects_non_numeric_keys() {
        let scale = SpacingScale::default();
        for key in ["", "full", "auto", "inf", "NaN", "1e3", "+4", "-4", ".5", "5.", "1.2.3"] {
            assert_eq!(scale.resolve(key), None, "key {key:?} should not resolve");
        }
    }

    #[test]
    fn arbitrary_values() {
        let scale = SpacingScale::default();
        assert_eq!(scale.resolve("[32rem]"), Some(512.0));
        assert_eq!(scale.resolve("[10px]"), Some(10.0));
        assert_eq!(scale.resolve("[0.5rem]"), Some(8.0));
        assert_eq!(scale.resolve("[0]"), Some(0.0));
    }

    #[test]
    fn arbitrary_units_ignore_case() {
        let scale = SpacingScale::default();
        assert_eq!(scale.resolve("[10PX]"), Some(10.0));
        assert_eq!(scale.resolve("[2Rem]"), Some(32.0));
        assert_eq!(scale.resolve("[1E1px]"), Some(10.0));
        assert_eq!(scale.resolve("[10Vh]"), None);
    }

    #[test]
    fn arbitrary_values_outside_the_subset() {
        let scale = SpacingScale::default();
        for value in ["[50%]", "[10vh]", "[2em]", "[12]", "[-4px]", "[10px", "[]", "[calc(100%-2px)]", "[1px_2px]"] {
            assert_eq!(scale.resolve(value), None, "value {value:?} should not resolve");
        }
    }

    #[test]
    fn validate_rejects_negative_entries() {
        let mut scale = SpacingScale::default();
        assert!(scale.validate().is_ok());

        scale.scale.insert("x".into(), -1.0);
        assert!(matches!(
            scale.validate(),
            Err(Error::InvalidTable { table: "spacing", .. })
        ));
    }
}
