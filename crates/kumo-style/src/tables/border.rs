//! Border width defaults and the dashed stroke cadence.

use serde::Deserialize;

use super::spacing::{check_non_negative, check_positive};
use crate::{Error, Result};

/// Border and ring table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderTable {
    /// Stroke weight of a bare `border`.
    pub default_width: f32,
    /// Stroke weight of a bare `ring`.
    pub default_ring_width: f32,
    /// On/off dash lengths applied by `border-dashed`.
    pub dash_pattern: Vec<f32>,
}

impl Default for BorderTable {
    fn default() -> Self {
        Self {
            default_width: 1.0,
            default_ring_width: 1.0,
            dash_pattern: vec![4.0, 4.0],
        }
    }
}

impl BorderTable {
    pub(crate) fn validate(&self) -> Result<()> {
        check_positive("border", "default_width", self.default_width)?;
        check_positive("border", "default_ring_width", self.default_ring_width)?;

        if self.dash_pattern.is_empty() {
            return Err(Error::invalid_table(
                "border",
                "dash_pattern",
                "must hold at least one length",
            ));
        }
        for length in &self.dash_pattern {
            check_non_negative("border", "dash_pattern", *length)?;
        }
        if self.dash_pattern.iter().all(|length| *length == 0.0) {
            return Err(Error::invalid_table(
                "border",
                "dash_pattern",
                "must hold a non-zero length",
            ));
        }
        Ok(())
    }
}
