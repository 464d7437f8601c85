//! Invariant checks on a parsed style.
//!
//! Downstream builders use the numbers directly as layout properties, so a
//! result is only usable when these checks pass. Parses with validated
//! tables always pass; the checks exist for registry audits and tests.

use std::fmt;

use serde::Serialize;

use super::{BorderStyle, ParsedStyle, VariableRef};

/// A broken invariant on one field of a [`ParsedStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field in its serialized (camelCase) spelling.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ParsedStyle {
    /// Collect every violated invariant. Empty means the style is sound.
    pub fn soundness_violations(&self) -> Vec<Violation> {
        let mut violations = vec![];
        let mut fail = |field, message| violations.push(Violation { field, message });

        for (field, value) in [
            ("height", self.height),
            ("width", self.width),
            ("minWidth", self.min_width),
            ("paddingX", self.padding_x),
            ("paddingY", self.padding_y),
            ("gap", self.gap),
            ("borderRadius", self.border_radius),
        ] {
            if let Some(px) = value
                && !(px.is_finite() && px >= 0.0)
            {
                fail(field, "must be a non-negative number");
            }
        }

        for (field, value) in [("fontSize", self.font_size), ("strokeWeight", self.stroke_weight)] {
            if let Some(px) = value
                && !(px.is_finite() && px > 0.0)
            {
                fail(field, "must be a positive number");
            }
        }

        if self.font_weight == Some(0) {
            fail("fontWeight", "must be a positive weight");
        }

        match (self.has_border, self.stroke_weight.is_some()) {
            (Some(true), false) => fail("strokeWeight", "missing while hasBorder is true"),
            (Some(false) | None, true) => fail("strokeWeight", "present without a border"),
            _ => {}
        }

        let dashed = self.border_style == Some(BorderStyle::Dashed);
        match &self.dash_pattern {
            None if dashed => fail("dashPattern", "missing for a dashed border"),
            Some(_) if !dashed => fail("dashPattern", "present for a solid border"),
            Some(pattern) if pattern.is_empty() => fail("dashPattern", "must not be empty"),
            Some(pattern) if pattern.iter().any(|l| !(l.is_finite() && *l >= 0.0)) => {
                fail("dashPattern", "lengths must be non-negative")
            }
            _ => {}
        }

        for (field, value) in [
            ("fillVariable", &self.fill_variable),
            ("textVariable", &self.text_variable),
        ] {
            if let Some(VariableRef::Named(name)) = value
                && name.is_empty()
            {
                fail(field, "variable name must not be empty");
            }
        }
        if self.stroke_variable.as_deref() == Some("") {
            fail("strokeVariable", "variable name must not be empty");
        }

        let literal_text = self.text_variable == Some(VariableRef::Literal);
        if self.white_text() != literal_text {
            fail("isWhiteText", "must be set exactly when textVariable is null");
        }
        if self.is_white_text == Some(false) {
            fail("isWhiteText", "is only ever set to true");
        }

        violations
    }

    /// Whether all invariants hold.
    pub fn is_sound(&self) -> bool {
        self.soundness_violations().is_empty()
    }
}
