//! Parsed style definition.

use serde::{Serialize, Serializer};

/// Reference to a design variable, or an explicit request for none.
///
/// Serializes as the variable name, or `null` for [`VariableRef::Literal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableRef {
    /// Bind the named design variable.
    Named(String),
    /// A literal color replaces the variable: `bg-transparent` for fills,
    /// `text-white` for text.
    Literal,
}

impl VariableRef {
    /// The variable name, if one should be bound.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name.as_str()),
            Self::Literal => None,
        }
    }
}

impl Serialize for VariableRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(name) => serializer.serialize_str(name),
            Self::Literal => serializer.serialize_none(),
        }
    }
}

/// Non-default stroke style. Solid strokes leave the field absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// `border-dashed`
    Dashed,
}

/// Structured style produced from one class string.
///
/// Every field is `None` unless a token for its dimension was seen. `None`
/// (no token) and [`VariableRef::Literal`] (a token asking for no variable)
/// are different answers. Pixel values are non-negative; font size, font
/// weight and stroke weight are strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStyle {
    // === Size ===
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Minimum width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,

    // === Spacing ===
    /// Horizontal padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f32>,
    /// Vertical padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f32>,
    /// Gap between children in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,

    // === Typography ===
    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Numeric font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,

    // === Border ===
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Whether a border width token was seen (`false` after `border-0`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_border: Option<bool>,
    /// Stroke weight; present exactly when `has_border` is `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f32>,
    /// Stroke style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    /// Dash cadence; present exactly when the style is dashed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f32>>,

    // === Paint ===
    /// Fill variable from `bg-*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_variable: Option<VariableRef>,
    /// Text variable from `text-*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_variable: Option<VariableRef>,
    /// Stroke variable from `border-*` or `ring-*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_variable: Option<String>,
    /// Set by `text-white`; `text_variable` is then [`VariableRef::Literal`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_white_text: Option<bool>,
}

static_assertions::assert_impl_all!(ParsedStyle: Send, Sync);

impl ParsedStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no dimension was set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill variable name to bind, if any.
    pub fn fill_variable_name(&self) -> Option<&str> {
        self.fill_variable.as_ref().and_then(VariableRef::name)
    }

    /// Text variable name to bind, if any.
    pub fn text_variable_name(&self) -> Option<&str> {
        self.text_variable.as_ref().and_then(VariableRef::name)
    }

    /// Whether `text-white` is in effect.
    pub fn white_text(&self) -> bool {
        self.is_white_text == Some(true)
    }

    /// Every variable name this style would bind, in fill, text, stroke order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.fill_variable_name()
            .into_iter()
            .chain(self.text_variable_name())
            .chain(self.stroke_variable.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let style = ParsedStyle::new();
        assert!(style.is_empty());
        assert_eq!(style.variable_names().count(), 0);
    }

    #[test]
    fn variable_accessors() {
        let style = ParsedStyle {
            fill_variable: Some(VariableRef::Literal),
            text_variable: Some(VariableRef::Named("text-color-kumo-default".into())),
            stroke_variable: Some("color-kumo-line".into()),
            ..ParsedStyle::default()
        };

        assert!(!style.is_empty());
        assert_eq!(style.fill_variable_name(), None);
        assert_eq!(style.text_variable_name(), Some("text-color-kumo-default"));
        assert_eq!(
            style.variable_names().collect::<Vec<_>>(),
            ["text-color-kumo-default", "color-kumo-line"]
        );
    }
}
