//! Tokenizing and per-dimension classification of utility classes.
//!
//! Every whitespace-separated token becomes exactly one [`Utility`]. Each
//! styling dimension has its own classifier that either recognizes a token
//! completely or leaves it to the others; tokens nobody recognizes become
//! [`Utility::Unknown`] and are kept for diagnostics only.

use std::fmt;

use serde::Serialize;

use crate::tables::{ColorLiteral, StyleTables};

/// Split a class string into tokens, preserving order.
///
/// Runs of whitespace never produce empty tokens, so empty or blank input
/// yields nothing.
pub fn tokenize(classes: &str) -> impl Iterator<Item = &str> + '_ {
    classes.split_whitespace()
}

/// Size-like properties resolved through the spacing and radius tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeProperty {
    /// `h-*`
    Height,
    /// `w-*`
    Width,
    /// `size-*`: width and height together.
    Size,
    /// `min-w-*`
    MinWidth,
    /// `p-*`: both padding axes.
    Padding,
    /// `px-*`
    PaddingX,
    /// `py-*`
    PaddingY,
    /// `gap-*`
    Gap,
    /// `rounded`, `rounded-*`
    BorderRadius,
}

/// Which paint a color token targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    /// `bg-*`
    Fill,
    /// `text-*`
    Text,
    /// `border-*`, `ring-*`
    Stroke,
}

/// A resolved color reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Design variable name, already in the channel's naming convention.
    Variable(String),
    /// Literal sentinel.
    Literal(ColorLiteral),
}

/// Border width and style tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderToken {
    /// `border`, `border-2`, `ring`, `border-[2px]`
    Width(f32),
    /// `border-0`
    None,
    /// `ring-0`: drops a ring and leaves any border width alone.
    NoRing,
    /// `border-dashed` with the table's dash cadence.
    Dashed(Vec<f32>),
    /// `border-solid`
    Solid,
}

/// Typography tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypographyToken {
    /// `text-sm`, `text-[13px]`
    FontSize(f32),
    /// `font-medium`
    FontWeight(u16),
}

/// Why a token was left out of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// No classifier knows the utility.
    Unrecognized,
    /// Carries a state or responsive variant (`hover:`, `data-[state=open]:`).
    Variant,
    /// Known utility family, value outside the supported subset.
    UnsupportedValue,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "unrecognized utility"),
            Self::Variant => write!(f, "state or responsive variant"),
            Self::UnsupportedValue => write!(f, "unsupported value"),
        }
    }
}

/// One classified utility class.
#[derive(Debug, Clone, PartialEq)]
pub enum Utility {
    /// Pixel size for a layout property.
    Size(SizeProperty, f32),
    /// Color reference for a paint channel.
    Color(ColorChannel, ColorToken),
    /// Border width or style.
    Border(BorderToken),
    /// Font size or weight.
    Typography(TypographyToken),
    /// Ignored token.
    Unknown {
        /// The token as written.
        raw: String,
        /// Why it was ignored.
        reason: IgnoreReason,
    },
}

impl Utility {
    fn unknown(raw: &str, reason: IgnoreReason) -> Self {
        Self::Unknown {
            raw: raw.to_string(),
            reason,
        }
    }

    /// Whether this utility contributes nothing to the result.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

type Classifier = fn(&str, &StyleTables) -> Option<Utility>;

/// Classifiers tried in order; each owns one styling dimension.
const CLASSIFIERS: &[Classifier] = &[
    classify_size,
    classify_radius,
    classify_border,
    classify_typography,
    classify_color,
];

/// Prefixes of utility families the classifiers own. A token with one of
/// these prefixes that no classifier accepts has an unsupported value.
const KNOWN_PREFIXES: &[&str] = &[
    "h-", "w-", "size-", "min-w-", "p-", "px-", "py-", "gap-", "rounded-", "border-", "ring-",
    "bg-", "text-", "font-",
];

/// Classify a single token.
pub fn classify(token: &str, tables: &StyleTables) -> Utility {
    if has_variant(token) {
        return Utility::unknown(token, IgnoreReason::Variant);
    }

    let utility = strip_important(token);

    if let Some(classified) = CLASSIFIERS
        .iter()
        .find_map(|classifier| classifier(utility, tables))
    {
        return classified;
    }

    let reason = if KNOWN_PREFIXES.iter().any(|p| utility.starts_with(p)) {
        IgnoreReason::UnsupportedValue
    } else {
        IgnoreReason::Unrecognized
    };
    Utility::unknown(token, reason)
}

/// Drop a leading or trailing `!` important marker.
fn strip_important(token: &str) -> &str {
    token
        .strip_prefix('!')
        .or_else(|| token.strip_suffix('!'))
        .unwrap_or(token)
}

/// Whether the token has a `variant:` prefix. Colons inside brackets belong
/// to arbitrary values and do not count.
fn has_variant(token: &str) -> bool {
    let mut depth = 0usize;
    for c in token.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

fn classify_size(utility: &str, tables: &StyleTables) -> Option<Utility> {
    // Longer prefixes first: `px-` must not be read as `p-x...`.
    const PREFIXES: &[(&str, SizeProperty)] = &[
        ("min-w-", SizeProperty::MinWidth),
        ("size-", SizeProperty::Size),
        ("px-", SizeProperty::PaddingX),
        ("py-", SizeProperty::PaddingY),
        ("p-", SizeProperty::Padding),
        ("gap-", SizeProperty::Gap),
        ("h-", SizeProperty::Height),
        ("w-", SizeProperty::Width),
    ];

    let (property, value) = PREFIXES
        .iter()
        .find_map(|(prefix, property)| utility.strip_prefix(prefix).map(|rest| (*property, rest)))?;

    let px = tables.spacing.resolve(value)?;
    Some(Utility::Size(property, px))
}

fn classify_radius(utility: &str, tables: &StyleTables) -> Option<Utility> {
    let px = if utility == "rounded" {
        tables.radius.resolve(None)?
    } else {
        let keyword = utility.strip_prefix("rounded-")?;
        if keyword.starts_with('[') {
            tables.spacing.resolve_arbitrary(keyword)?
        } else {
            tables.radius.resolve(Some(keyword))?
        }
    };
    Some(Utility::Size(SizeProperty::BorderRadius, px))
}

fn classify_border(utility: &str, tables: &StyleTables) -> Option<Utility> {
    let token = match utility {
        "border" => BorderToken::Width(tables.border.default_width),
        "ring" => BorderToken::Width(tables.border.default_ring_width),
        "border-dashed" => BorderToken::Dashed(tables.border.dash_pattern.clone()),
        "border-solid" => BorderToken::Solid,
        _ => {
            let (value, ring) = match utility.strip_prefix("border-") {
                Some(value) => (value, false),
                None => (utility.strip_prefix("ring-")?, true),
            };
            let width = if value.starts_with('[') {
                tables.spacing.resolve_arbitrary(value)?
            } else if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                f32::from(value.parse::<u16>().ok()?)
            } else {
                return None;
            };

            match (width > 0.0, ring) {
                (true, _) => BorderToken::Width(width),
                (false, false) => BorderToken::None,
                (false, true) => BorderToken::NoRing,
            }
        }
    };
    Some(Utility::Border(token))
}

fn classify_typography(utility: &str, tables: &StyleTables) -> Option<Utility> {
    if let Some(value) = utility.strip_prefix("text-") {
        let px = if value.starts_with('[') {
            tables.spacing.resolve_arbitrary(value)?
        } else {
            tables.typography.font_size(value)?
        };
        // A zero font size is not a size.
        return (px > 0.0).then_some(Utility::Typography(TypographyToken::FontSize(px)));
    }

    let keyword = utility.strip_prefix("font-")?;
    let weight = tables.typography.font_weight(keyword)?;
    Some(Utility::Typography(TypographyToken::FontWeight(weight)))
}

fn classify_color(utility: &str, tables: &StyleTables) -> Option<Utility> {
    const PREFIXES: &[(&str, ColorChannel)] = &[
        ("bg-", ColorChannel::Fill),
        ("text-", ColorChannel::Text),
        ("border-", ColorChannel::Stroke),
        ("ring-", ColorChannel::Stroke),
    ];

    let (channel, value) = PREFIXES
        .iter()
        .find_map(|(prefix, channel)| utility.strip_prefix(prefix).map(|rest| (*channel, rest)))?;

    if let Some(literal) = ColorLiteral::from_keyword(value) {
        return match (channel, literal) {
            (ColorChannel::Fill, ColorLiteral::Transparent)
            | (ColorChannel::Text, ColorLiteral::White) => {
                Some(Utility::Color(channel, ColorToken::Literal(literal)))
            }
            _ => None,
        };
    }

    let name = tables.color.semantic_name(value)?;
    let variable = match channel {
        ColorChannel::Text => tables.color.text_variable(name),
        ColorChannel::Fill | ColorChannel::Stroke => tables.color.fill_variable(name),
    };
    Some(Utility::Color(channel, ColorToken::Variable(variable)))
}
