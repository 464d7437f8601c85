//! Utility-class parser for the Kumo design system.
//!
//! Component generators describe their look with Tailwind-style class
//! strings taken from the component registry. This crate turns such a string
//! into a [`ParsedStyle`]: pixel sizes, padding and gap, corner radius, border
//! width and dash style, typography, and the semantic design variables to bind
//! for fill, text and stroke paints.
//!
//! - **Total**: any input parses. Tokens nobody recognizes are dropped, and can
//!   be inspected through [`ClassParser::parse_report`].
//! - **Last wins**: within one styling dimension the later token decides.
//! - **Pure**: the tables are immutable and shared; calls need no coordination.
//!
//! # Example
//!
//! ```
//! use kumo_style::{BorderStyle, VariableRef};
//!
//! let style = kumo_style::parse("border border-dashed border-kumo-line bg-transparent");
//!
//! assert_eq!(style.has_border, Some(true));
//! assert_eq!(style.stroke_weight, Some(1.0));
//! assert_eq!(style.border_style, Some(BorderStyle::Dashed));
//! assert!(style.dash_pattern.is_some());
//! assert_eq!(style.fill_variable, Some(VariableRef::Literal));
//! ```
//!
//! # Logging
//!
//! Ignored tokens are reported through `tracing` at debug level under
//! [`targets::PARSER`]. Install a subscriber to see them.

pub mod classify;
pub mod parser;
pub mod style;
pub mod tables;

mod error;

use std::sync::LazyLock;

pub use error::{Error, Result};
pub use parser::{ClassParser, IgnoredToken, ParseReport};
pub use style::{BorderStyle, ParsedStyle, VariableRef, Violation};
pub use tables::StyleTables;

/// Target names for log filtering.
pub mod targets {
    /// Tokenizing, classification and folding.
    pub const PARSER: &str = "kumo_style::parser";
    /// Theme table loading.
    pub const TABLES: &str = "kumo_style::tables";
}

static DEFAULT_PARSER: LazyLock<ClassParser> = LazyLock::new(ClassParser::default);

/// Parse a class string with the built-in tables.
pub fn parse(classes: &str) -> ParsedStyle {
    DEFAULT_PARSER.parse(classes)
}

/// Parse a class string that may be absent. `None` gives an empty style.
pub fn parse_optional(classes: Option<&str>) -> ParsedStyle {
    classes.map(parse).unwrap_or_default()
}

/// The shared parser behind [`parse`].
pub fn default_parser() -> &'static ClassParser {
    &DEFAULT_PARSER
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::classify::{
        BorderToken, ColorChannel, ColorToken, IgnoreReason, SizeProperty, TypographyToken,
        Utility,
    };
    pub use crate::parser::{ClassParser, IgnoredToken, ParseReport};
    pub use crate::style::{BorderStyle, ParsedStyle, VariableRef, Violation};
    pub use crate::tables::{
        BorderTable, ColorLiteral, ColorTable, RadiusScale, SpacingScale, StyleTables,
        TypographyScale,
    };
}
