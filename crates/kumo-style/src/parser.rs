//! Class string parser.
//!
//! The parser is a pure function of its tables and the input: tokenize,
//! classify every token, fold the utilities left to right. Nothing in the
//! input can make it fail; unknown tokens are dropped and, if asked for,
//! reported.

use serde::Serialize;

use crate::classify::{IgnoreReason, Utility, classify, tokenize};
use crate::style::ParsedStyle;
use crate::tables::StyleTables;
use crate::{Error, Result};

/// A token the parser left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredToken {
    /// Token as written in the class string.
    pub token: String,
    /// Why it was dropped.
    pub reason: IgnoreReason,
}

/// Parsed style plus the tokens that did not contribute to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    /// The parse result.
    pub style: ParsedStyle,
    /// Dropped tokens, in input order.
    pub ignored: Vec<IgnoredToken>,
}

impl ParseReport {
    /// Whether every token was understood.
    pub fn is_complete(&self) -> bool {
        self.ignored.is_empty()
    }
}

/// Utility-class parser bound to a set of lookup tables.
///
/// # Example
///
/// ```
/// use kumo_style::{ClassParser, VariableRef};
///
/// let parser = ClassParser::default();
/// let style = parser.parse("bg-kumo-brand ring ring-kumo-line rounded-lg");
///
/// assert_eq!(
///     style.fill_variable,
///     Some(VariableRef::Named("color-kumo-brand".into()))
/// );
/// assert_eq!(style.stroke_variable.as_deref(), Some("color-kumo-line"));
/// assert_eq!(style.stroke_weight, Some(1.0));
/// assert_eq!(style.border_radius, Some(8.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassParser {
    tables: StyleTables,
}

static_assertions::assert_impl_all!(ClassParser: Send, Sync);

impl ClassParser {
    /// Create a parser over the given tables.
    ///
    /// The tables are validated first, so every style this parser produces
    /// passes [`ParsedStyle::soundness_violations`].
    ///
    /// # Arguments
    ///
    /// * `tables` - Lookup tables, usually from [`StyleTables::from_file`]
    ///   or a modified [`StyleTables::builtin`].
    ///
    /// # Returns
    ///
    /// Returns [`Error::InvalidTable`] if any table entry could yield an
    /// unsound style (a negative size, an empty dash pattern, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use kumo_style::{ClassParser, StyleTables};
    ///
    /// let mut tables = StyleTables::builtin();
    /// tables.border.dash_pattern = vec![6.0, 2.0];
    /// let parser = ClassParser::new(tables)?;
    /// assert_eq!(parser.parse("border-dashed").dash_pattern, Some(vec![6.0, 2.0]));
    ///
    /// let mut broken = StyleTables::builtin();
    /// broken.border.dash_pattern.clear();
    /// assert!(ClassParser::new(broken).is_err());
    /// # Ok::<(), kumo_style::Error>(())
    /// ```
    pub fn new(tables: StyleTables) -> Result<Self> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// The tables this parser resolves against.
    pub fn tables(&self) -> &StyleTables {
        &self.tables
    }

    /// Classify every token of a class string, in input order.
    pub fn classify<'a>(&'a self, classes: &'a str) -> impl Iterator<Item = Utility> + 'a {
        tokenize(classes).map(move |token| {
            let utility = classify(token, &self.tables);
            tracing::trace!(target: crate::targets::PARSER, token, ?utility, "classified");
            utility
        })
    }

    /// Parse a class string into a style.
    ///
    /// Tokens are classified one by one and folded left to right; within a
    /// dimension the later token wins. Tokens outside the supported subset
    /// are dropped and logged at debug level.
    ///
    /// # Arguments
    ///
    /// * `classes` - Whitespace-separated utility classes, in any shape.
    ///
    /// # Returns
    ///
    /// The parsed style. This never fails: empty or unrelated input gives
    /// an empty [`ParsedStyle`].
    ///
    /// # Example
    ///
    /// ```
    /// use kumo_style::ClassParser;
    ///
    /// let parser = ClassParser::default();
    /// let style = parser.parse("flex h-9 h-10 hover:h-12");
    /// assert_eq!(style.height, Some(40.0));
    /// assert!(parser.parse("not a utility").is_empty());
    /// ```
    pub fn parse(&self, classes: &str) -> ParsedStyle {
        let utilities: Vec<Utility> = self.classify(classes).collect();

        for utility in &utilities {
            if let Utility::Unknown { raw, reason } = utility {
                tracing::debug!(
                    target: crate::targets::PARSER,
                    token = %raw,
                    %reason,
                    "ignoring utility class"
                );
            }
        }

        ParsedStyle::from_utilities(&utilities)
    }

    /// Parse a class string and keep the list of dropped tokens.
    pub fn parse_report(&self, classes: &str) -> ParseReport {
        let utilities: Vec<Utility> = self.classify(classes).collect();

        let ignored = utilities
            .iter()
            .filter_map(|utility| match utility {
                Utility::Unknown { raw, reason } => Some(IgnoredToken {
                    token: raw.clone(),
                    reason: *reason,
                }),
                _ => None,
            })
            .collect();

        ParseReport {
            style: ParsedStyle::from_utilities(&utilities),
            ignored,
        }
    }

    /// Parse a class string, failing on the first token the lenient parser
    /// would drop.
    ///
    /// # Arguments
    ///
    /// * `classes` - Whitespace-separated utility classes.
    ///
    /// # Returns
    ///
    /// The same style as [`parse`](Self::parse) when every token is
    /// understood, otherwise [`Error::UnrecognizedToken`] naming the first
    /// dropped token and why it was dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use kumo_style::{ClassParser, Error};
    ///
    /// let parser = ClassParser::default();
    /// assert!(parser.parse_strict("h-9 bg-kumo-base").is_ok());
    ///
    /// let err = parser.parse_strict("h-9 flex").unwrap_err();
    /// assert!(matches!(err, Error::UnrecognizedToken { ref token, .. } if token == "flex"));
    /// ```
    pub fn parse_strict(&self, classes: &str) -> Result<ParsedStyle> {
        let utilities = self
            .classify(classes)
            .map(|utility| match utility {
                Utility::Unknown { raw, reason } => Err(Error::unrecognized(raw, reason)),
                utility => Ok(utility),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ParsedStyle::from_utilities(&utilities))
    }
}
