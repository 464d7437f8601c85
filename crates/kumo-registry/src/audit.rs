//! Registry-wide parse audit.
//!
//! Runs every registry class string through the parser and records what
//! each one produced: ignored tokens, broken invariants, and variable names
//! the live variable set does not know. None of these stop the audit; the
//! report decides what counts as a failure.

use serde::Serialize;

use kumo_style::{ClassParser, IgnoredToken, ParsedStyle, Violation};

use crate::catalog::VariableCatalog;
use crate::model::{ClassSource, Registry};

/// Audit result for one class string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    /// Where the class string came from.
    pub source: ClassSource,
    /// The class string as written.
    pub classes: String,
    /// Parse result.
    pub style: ParsedStyle,
    /// Tokens the parser dropped.
    pub ignored: Vec<IgnoredToken>,
    /// Broken invariants on `style`.
    pub violations: Vec<Violation>,
    /// Resolved variable names missing from the catalog.
    pub missing_variables: Vec<String>,
}

impl AuditEntry {
    /// Whether the parse result satisfies every invariant.
    pub fn is_sound(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audit results for a whole registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    /// One entry per class string, in registry order.
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    /// Whether every parse result satisfies every invariant.
    pub fn is_sound(&self) -> bool {
        self.entries.iter().all(AuditEntry::is_sound)
    }

    /// Number of class strings audited.
    pub fn class_string_count(&self) -> usize {
        self.entries.len()
    }

    /// Total ignored tokens across all class strings.
    pub fn ignored_count(&self) -> usize {
        self.entries.iter().map(|e| e.ignored.len()).sum()
    }

    /// Entries with at least one broken invariant.
    pub fn unsound_entries(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| !e.is_sound())
    }

    /// Every missing variable name with the first place it was resolved.
    pub fn missing_variables(&self) -> impl Iterator<Item = (&ClassSource, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .missing_variables
                .iter()
                .map(move |name| (&entry.source, name.as_str()))
        })
    }
}

/// Parse every class string in `registry`.
///
/// With a `catalog`, each resolved variable name is looked up and misses are
/// logged as warnings and recorded on the entry.
pub fn audit(
    registry: &Registry,
    parser: &ClassParser,
    catalog: Option<&dyn VariableCatalog>,
) -> AuditReport {
    let entries: Vec<AuditEntry> = registry
        .class_strings()
        .map(|(source, classes)| audit_class_string(source, classes, parser, catalog))
        .collect();

    let report = AuditReport { entries };
    tracing::info!(
        target: crate::targets::AUDIT,
        class_strings = report.class_string_count(),
        ignored = report.ignored_count(),
        sound = report.is_sound(),
        "registry audit finished"
    );
    report
}

fn audit_class_string(
    source: ClassSource,
    classes: &str,
    parser: &ClassParser,
    catalog: Option<&dyn VariableCatalog>,
) -> AuditEntry {
    let report = parser.parse_report(classes);
    let violations = report.style.soundness_violations();

    for violation in &violations {
        tracing::error!(
            target: crate::targets::AUDIT,
            %source,
            %violation,
            "parse result breaks an invariant"
        );
    }

    let missing_variables: Vec<String> = match catalog {
        Some(catalog) => report
            .style
            .variable_names()
            .filter(|name| !catalog.contains(name))
            .map(str::to_string)
            .collect(),
        None => vec![],
    };

    for name in &missing_variables {
        tracing::warn!(
            target: crate::targets::AUDIT,
            %source,
            variable = %name,
            "variable not found in catalog"
        );
    }

    AuditEntry {
        source,
        classes: classes.to_string(),
        style: report.style,
        ignored: report.ignored,
        violations,
        missing_variables,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn registry() -> Registry {
        Registry::from_json_str(
            r#"{
                "components": {
                    "Button": {
                        "baseStyles": "flex items-center gap-1.5 rounded-lg",
                        "variants": {
                            "variant": {
                                "primary": { "classes": "bg-kumo-brand text-white hover:bg-kumo-brand-hover" },
                                "secondary": { "classes": "bg-kumo-base ring ring-kumo-line text-kumo-default" }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn audits_every_class_string() {
        let report = audit(&registry(), &ClassParser::default(), None);

        assert_eq!(report.class_string_count(), 3);
        assert!(report.is_sound());
        // flex, items-center, hover:bg-kumo-brand-hover
        assert_eq!(report.ignored_count(), 3);
        assert_eq!(report.missing_variables().count(), 0);
    }

    #[test]
    fn reports_missing_variables() {
        let catalog: HashSet<String> = ["color-kumo-brand", "color-kumo-base", "color-kumo-line"]
            .into_iter()
            .map(String::from)
            .collect();

        let report = audit(&registry(), &ClassParser::default(), Some(&catalog));

        let missing: Vec<_> = report
            .missing_variables()
            .map(|(source, name)| (source.to_string(), name))
            .collect();
        assert_eq!(
            missing,
            [(
                "Button.variants.variant.secondary".to_string(),
                "text-color-kumo-default"
            )]
        );
    }
}
