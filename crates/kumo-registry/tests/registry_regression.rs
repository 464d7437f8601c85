//! Regression tests over a full component registry.
//!
//! Every class string in the fixture must parse into a sound style, and the
//! well-known component styles must keep resolving to the same values.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use kumo_registry::{AuditReport, ClassSlot, ClassSource, Registry, audit};
use kumo_style::classify::IgnoreReason;
use kumo_style::{BorderStyle, ClassParser, ParsedStyle, VariableRef};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/component-registry.json")
}

fn load_registry() -> Registry {
    init_tracing();
    Registry::from_file(fixture_path()).expect("fixture registry should load")
}

fn variable_catalog() -> BTreeSet<String> {
    [
        "color-kumo-base",
        "color-kumo-brand",
        "color-kumo-contrast",
        "color-kumo-control",
        "color-kumo-danger",
        "color-kumo-danger-tint",
        "color-kumo-elevated",
        "color-kumo-info",
        "color-kumo-info-tint",
        "color-kumo-line",
        "color-kumo-recessed",
        "color-kumo-tint",
        "color-kumo-warning",
        "color-kumo-warning-tint",
        "text-color-kumo-brand",
        "text-color-kumo-danger",
        "text-color-kumo-default",
        "text-color-kumo-link",
        "text-color-kumo-strong",
        "text-color-kumo-subtle",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn style_at(report: &AuditReport, label: &str) -> ParsedStyle {
    report
        .entries
        .iter()
        .find(|entry| entry.source.to_string() == label)
        .map(|entry| entry.style.clone())
        .unwrap_or_else(|| panic!("no class string at {label}"))
}

fn fill(name: &str) -> Option<VariableRef> {
    Some(VariableRef::Named(name.to_string()))
}

#[test]
fn test_every_class_string_parses_soundly() {
    let registry = load_registry();
    let parser = ClassParser::default();
    let report = audit(&registry, &parser, None);

    assert_eq!(registry.components.len(), 20);
    assert_eq!(report.class_string_count(), 75);

    let unsound: Vec<String> = report
        .unsound_entries()
        .map(|entry| format!("{}: {:?}", entry.source, entry.violations))
        .collect();
    assert!(unsound.is_empty(), "unsound parse results: {unsound:#?}");

    // The plain entry points agree with the audit.
    for entry in &report.entries {
        assert_eq!(kumo_style::parse(&entry.classes), entry.style);
        assert!(parser.parse_strict(&entry.classes).is_ok() == entry.ignored.is_empty());
    }
}

#[test]
fn test_every_variable_is_in_the_catalog() {
    let registry = load_registry();
    let catalog = variable_catalog();
    let report = audit(&registry, &ClassParser::default(), Some(&catalog));

    let missing: Vec<_> = report.missing_variables().collect();
    assert!(missing.is_empty(), "unbound variables: {missing:?}");
}

#[test]
fn test_catalog_reports_dropped_variable() {
    let registry = load_registry();
    let mut catalog = variable_catalog();
    catalog.remove("color-kumo-contrast");

    let report = audit(&registry, &ClassParser::default(), Some(&catalog));
    let missing: Vec<(String, &str)> = report
        .missing_variables()
        .map(|(source, name)| (source.to_string(), name))
        .collect();

    assert_eq!(
        missing,
        [(
            "Tooltip.baseStyles".to_string(),
            "color-kumo-contrast"
        )]
    );
}

#[test]
fn test_button_styles() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    let primary = style_at(&report, "Button.variants.variant.primary");
    assert_eq!(primary.fill_variable, fill("color-kumo-brand"));
    assert_eq!(primary.text_variable, Some(VariableRef::Literal));
    assert_eq!(primary.is_white_text, Some(true));

    let secondary = style_at(&report, "Button.variants.variant.secondary");
    assert_eq!(secondary.fill_variable, fill("color-kumo-base"));
    assert_eq!(secondary.stroke_variable.as_deref(), Some("color-kumo-line"));
    assert_eq!(secondary.has_border, Some(true));
    assert_eq!(secondary.stroke_weight, Some(1.0));
    assert_eq!(secondary.is_white_text, None);

    let ghost = style_at(&report, "Button.variants.variant.ghost");
    assert_eq!(ghost.fill_variable, Some(VariableRef::Literal));

    let small = style_at(&report, "Button.sizes.sm");
    assert_eq!(small.height, Some(26.0));
    assert_eq!(small.gap, Some(4.0));
    assert_eq!(small.border_radius, Some(6.0));
    assert_eq!(small.padding_x, Some(8.0));
    assert_eq!(small.font_size, Some(12.0));

    let base = style_at(&report, "Button.sizes.base");
    assert_eq!(base.height, Some(36.0));
    assert_eq!(base.gap, Some(6.0));
    assert_eq!(base.font_size, Some(16.0));
}

#[test]
fn test_dashed_and_bordered_styles() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    let beta = style_at(&report, "Badge.variants.variant.beta");
    assert_eq!(beta.has_border, Some(true));
    assert_eq!(beta.stroke_weight, Some(1.0));
    assert_eq!(beta.border_style, Some(BorderStyle::Dashed));
    assert_eq!(beta.dash_pattern, Some(vec![4.0, 4.0]));
    assert_eq!(beta.stroke_variable.as_deref(), Some("color-kumo-brand"));
    assert_eq!(beta.text_variable, fill("text-color-kumo-link"));
    assert_eq!(beta.fill_variable, Some(VariableRef::Literal));

    let empty = style_at(&report, "Empty.baseStyles");
    assert_eq!(empty.border_style, Some(BorderStyle::Dashed));
    assert_eq!(empty.border_radius, Some(12.0));
    assert_eq!(empty.padding_x, Some(32.0));
    assert_eq!(empty.padding_y, Some(32.0));

    let radio = style_at(&report, "Radio.baseStyles");
    assert_eq!(radio.width, Some(16.0));
    assert_eq!(radio.height, Some(16.0));
    assert_eq!(radio.border_radius, Some(9999.0));
    // `data-[checked]:border-[5px]` is a state variant and must not win.
    assert_eq!(radio.stroke_weight, Some(1.0));
}

#[test]
fn test_arbitrary_sizes() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    assert_eq!(style_at(&report, "Dialog.sizes.sm").width, Some(384.0));
    assert_eq!(style_at(&report, "Dialog.sizes.base").width, Some(512.0));
    assert_eq!(style_at(&report, "Dialog.sizes.xl").width, Some(1024.0));
    assert_eq!(style_at(&report, "Dialog.baseStyles").min_width, Some(320.0));
    assert_eq!(style_at(&report, "Loader.sizes.lg").width, Some(32.0));
    assert_eq!(style_at(&report, "Switch.baseStyles").width, Some(34.0));
}

#[test]
fn test_tooltip_white_text() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    let tooltip = style_at(&report, "Tooltip.baseStyles");
    assert!(tooltip.white_text());
    assert_eq!(tooltip.text_variable, Some(VariableRef::Literal));
    assert_eq!(tooltip.fill_variable, fill("color-kumo-contrast"));
    assert_eq!(tooltip.font_size, Some(12.0));
    assert_eq!(tooltip.font_weight, Some(500));
    assert_eq!(tooltip.padding_x, Some(8.0));
    assert_eq!(tooltip.padding_y, Some(4.0));
}

#[test]
fn test_empty_class_string_gives_empty_style() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    let toast = report
        .entries
        .iter()
        .find(|entry| {
            entry.source
                == ClassSource {
                    component: "Toast".into(),
                    slot: ClassSlot::Variant {
                        prop: "variant".into(),
                        value: "default".into(),
                    },
                }
        })
        .expect("Toast default variant");
    assert!(toast.style.is_empty());
    assert!(toast.ignored.is_empty());
}

#[test]
fn test_ignored_tokens_are_classified() {
    let report = audit(&load_registry(), &ClassParser::default(), None);

    let reason_of = |label: &str, token: &str| {
        report
            .entries
            .iter()
            .filter(|entry| entry.source.to_string() == label)
            .flat_map(|entry| entry.ignored.iter())
            .find(|ignored| ignored.token == token)
            .map(|ignored| ignored.reason)
    };

    assert_eq!(
        reason_of("Button.variants.variant.primary", "hover:bg-kumo-brand-hover"),
        Some(IgnoreReason::Variant)
    );
    assert_eq!(
        reason_of("Button.variants.variant.destructive", "hover:bg-kumo-danger/70"),
        Some(IgnoreReason::Variant)
    );
    assert_eq!(
        reason_of("Tabs.variants.variant.underline", "border-b-2"),
        Some(IgnoreReason::UnsupportedValue)
    );
    assert_eq!(
        reason_of("Tabs.variants.variant.underline", "border-transparent"),
        Some(IgnoreReason::UnsupportedValue)
    );
    assert_eq!(
        reason_of("Button.baseStyles", "w-max"),
        Some(IgnoreReason::UnsupportedValue)
    );
    assert_eq!(
        reason_of("Banner.baseStyles", "flex"),
        Some(IgnoreReason::Unrecognized)
    );
}

#[test]
fn test_report_serializes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{ "components": { "Chip": { "baseStyles": "hover:bg-kumo-tint h-6 bg-kumo-base" } } }"#,
    )
    .unwrap();

    let registry = Registry::from_file(file.path()).unwrap();
    let report = audit(&registry, &ClassParser::default(), None);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "entries": [{
                "source": { "component": "Chip", "slot": { "kind": "base" } },
                "classes": "hover:bg-kumo-tint h-6 bg-kumo-base",
                "style": { "height": 24.0, "fillVariable": "color-kumo-base" },
                "ignored": [{ "token": "hover:bg-kumo-tint", "reason": "variant" }],
                "violations": [],
                "missing_variables": []
            }]
        })
    );
}

#[test]
fn test_missing_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Registry::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, kumo_registry::Error::Io { .. }));
}
