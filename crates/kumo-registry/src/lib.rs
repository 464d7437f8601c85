//! Component styling registry for the Kumo design system.
//!
//! The registry lists, per component, the utility-class strings that the
//! design-tool generators feed into [`kumo_style`]. This crate loads it,
//! enumerates every class string, and audits the whole set against the
//! parser: each string must parse into a sound style, and each resolved
//! variable should exist in the live variable set.
//!
//! # Example
//!
//! ```
//! use kumo_registry::{Registry, audit};
//! use kumo_style::ClassParser;
//!
//! let registry = Registry::from_json_str(r#"{
//!     "components": {
//!         "Badge": { "baseStyles": "rounded-full px-2 text-xs bg-kumo-tint" }
//!     }
//! }"#)?;
//!
//! let report = audit(&registry, &ClassParser::default(), None);
//! assert!(report.is_sound());
//! assert_eq!(report.class_string_count(), 1);
//! # Ok::<(), kumo_registry::Error>(())
//! ```

pub mod audit;
pub mod catalog;
pub mod model;

mod error;

pub use audit::{AuditEntry, AuditReport, audit};
pub use catalog::VariableCatalog;
pub use error::{Error, Result};
pub use model::{ClassSlot, ClassSource, Component, Registry, VariantStyle};

/// Target names for log filtering.
pub mod targets {
    /// Registry loading.
    pub const REGISTRY: &str = "kumo_registry::model";
    /// Registry audits.
    pub const AUDIT: &str = "kumo_registry::audit";
}
