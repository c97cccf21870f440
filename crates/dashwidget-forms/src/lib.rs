//! # dashwidget-forms
//!
//! Declarative settings fields for dashboard widgets.
//!
//! This crate provides:
//! - Typed field schemas over a closed set of field kinds
//! - Per-kind sanitizing of submitted values
//! - Per-kind HTML control rendering with a shared field envelope
//! - Sortable-list reconciliation (persisted order + choice catalog)
//!
//! ## Quick Start
//!
//! ```rust
//! use dashwidget_forms::{
//!     sanitize, FieldKind, FieldRenderer, FieldSchema, RawValue, Value,
//! };
//!
//! // Describe a field
//! let field = FieldSchema::new("headline_count", FieldKind::Number, "Headlines:")
//!     .default_value(10);
//!
//! // Coerce a submitted value
//! let value = sanitize(field.kind, &RawValue::scalar("7abc"));
//! assert_eq!(value, Value::Number(7));
//!
//! // Render the bound control
//! let html = FieldRenderer::new("news").render_field(&field, &value);
//! assert!(html.contains(r#"value="7""#));
//! ```
//!
//! ## Sortable fields
//!
//! ```rust
//! use dashwidget_forms::sortable::reconcile;
//!
//! let choices = vec![
//!     ("a".to_string(), "Alpha".to_string()),
//!     ("b".to_string(), "Beta".to_string()),
//! ];
//! let persisted = vec!["b".to_string()];
//!
//! let entries = reconcile(&persisted, &choices);
//! assert!(entries[0].visible); // "b", user-ordered
//! assert!(!entries[1].visible); // "a", surfaced hidden at the end
//! ```

mod error;
pub mod sanitize;
mod schema;
pub mod sortable;
mod value;
pub mod widgets;

pub use error::{Result, SchemaError};
pub use sanitize::{safe_text, sanitize, RawValue};
pub use schema::{validate_fields, FieldKind, FieldSchema, Layout, RefShortcuts};
pub use value::Value;
pub use widgets::{html_escape, FieldRenderer};
