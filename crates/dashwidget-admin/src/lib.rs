//! # dashwidget-admin
//!
//! Dashboard widgets with persisted, form-driven settings.
//!
//! This crate wires `dashwidget-forms` schemas to a dashboard:
//!
//! - A `SettingsStore` trait (with in-memory and JSON-file backends) so
//!   persistence is an injected dependency
//! - A transport-agnostic `SettingsRequest` model with an urlencoded
//!   body parser
//! - A `SettingsController` running the submit → sanitize → persist →
//!   render cycle
//! - A `DashboardWidget` trait plus a `DashboardSite` registry that
//!   validates schemas at registration and renders the whole dashboard
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use dashwidget_admin::{
//!     DashboardSite, DashboardWidget, MemoryStore, SettingsRequest, SettingsView,
//! };
//! use dashwidget_forms::{FieldKind, FieldSchema};
//!
//! struct Greeting;
//!
//! impl DashboardWidget for Greeting {
//!     fn id(&self) -> &str {
//!         "greeting"
//!     }
//!
//!     fn title(&self) -> &str {
//!         "Greeting"
//!     }
//!
//!     fn fields(&self) -> Vec<FieldSchema> {
//!         vec![FieldSchema::new("message", FieldKind::Text, "Message:")
//!             .default_value("Hello")]
//!     }
//!
//!     fn render_body(&self, settings: &SettingsView) -> String {
//!         format!("<p>{}</p>", settings.text("message"))
//!     }
//! }
//!
//! let site = DashboardSite::new("Dashboard", Arc::new(MemoryStore::new()))
//!     .register(Arc::new(Greeting))
//!     .unwrap();
//!
//! // A plain GET renders bodies and forms from defaults.
//! let html = site.render_page(&SettingsRequest::get()).unwrap();
//! assert!(html.contains("<p>Hello</p>"));
//!
//! // A save submission persists and re-renders in the same cycle.
//! let request = SettingsRequest::post()
//!     .param("action", "save_greeting")
//!     .param("submit_type", "save")
//!     .field("greeting", "message", "Hi there");
//! let html = site.render_page(&request).unwrap();
//! assert!(html.contains("<p>Hi there</p>"));
//! ```

pub mod controller;
pub mod error;
pub mod request;
pub mod site;
pub mod store;
pub mod templates;
pub mod widget;

pub use controller::{SettingsController, SubmitAction};
pub use error::{AdminError, Result};
pub use request::{Method, SettingsRequest};
pub use site::DashboardSite;
pub use store::{JsonFileStore, MemoryStore, SettingsRecord, SettingsStore, StoreError};
pub use templates::{
    render_dashboard, render_settings_form, render_settings_fragment, DashboardContext,
    SettingsFormContext, WidgetPanel,
};
pub use widget::{DashboardWidget, SettingsView};
