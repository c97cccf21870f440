//! HTML templates for the dashboard shell.

pub mod form;
pub mod page;

pub use form::{render_settings_form, render_settings_fragment, SettingsFormContext};
pub use page::{render_dashboard, DashboardContext, WidgetPanel};
