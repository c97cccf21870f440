//! Dashboard registration and request routing.

use std::sync::Arc;

use tracing::debug;

use dashwidget_forms::validate_fields;

use crate::controller::SettingsController;
use crate::error::{AdminError, Result};
use crate::request::SettingsRequest;
use crate::store::SettingsStore;
use crate::templates::{render_dashboard, DashboardContext, WidgetPanel};
use crate::widget::{DashboardWidget, SettingsView};

/// A dashboard: registered widgets plus the store backing their settings.
pub struct DashboardSite {
    /// Dashboard title.
    pub name: String,
    widgets: Vec<Arc<dyn DashboardWidget>>,
    store: Arc<dyn SettingsStore>,
}

impl DashboardSite {
    /// Creates a dashboard over the given store.
    pub fn new(name: impl Into<String>, store: Arc<dyn SettingsStore>) -> Self {
        Self {
            name: name.into(),
            widgets: Vec::new(),
            store,
        }
    }

    /// Registers a widget, validating its schema.
    ///
    /// Rejects duplicate widget ids and schema invariant violations
    /// (empty field ids, duplicate field ids, missing choices,
    /// mismatched defaults).
    pub fn register(mut self, widget: Arc<dyn DashboardWidget>) -> Result<Self> {
        if self.widgets.iter().any(|w| w.id() == widget.id()) {
            return Err(AdminError::DuplicateWidget(widget.id().to_string()));
        }

        validate_fields(&widget.fields())?;
        debug!(widget = widget.id(), "Registered dashboard widget");

        self.widgets.push(widget);
        Ok(self)
    }

    /// Returns the registered widgets in registration order.
    pub fn widgets(&self) -> &[Arc<dyn DashboardWidget>] {
        &self.widgets
    }

    /// Looks up a widget by id.
    pub fn get(&self, widget_id: &str) -> Option<&Arc<dyn DashboardWidget>> {
        self.widgets.iter().find(|w| w.id() == widget_id)
    }

    fn require(&self, widget_id: &str) -> Result<&Arc<dyn DashboardWidget>> {
        self.get(widget_id)
            .ok_or_else(|| AdminError::UnknownWidget(widget_id.to_string()))
    }

    /// Runs one settings cycle for a widget: apply any submission in the
    /// request, then render the form bound to current values.
    pub fn settings_form(&self, widget_id: &str, request: &SettingsRequest) -> Result<String> {
        let widget = self.require(widget_id)?;
        let fields = widget.fields();

        SettingsController::new(widget_id, &fields, self.store.as_ref()).handle(request)
    }

    /// Renders a widget's body from its current settings.
    pub fn render_widget(&self, widget_id: &str) -> Result<String> {
        let widget = self.require(widget_id)?;

        let record = self.store.get(widget_id)?.unwrap_or_default();
        let view = SettingsView::resolve(&widget.fields(), &record);

        Ok(widget.render_body(&view))
    }

    /// Renders the whole dashboard for one request cycle.
    ///
    /// Submissions are applied first (at most one widget matches the
    /// request's action), so every widget body reflects this cycle's
    /// settings.
    pub fn render_page(&self, request: &SettingsRequest) -> Result<String> {
        let mut panels = Vec::with_capacity(self.widgets.len());

        for widget in &self.widgets {
            let fields = widget.fields();

            let settings_html = if fields.is_empty() {
                String::new()
            } else {
                SettingsController::new(widget.id(), &fields, self.store.as_ref())
                    .handle(request)?
            };

            let record = self.store.get(widget.id())?.unwrap_or_default();
            let view = SettingsView::resolve(&fields, &record);

            panels.push(WidgetPanel {
                widget_id: widget.id().to_string(),
                title: widget.title().to_string(),
                body_html: widget.render_body(&view),
                settings_html,
            });
        }

        Ok(render_dashboard(&DashboardContext {
            title: self.name.clone(),
            widgets: panels,
        }))
    }
}
