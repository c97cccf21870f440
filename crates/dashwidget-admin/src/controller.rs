//! The settings request cycle: detect, sanitize, persist, render.

use tracing::{debug, info};

use dashwidget_forms::{sanitize, FieldRenderer, FieldSchema, Value};

use crate::error::Result;
use crate::request::SettingsRequest;
use crate::store::SettingsStore;
use crate::templates::form::{render_settings_form, SettingsFormContext};

/// The submission detected in a request, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// A valid save submission.
    Save,
    /// A valid reset submission.
    Reset,
    /// Anything else: wrong method, wrong action, missing markers.
    NotSubmitted,
}

impl SubmitAction {
    /// Derives the action for one widget from a request.
    ///
    /// A submission is valid only when the method is a write, `action`
    /// names this widget (`save_<id>`), and `submit_type` is present.
    /// Invalid shapes are `NotSubmitted`, never an error.
    pub fn detect(request: &SettingsRequest, widget_id: &str) -> Self {
        let expected_action = format!("save_{widget_id}");

        let is_submit = request.method().is_some_and(|m| m.is_write())
            && request.param_value("action") == Some(expected_action.as_str());

        if !is_submit {
            return Self::NotSubmitted;
        }

        match request.param_value("submit_type") {
            Some("save") => Self::Save,
            Some("reset") => Self::Reset,
            _ => Self::NotSubmitted,
        }
    }
}

/// Runs the settings cycle for one widget against an injected store.
pub struct SettingsController<'a> {
    widget_id: &'a str,
    fields: &'a [FieldSchema],
    store: &'a dyn SettingsStore,
}

impl<'a> SettingsController<'a> {
    /// Creates a controller over a widget's schema and store.
    pub fn new(
        widget_id: &'a str,
        fields: &'a [FieldSchema],
        store: &'a dyn SettingsStore,
    ) -> Self {
        Self {
            widget_id,
            fields,
            store,
        }
    }

    /// Applies any submission in the request, returning what happened.
    ///
    /// A save sanitizes EVERY schema field from the widget's payload
    /// namespace (absent fields included, which coerce to their empty
    /// values) and writes them in one record update that leaves
    /// non-schema keys untouched. A reset deletes the whole record.
    pub fn process(&self, request: &SettingsRequest) -> Result<SubmitAction> {
        if self.fields.is_empty() {
            return Ok(SubmitAction::NotSubmitted);
        }

        let action = SubmitAction::detect(request, self.widget_id);

        match action {
            SubmitAction::Save => {
                let mut record = self.store.get(self.widget_id)?.unwrap_or_default();

                for field in self.fields {
                    let raw = request.raw_field(self.widget_id, &field.id);
                    let value = sanitize(field.kind, &raw);
                    debug!(widget = self.widget_id, field = %field.id, "Sanitized submitted value");
                    record.insert(field.id.clone(), value);
                }

                self.store.set(self.widget_id, record)?;
                info!(
                    widget = self.widget_id,
                    fields = self.fields.len(),
                    "Saved widget settings"
                );
            }
            SubmitAction::Reset => {
                self.store.delete(self.widget_id)?;
                info!(widget = self.widget_id, "Reset widget settings");
            }
            SubmitAction::NotSubmitted => {}
        }

        Ok(action)
    }

    /// Returns the current value for one field, falling back to the
    /// schema default when nothing is persisted.
    pub fn current_value(&self, field_id: &str) -> Result<Option<Value>> {
        let Some(field) = self.fields.iter().find(|f| f.id == field_id) else {
            return Ok(None);
        };

        let record = self.store.get(self.widget_id)?.unwrap_or_default();
        Ok(Some(
            record
                .get(field_id)
                .cloned()
                .unwrap_or_else(|| field.default.clone()),
        ))
    }

    /// Renders the settings form bound to current values.
    pub fn render_form(&self) -> Result<String> {
        if self.fields.is_empty() {
            return Ok(String::new());
        }

        let record = self.store.get(self.widget_id)?.unwrap_or_default();
        let renderer = FieldRenderer::new(self.widget_id);

        let fields_html: Vec<String> = self
            .fields
            .iter()
            .map(|field| {
                let value = record
                    .get(&field.id)
                    .cloned()
                    .unwrap_or_else(|| field.default.clone());
                renderer.render_field(field, &value)
            })
            .collect();

        Ok(render_settings_form(&SettingsFormContext {
            widget_id: self.widget_id.to_string(),
            fields_html,
        }))
    }

    /// One full cycle: apply any submission, then render the form.
    ///
    /// Persistence completes before the render reads the store, so a
    /// save shows up in the same response.
    pub fn handle(&self, request: &SettingsRequest) -> Result<String> {
        self.process(request)?;
        self.render_form()
    }
}
