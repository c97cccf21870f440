//! Dashboard widget trait and resolved settings.

use std::collections::HashMap;

use dashwidget_forms::{FieldSchema, Value};

use crate::store::SettingsRecord;

/// A dashboard widget: identity, settings schema, and an owner-supplied
/// body renderer.
///
/// Widgets with an empty field list get no settings form; the dashboard
/// renders only their body.
pub trait DashboardWidget: Send + Sync {
    /// Stable widget id, used to key persisted settings and the save
    /// action name.
    fn id(&self) -> &str;

    /// Display title.
    fn title(&self) -> &str;

    /// Settings field schema.
    fn fields(&self) -> Vec<FieldSchema> {
        Vec::new()
    }

    /// Renders the widget's primary display from its current settings.
    fn render_body(&self, settings: &SettingsView) -> String;
}

/// A widget's settings resolved against its schema.
///
/// Every schema field is present: persisted values where they exist,
/// schema defaults otherwise. Accessors are total so body renderers can
/// read without unwrapping.
#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    values: HashMap<String, Value>,
}

impl SettingsView {
    /// Resolves a record against a schema, field by field.
    pub fn resolve(fields: &[FieldSchema], record: &SettingsRecord) -> Self {
        let values = fields
            .iter()
            .map(|field| {
                let value = record
                    .get(&field.id)
                    .cloned()
                    .unwrap_or_else(|| field.default.clone());
                (field.id.clone(), value)
            })
            .collect();

        Self { values }
    }

    /// Returns the raw value for a field, if the schema has it.
    pub fn value(&self, field_id: &str) -> Option<&Value> {
        self.values.get(field_id)
    }

    /// Returns a field as text, empty when missing or non-text.
    pub fn text(&self, field_id: &str) -> &str {
        self.values
            .get(field_id)
            .and_then(Value::as_text)
            .unwrap_or("")
    }

    /// Returns a field as a number, `0` when missing or non-numeric.
    pub fn number(&self, field_id: &str) -> i64 {
        self.values
            .get(field_id)
            .and_then(Value::as_number)
            .unwrap_or(0)
    }

    /// Returns a field as a boolean, `false` when missing.
    pub fn flag(&self, field_id: &str) -> bool {
        self.values.get(field_id).is_some_and(Value::as_bool)
    }

    /// Returns a field as a key list, empty when missing or scalar.
    pub fn list(&self, field_id: &str) -> &[String] {
        self.values
            .get(field_id)
            .and_then(Value::as_list)
            .unwrap_or(&[])
    }

    /// Iterates over all resolved (field id, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
