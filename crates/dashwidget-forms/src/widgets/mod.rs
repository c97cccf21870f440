//! Field rendering: envelope assembly and per-kind dispatch.

mod controls;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Li;

use controls::ControlCtx;

use crate::schema::{FieldKind, FieldSchema, RefShortcuts};
use crate::value::Value;

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders settings fields for one widget.
///
/// The renderer holds only the widget id, used to namespace control names
/// (`widget[field]`) and DOM ids (`widget---field`); output is a pure
/// function of the field schema and current value.
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    widget_id: String,
}

impl FieldRenderer {
    /// Creates a renderer for the given widget id.
    pub fn new(widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
        }
    }

    /// Returns the submitted name for a field.
    pub fn field_name(&self, field_id: &str) -> String {
        format!("{}[{field_id}]", self.widget_id)
    }

    /// Returns the DOM id for a field's control.
    pub fn control_id(&self, field_id: &str) -> String {
        format!("{}---{field_id}", self.widget_id)
    }

    /// Renders one field: envelope, label, control, and any shortcuts.
    ///
    /// Fields with an empty id render nothing.
    pub fn render_field(&self, schema: &FieldSchema, value: &Value) -> String {
        if schema.id.is_empty() {
            return String::new();
        }

        let ctx = ControlCtx {
            name: self.field_name(&schema.id),
            id: self.control_id(&schema.id),
            schema,
            value,
        };

        let control = match schema.kind {
            FieldKind::Text | FieldKind::Number | FieldKind::Url | FieldKind::Email => {
                controls::text_input(&ctx)
            }
            FieldKind::Textarea => controls::textarea(&ctx),
            FieldKind::Select => controls::select(&ctx),
            FieldKind::ButtonSet => controls::buttonset(&ctx),
            FieldKind::Radio => controls::radio_list(&ctx),
            FieldKind::RadioImage => controls::radio_image_list(&ctx),
            FieldKind::MultiCheckbox => controls::multicheckbox(&ctx),
            FieldKind::Sortable => controls::sortable(&ctx),
            FieldKind::Checkbox => controls::boolean(&ctx, false),
            FieldKind::Toggle => controls::boolean(&ctx, true),
        };

        let refs_html = schema
            .refs
            .as_ref()
            .map(render_refs)
            .unwrap_or_default();

        self.envelope(schema, &control, &refs_html)
    }

    fn envelope(&self, schema: &FieldSchema, control: &str, refs_html: &str) -> String {
        let mut classes = format!("dw-field dw-field-type-{}", schema.kind.as_str());
        if schema.submitter {
            classes.push_str(" dw-field-mode-submitter");
        }
        if schema.inline {
            classes.push_str(" dw-field-layout-inline");
        }

        // Structured metadata for the client layer; behavior (auto-submit,
        // sortable sync) keys off this, not the class names.
        let meta_json = serde_json::json!({
            "type": schema.kind.as_str(),
            "submitter": schema.submitter,
            "inline": schema.inline,
        })
        .to_string();

        let title = schema.title.clone();
        let label_html = match self.label_target(schema) {
            Some(for_id) => {
                html! { label.for_(#for_id).class("dw-field-label") { #title } }.render()
            }
            None => html! { label.class("dw-field-label") { #title } }.render(),
        };

        format!(
            r#"<div class="{classes}" data-field="{}"><div class="dw-field-inner">{label_html}{control}{refs_html}</div></div>"#,
            html_escape(&meta_json),
        )
    }

    /// The control id the label points at, for kinds with a single
    /// focusable control.
    fn label_target(&self, schema: &FieldSchema) -> Option<String> {
        match schema.kind {
            FieldKind::Text
            | FieldKind::Number
            | FieldKind::Url
            | FieldKind::Email
            | FieldKind::Textarea
            | FieldKind::Select => Some(self.control_id(&schema.id)),
            _ => None,
        }
    }
}

fn render_refs(refs: &RefShortcuts) -> String {
    if refs.choices.is_empty() {
        return String::new();
    }

    let ref_json = serde_json::json!({ "submitter": refs.submitter }).to_string();

    let list = html! { ul.class("dw-refs-list") }.children(
        refs.choices.iter(),
        |choice, li: Element<Li>| {
            let (value, label) = choice;
            let link = html! {
                a.href("#").class("dw-button") { #label }
            }
            .data("val", value.as_str());
            li.raw(link.render())
        },
    );

    format!(
        r#"<div class="dw-field-refs" data-ref="{}">{}</div>"#,
        html_escape(&ref_json),
        list.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_envelope_classes_and_metadata() {
        let renderer = FieldRenderer::new("news");
        let schema = FieldSchema::new("layout", FieldKind::Select, "Layout:")
            .choices(vec![("list", "List"), ("grid", "Grid")])
            .submitter()
            .inline();
        let html = renderer.render_field(&schema, &Value::text("grid"));

        assert!(html.contains("dw-field-type-select"));
        assert!(html.contains("dw-field-mode-submitter"));
        assert!(html.contains("dw-field-layout-inline"));
        assert!(html.contains("data-field=\""));
        assert!(html.contains("&quot;type&quot;:&quot;select&quot;"));
        assert!(html.contains("&quot;submitter&quot;:true"));
        assert!(html.contains("&quot;inline&quot;:true"));
    }

    #[test]
    fn test_label_for_scalar_kinds_only() {
        let renderer = FieldRenderer::new("news");

        let text = FieldSchema::new("heading", FieldKind::Text, "Heading:");
        let html = renderer.render_field(&text, &Value::text(""));
        assert!(html.contains(r#"for="news---heading""#));

        let radio = FieldSchema::new("align", FieldKind::Radio, "Align:")
            .choices(vec![("l", "Left")]);
        let html = renderer.render_field(&radio, &Value::text("l"));
        assert!(!html.contains("for="));
    }

    #[test]
    fn test_empty_id_renders_nothing() {
        let renderer = FieldRenderer::new("news");
        let schema = FieldSchema::new("", FieldKind::Text, "Broken");
        assert_eq!(renderer.render_field(&schema, &Value::text("x")), "");
    }

    #[test]
    fn test_refs_block() {
        let renderer = FieldRenderer::new("news");
        let schema = FieldSchema::new("count", FieldKind::Number, "Count:")
            .default_value(5)
            .refs(RefShortcuts::new(vec![("5", "Five"), ("10", "Ten")]).submitter());
        let html = renderer.render_field(&schema, &Value::Number(5));

        assert!(html.contains("dw-field-refs"));
        assert!(html.contains("data-ref=\"{&quot;submitter&quot;:true}\""));
        assert!(html.contains(r#"data-val="10""#));
        assert!(html.contains(">Ten</a>"));
    }

    #[test]
    fn test_field_name_and_id_namespacing() {
        let renderer = FieldRenderer::new("news");
        assert_eq!(renderer.field_name("count"), "news[count]");
        assert_eq!(renderer.control_id("count"), "news---count");
    }
}
