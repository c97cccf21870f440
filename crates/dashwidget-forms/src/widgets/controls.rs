//! Per-kind control markup.

use super::html_escape;
use crate::schema::FieldSchema;
use crate::sortable::{active_value, reconcile};
use crate::value::Value;

/// Rendering context for one control: resolved name/id plus schema and
/// current value.
pub(crate) struct ControlCtx<'a> {
    /// Submitted name, `widget[field]`.
    pub name: String,
    /// DOM id, `widget---field`.
    pub id: String,
    pub schema: &'a FieldSchema,
    pub value: &'a Value,
}

fn checked_attr(checked: bool) -> &'static str {
    if checked {
        " checked"
    } else {
        ""
    }
}

pub(crate) fn text_input(ctx: &ControlCtx) -> String {
    let placeholder_attr = ctx
        .schema
        .placeholder
        .as_ref()
        .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
        .unwrap_or_default();

    format!(
        r#"<input type="{}" name="{}" id="{}" value="{}"{placeholder_attr}>"#,
        ctx.schema.kind.as_str(),
        html_escape(&ctx.name),
        html_escape(&ctx.id),
        html_escape(&ctx.value.to_control_value()),
    )
}

pub(crate) fn textarea(ctx: &ControlCtx) -> String {
    let placeholder_attr = ctx
        .schema
        .placeholder
        .as_ref()
        .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
        .unwrap_or_default();

    format!(
        r#"<textarea name="{}" id="{}" rows="4"{placeholder_attr}>{}</textarea>"#,
        html_escape(&ctx.name),
        html_escape(&ctx.id),
        html_escape(&ctx.value.to_control_value()),
    )
}

pub(crate) fn select(ctx: &ControlCtx) -> String {
    let current = ctx.value.to_control_value();

    let options: String = ctx
        .schema
        .choices
        .iter()
        .map(|(key, label)| {
            let selected = if *key == current { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                html_escape(key),
                html_escape(label)
            )
        })
        .collect();

    format!(
        r#"<select name="{}" id="{}">{options}</select>"#,
        html_escape(&ctx.name),
        html_escape(&ctx.id),
    )
}

pub(crate) fn buttonset(ctx: &ControlCtx) -> String {
    let current = ctx.value.to_control_value();
    let mut html = String::from(r#"<div class="dw-buttonset">"#);

    for (key, label) in &ctx.schema.choices {
        let choice_id = format!("{}---{key}", ctx.id);

        html.push_str(&format!(
            r#"<input type="radio" name="{}" id="{}" value="{}" class="dw-switch-input"{}><label class="dw-switch-label" for="{}">{}</label>"#,
            html_escape(&ctx.name),
            html_escape(&choice_id),
            html_escape(key),
            checked_attr(*key == current),
            html_escape(&choice_id),
            html_escape(label),
        ));
    }

    html.push_str("</div>");
    html
}

pub(crate) fn radio_list(ctx: &ControlCtx) -> String {
    let current = ctx.value.to_control_value();

    let items: String = ctx
        .schema
        .choices
        .iter()
        .map(|(key, label)| {
            format!(
                r#"<li><label><input type="radio" name="{}" value="{}"{}>{}</label></li>"#,
                html_escape(&ctx.name),
                html_escape(key),
                checked_attr(*key == current),
                html_escape(label),
            )
        })
        .collect();

    format!(
        r#"<ul class="dw-radio-list dw-layout-{}">{items}</ul>"#,
        ctx.schema.layout.as_str()
    )
}

pub(crate) fn radio_image_list(ctx: &ControlCtx) -> String {
    let current = ctx.value.to_control_value();

    let items: String = ctx
        .schema
        .choices
        .iter()
        .map(|(key, url)| {
            format!(
                r#"<li><label><input type="radio" name="{}" value="{}"{}><img src="{}" alt="{}"></label></li>"#,
                html_escape(&ctx.name),
                html_escape(key),
                checked_attr(*key == current),
                html_escape(url),
                html_escape(key),
            )
        })
        .collect();

    format!(
        r#"<ul class="dw-radio-images dw-layout-{}">{items}</ul>"#,
        ctx.schema.layout.as_str()
    )
}

pub(crate) fn multicheckbox(ctx: &ControlCtx) -> String {
    let empty: &[String] = &[];
    let selected = ctx.value.as_list().unwrap_or(empty);

    let items: String = ctx
        .schema
        .choices
        .iter()
        .map(|(key, label)| {
            let checked = selected.iter().any(|v| v == key);
            format!(
                r#"<li><label><input type="checkbox" name="{}[]" value="{}"{}>{}</label></li>"#,
                html_escape(&ctx.name),
                html_escape(key),
                checked_attr(checked),
                html_escape(label),
            )
        })
        .collect();

    format!(r#"<ul class="dw-check-list">{items}</ul>"#)
}

pub(crate) fn boolean(ctx: &ControlCtx, switch: bool) -> String {
    let side_text = ctx
        .schema
        .side_text
        .as_ref()
        .map(|t| format!("<span>{}</span>", html_escape(t)))
        .unwrap_or_default();

    let wrapper_class = if switch { "dw-toggle" } else { "dw-checkbox" };

    format!(
        r#"<label class="{wrapper_class}"><input type="checkbox" name="{}" id="{}" value="1"{}>{side_text}</label>"#,
        html_escape(&ctx.name),
        html_escape(&ctx.id),
        checked_attr(ctx.value.as_bool()),
    )
}

/// Renders the sortable list plus the hidden input that carries the
/// comma-joined active order back on submit.
pub(crate) fn sortable(ctx: &ControlCtx) -> String {
    let empty: &[String] = &[];
    let persisted = ctx.value.as_list().unwrap_or(empty);
    let entries = reconcile(persisted, &ctx.schema.choices);

    let items: String = entries
        .iter()
        .map(|entry| {
            let item_class = if entry.visible {
                "dw-sortable-item"
            } else {
                "dw-sortable-item dw-hidden"
            };
            format!(
                r#"<li class="{item_class}" data-value="{}"><i class="dw-handle"></i><i class="dw-visibility"></i>{}</li>"#,
                html_escape(&entry.key),
                html_escape(&entry.label),
            )
        })
        .collect();

    format!(
        r#"<ul class="dw-sortable">{items}</ul><input type="hidden" name="{}" value="{}">"#,
        html_escape(&ctx.name),
        html_escape(&active_value(&entries)),
    )
}
