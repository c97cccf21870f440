//! Settings form assembly.

use ironhtml::html;
use ironhtml_elements::Div;

use dashwidget_forms::html_escape;

/// Context for rendering one widget's settings form.
#[derive(Debug, Clone, Default)]
pub struct SettingsFormContext {
    /// Owning widget id.
    pub widget_id: String,
    /// Pre-rendered field envelopes, in schema order.
    pub fields_html: Vec<String>,
}

fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        html_escape(name),
        html_escape(value),
    )
}

/// Renders the settings fragment: fields plus the submit markers.
///
/// For hosts that supply their own `<form>` around widget settings. The
/// hidden `action`/`submit_type` inputs are what submit detection keys
/// off; the client layer rewrites `submit_type` to "reset" when the
/// reset button is used.
pub fn render_settings_fragment(ctx: &SettingsFormContext) -> String {
    let action_value = format!("save_{}", ctx.widget_id);

    let mut wrap = html! { div.class("dw-settings-wrap") };
    for field_html in &ctx.fields_html {
        wrap = wrap.raw(field_html);
    }

    wrap.raw(&hidden_input("action", &action_value))
        .raw(&hidden_input("submit_type", "save"))
        .render()
}

/// Renders a complete, self-submitting settings form.
pub fn render_settings_form(ctx: &SettingsFormContext) -> String {
    let fragment = render_settings_fragment(ctx);

    let save_btn = html! {
        button.type_("submit").class("dw-button dw-button-primary") {
            "Save"
        }
    };
    let reset_btn = html! {
        button.type_("submit").class("dw-button dw-button-reset") {
            "Reset"
        }
    }
    .data("reset", "1");

    html! { form.method("post").class("dw-settings-form") }
        .child::<Div, _>(|d| d.raw(&fragment))
        .child::<Div, _>(|d| {
            d.class("dw-submit")
                .raw(save_btn.render())
                .raw(reset_btn.render())
        })
        .render()
}
