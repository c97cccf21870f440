//! Full dashboard page template.
//!
//! Emits a standalone HTML document with the stylesheet and the
//! client-side behavior script embedded, so a dashboard needs no asset
//! pipeline. The script implements the markup contract: sortable lists
//! keep their hidden input in sync, submitter fields auto-submit, ref
//! shortcuts fill their sibling input, and the reset button rewrites
//! `submit_type` before submitting.

use ironhtml::html;
use ironhtml::typed::{Document, Element};
use ironhtml_elements::{Body, Div, Head, Html, Meta, Script, Style, Title, H1};

/// Context for rendering the dashboard page.
#[derive(Debug, Clone, Default)]
pub struct DashboardContext {
    /// Page title.
    pub title: String,
    /// Widget panels in registration order.
    pub widgets: Vec<WidgetPanel>,
}

/// One rendered widget on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct WidgetPanel {
    /// Widget id.
    pub widget_id: String,
    /// Display title.
    pub title: String,
    /// Owner-rendered body HTML.
    pub body_html: String,
    /// Settings form HTML, empty for widgets without fields.
    pub settings_html: String,
}

const CSS: &str = "\
.dw-dashboard { display: grid; gap: 1rem; \
grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }\n\
.dw-widget { border: 1px solid #c3c4c7; border-radius: 4px; \
background: #fff; }\n\
.dw-widget-title { margin: 0; padding: 0.5rem 0.75rem; \
border-bottom: 1px solid #c3c4c7; font-size: 14px; }\n\
.dw-widget-body { padding: 0.75rem; }\n\
.dw-widget-settings { padding: 0.75rem; border-top: 1px solid #c3c4c7; \
background: #f6f7f7; }\n\
.dw-field { margin-bottom: 0.75rem; }\n\
.dw-field-label { display: block; font-weight: 600; \
margin-bottom: 0.25rem; }\n\
.dw-field-layout-inline .dw-field-inner { display: flex; gap: 0.5rem; \
align-items: center; }\n\
.dw-field-layout-inline .dw-field-label { margin-bottom: 0; }\n\
.dw-radio-list, .dw-radio-images, .dw-check-list, .dw-sortable { \
list-style: none; margin: 0; padding: 0; }\n\
.dw-layout-horizontal li { display: inline-block; \
margin-right: 0.75rem; }\n\
.dw-buttonset .dw-switch-input { position: absolute; opacity: 0; }\n\
.dw-buttonset .dw-switch-label { display: inline-block; \
padding: 0.25rem 0.75rem; border: 1px solid #c3c4c7; \
cursor: pointer; }\n\
.dw-buttonset .dw-switch-input:checked + .dw-switch-label { \
background: #2271b1; color: #fff; border-color: #2271b1; }\n\
.dw-sortable-item { display: flex; align-items: center; gap: 0.5rem; \
padding: 0.25rem 0.5rem; border: 1px solid #c3c4c7; \
margin-bottom: 2px; background: #fff; cursor: grab; }\n\
.dw-sortable-item.dw-hidden { opacity: 0.4; }\n\
.dw-handle::before { content: '\\2630'; }\n\
.dw-visibility { cursor: pointer; }\n\
.dw-visibility::before { content: '\\1F441'; }\n\
.dw-submit { margin-top: 0.75rem; display: flex; gap: 0.5rem; }\n\
.dw-button { padding: 0.3rem 0.9rem; border: 1px solid #2271b1; \
background: #f6f7f7; color: #2271b1; cursor: pointer; }\n\
.dw-button-primary { background: #2271b1; color: #fff; }\n\
.dw-field-refs ul { list-style: none; display: flex; gap: 0.5rem; \
margin: 0.25rem 0 0; padding: 0; }";

const JS: &str = r#"
var fieldMeta = function (field) {
    try { return JSON.parse(field.getAttribute('data-field')); }
    catch (e) { return null; }
};

var syncSortable = function (field) {
    var hidden = field.querySelector('input[type="hidden"]');
    if (!hidden) { return; }
    var keys = [];
    field.querySelectorAll('li').forEach(function (li) {
        if (!li.classList.contains('dw-hidden')) {
            keys.push(li.dataset.value);
        }
    });
    hidden.value = keys.join(',');
};

document.addEventListener('DOMContentLoaded', function () {
    // Reset buttons rewrite the submit marker before submitting.
    document.querySelectorAll('.dw-settings-form [data-reset]').forEach(function (btn) {
        btn.addEventListener('click', function (event) {
            event.preventDefault();
            var form = btn.closest('form');
            var marker = form.querySelector('input[name="submit_type"]');
            if (marker) { marker.value = 'reset'; }
            form.submit();
        });
    });

    // Sortable lists: drag to reorder, eye icon to toggle visibility.
    document.querySelectorAll('.dw-field-type-sortable').forEach(function (field) {
        var list = field.querySelector('ul.dw-sortable');
        if (!list) { return; }

        list.querySelectorAll('li').forEach(function (li) {
            li.draggable = true;

            li.addEventListener('dragstart', function () {
                li.classList.add('dw-dragging');
            });
            li.addEventListener('dragend', function () {
                li.classList.remove('dw-dragging');
                syncSortable(field);
            });

            var eye = li.querySelector('i.dw-visibility');
            if (eye) {
                eye.addEventListener('click', function (event) {
                    event.stopPropagation();
                    li.classList.toggle('dw-hidden');
                    syncSortable(field);
                });
            }
        });

        list.addEventListener('dragover', function (event) {
            event.preventDefault();
            var dragging = list.querySelector('.dw-dragging');
            var target = event.target.closest('li');
            if (!dragging || !target || target === dragging) { return; }
            var rect = target.getBoundingClientRect();
            if (event.clientY < rect.top + rect.height / 2) {
                list.insertBefore(dragging, target);
            } else {
                list.insertBefore(dragging, target.nextSibling);
            }
        });
    });

    // Submitter fields: changing them submits the enclosing form.
    document.querySelectorAll('.dw-field[data-field]').forEach(function (field) {
        var meta = fieldMeta(field);
        if (!meta || !meta.submitter) { return; }

        var form = field.closest('form');
        if (!form) { return; }

        if (meta.type === 'select') {
            field.addEventListener('change', function () { form.submit(); });
        } else {
            field.querySelectorAll('input').forEach(function (input) {
                input.addEventListener('click', function () { form.submit(); });
            });
        }
    });

    // Ref shortcuts fill the sibling input, optionally submitting.
    document.querySelectorAll('.dw-field-refs a').forEach(function (link) {
        link.addEventListener('click', function (event) {
            event.preventDefault();
            var field = link.closest('.dw-field');
            var refs = link.closest('.dw-field-refs');
            var input = field ? field.querySelector('input') : null;
            if (!input) { return; }

            input.value = link.getAttribute('data-val');

            var refData = {};
            try { refData = JSON.parse(refs.getAttribute('data-ref')); }
            catch (e) { refData = {}; }
            if (refData.submitter === true) {
                var form = field.closest('form');
                if (form) { form.submit(); }
            }
        });
    });
});
"#;

/// Renders the full dashboard document.
pub fn render_dashboard(ctx: &DashboardContext) -> String {
    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(&ctx.title))
                        .child::<Style, _>(|s| s.raw(CSS))
                })
                .child::<Body, _>(|body| {
                    body.child::<H1, _>(|h| h.text(&ctx.title))
                        .child::<Div, _>(|grid| {
                            grid.class("dw-dashboard").children(
                                ctx.widgets.iter(),
                                |panel, card: Element<Div>| render_widget_panel(card, panel),
                            )
                        })
                        .child::<Script, _>(|s| s.raw(JS))
                })
        })
        .build()
}

fn render_widget_panel(card: Element<Div>, panel: &WidgetPanel) -> Element<Div> {
    let title = &panel.title;
    let heading = html! {
        h2.class("dw-widget-title") { #title }
    };

    let card = card
        .class("dw-widget")
        .data("widget", panel.widget_id.as_str())
        .raw(heading.render())
        .child::<Div, _>(|b| b.class("dw-widget-body").raw(&panel.body_html));

    if panel.settings_html.is_empty() {
        card
    } else {
        card.child::<Div, _>(|s| {
            s.class("dw-widget-settings").raw(&panel.settings_html)
        })
    }
}
