//! End-to-end settings pipeline tests: render, submit, sanitize,
//! persist, re-render.

use std::sync::Arc;

use dashwidget_admin::{
    DashboardSite, DashboardWidget, MemoryStore, Method, SettingsRequest, SettingsStore,
    SettingsView,
};
use dashwidget_forms::{FieldKind, FieldSchema, Value};

struct VolumeWidget;

impl DashboardWidget for VolumeWidget {
    fn id(&self) -> &str {
        "player"
    }

    fn title(&self) -> &str {
        "Player"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        vec![
            FieldSchema::new("vol", FieldKind::Number, "Volume:").default_value(10),
            FieldSchema::new("mode", FieldKind::Select, "Mode:")
                .default_value("shuffle")
                .choices(vec![("shuffle", "Shuffle"), ("repeat", "Repeat")]),
            FieldSchema::new("tracks", FieldKind::MultiCheckbox, "Tracks:")
                .default_value(Value::list(["x"]))
                .choices(vec![("x", "X"), ("y", "Y"), ("z", "Z")]),
            FieldSchema::new("order", FieldKind::Sortable, "Order:")
                .default_value(Value::list(["b", "a"]))
                .choices(vec![("a", "A"), ("b", "B"), ("c", "C")]),
            FieldSchema::new("muted", FieldKind::Toggle, "Muted:").default_value(false),
        ]
    }

    fn render_body(&self, settings: &SettingsView) -> String {
        format!(
            "<p>vol={} mode={}</p>",
            settings.number("vol"),
            settings.text("mode")
        )
    }
}

fn site_with_store() -> (DashboardSite, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let site = DashboardSite::new("Test", store.clone())
        .register(Arc::new(VolumeWidget))
        .unwrap();
    (site, store)
}

fn save_request() -> SettingsRequest {
    SettingsRequest::post()
        .param("action", "save_player")
        .param("submit_type", "save")
}

#[test]
fn number_field_coerces_leading_integer() {
    let (site, store) = site_with_store();

    let form = site
        .settings_form("player", &save_request().field("player", "vol", "7abc"))
        .unwrap();

    // Persisted as 7 and already reflected in the same cycle's form.
    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("vol"), Some(&Value::Number(7)));
    assert!(form.contains(r#"value="7""#));

    site.settings_form("player", &save_request().field("player", "vol", ""))
        .unwrap();
    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("vol"), Some(&Value::Number(0)));
}

#[test]
fn save_overwrites_every_schema_field() {
    let (site, store) = site_with_store();

    // Only "vol" is submitted. Every other schema field is still
    // written, with its sanitized-empty value, not its default.
    site.settings_form("player", &save_request().field("player", "vol", "4"))
        .unwrap();

    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("vol"), Some(&Value::Number(4)));
    assert_eq!(record.get("mode"), Some(&Value::text("")));
    assert_eq!(record.get("tracks"), Some(&Value::list([] as [&str; 0])));
    assert_eq!(record.get("order"), Some(&Value::list([] as [&str; 0])));
    assert_eq!(record.get("muted"), Some(&Value::Bool(false)));
}

#[test]
fn multicheckbox_full_replace() {
    let (site, store) = site_with_store();

    site.settings_form(
        "player",
        &save_request().field_many("player", "tracks", ["x", "z"]),
    )
    .unwrap();
    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("tracks"), Some(&Value::list(["x", "z"])));

    // Rendering marks exactly the persisted members.
    let form = site.settings_form("player", &SettingsRequest::get()).unwrap();
    assert!(form.contains(r#"value="x" checked"#));
    assert!(!form.contains(r#"value="y" checked"#));
    assert!(form.contains(r#"value="z" checked"#));

    // Submitting ["y"] replaces the list wholesale.
    site.settings_form(
        "player",
        &save_request().field_many("player", "tracks", ["y"]),
    )
    .unwrap();
    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("tracks"), Some(&Value::list(["y"])));
}

#[test]
fn sortable_defaults_then_submission_round_trip() {
    let (site, store) = site_with_store();

    // No prior save: default order [b, a], catalog adds c hidden, and
    // the hidden input carries only the active subset.
    let form = site.settings_form("player", &SettingsRequest::get()).unwrap();
    assert!(form.contains(r#"name="player[order]" value="b,a""#));
    assert!(form.contains(r#"class="dw-sortable-item dw-hidden" data-value="c""#));

    let b_pos = form.find(r#"data-value="b""#).unwrap();
    let a_pos = form.find(r#"data-value="a""#).unwrap();
    let c_pos = form.find(r#"data-value="c""#).unwrap();
    assert!(b_pos < a_pos && a_pos < c_pos);

    // The client reorders and reveals c, submitting "c,a,b".
    site.settings_form("player", &save_request().field("player", "order", "c,a,b"))
        .unwrap();
    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("order"), Some(&Value::list(["c", "a", "b"])));

    let form = site.settings_form("player", &SettingsRequest::get()).unwrap();
    assert!(form.contains(r#"value="c,a,b""#));
}

#[test]
fn reset_deletes_record_and_restores_defaults() {
    let (site, store) = site_with_store();

    site.settings_form(
        "player",
        &save_request()
            .field("player", "vol", "3")
            .field("player", "mode", "repeat"),
    )
    .unwrap();
    assert!(store.get("player").unwrap().is_some());

    let reset = SettingsRequest::post()
        .param("action", "save_player")
        .param("submit_type", "reset");
    let form = site.settings_form("player", &reset).unwrap();

    assert!(store.get("player").unwrap().is_none());
    // Defaults are live again in the same cycle.
    assert!(form.contains(r#"value="10""#));
    assert!(form.contains(r#"<option value="shuffle" selected>"#));
    assert!(form.contains(r#"value="b,a""#));
}

#[test]
fn invalid_submissions_do_not_mutate() {
    let (site, store) = site_with_store();

    // Wrong method.
    let request = SettingsRequest::get()
        .param("action", "save_player")
        .param("submit_type", "save")
        .field("player", "vol", "3");
    site.settings_form("player", &request).unwrap();
    assert!(store.get("player").unwrap().is_none());

    // Wrong action name.
    let request = SettingsRequest::post()
        .param("action", "save_other")
        .param("submit_type", "save")
        .field("player", "vol", "3");
    site.settings_form("player", &request).unwrap();
    assert!(store.get("player").unwrap().is_none());

    // Missing submit_type.
    let request = SettingsRequest::post()
        .param("action", "save_player")
        .field("player", "vol", "3");
    site.settings_form("player", &request).unwrap();
    assert!(store.get("player").unwrap().is_none());
}

#[test]
fn urlencoded_body_drives_full_cycle() {
    let (site, store) = site_with_store();

    let body = "action=save_player&submit_type=save\
                &player%5Bvol%5D=42\
                &player%5Bmode%5D=repeat\
                &player%5Btracks%5D%5B%5D=y&player%5Btracks%5D%5B%5D=z\
                &player%5Border%5D=c%2Cb\
                &player%5Bmuted%5D=1";
    let request = SettingsRequest::from_urlencoded(Method::Post, body);

    let form = site.settings_form("player", &request).unwrap();

    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("vol"), Some(&Value::Number(42)));
    assert_eq!(record.get("mode"), Some(&Value::text("repeat")));
    assert_eq!(record.get("tracks"), Some(&Value::list(["y", "z"])));
    assert_eq!(record.get("order"), Some(&Value::list(["c", "b"])));
    assert_eq!(record.get("muted"), Some(&Value::Bool(true)));

    assert!(form.contains(r#"<option value="repeat" selected>"#));
    assert!(form.contains(r#"value="c,b""#));
}

#[test]
fn submitted_markup_is_sanitized() {
    let (site, store) = site_with_store();

    site.settings_form(
        "player",
        &save_request().field("player", "mode", "<script>alert(1)</script>repeat"),
    )
    .unwrap();

    let record = store.get("player").unwrap().unwrap();
    assert_eq!(record.get("mode"), Some(&Value::text("alert(1)repeat")));
}

#[test]
fn body_reflects_settings_after_save() {
    let (site, _store) = site_with_store();

    assert_eq!(
        site.render_widget("player").unwrap(),
        "<p>vol=10 mode=shuffle</p>"
    );

    site.settings_form(
        "player",
        &save_request()
            .field("player", "vol", "55")
            .field("player", "mode", "repeat"),
    )
    .unwrap();

    assert_eq!(
        site.render_widget("player").unwrap(),
        "<p>vol=55 mode=repeat</p>"
    );
}
