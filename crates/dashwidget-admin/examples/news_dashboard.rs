//! News Dashboard Example
//!
//! Builds a dashboard with a fully configurable news widget and walks it
//! through one render/save/reset cycle, printing the HTML at each step.
//! Run with: cargo run -p dashwidget-admin --example news_dashboard

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dashwidget_admin::{
    DashboardSite, DashboardWidget, MemoryStore, Method, SettingsRequest, SettingsView,
};
use dashwidget_forms::{FieldKind, FieldSchema, Layout, RefShortcuts, Value};

/// A news widget exercising every field kind.
struct NewsWidget;

impl DashboardWidget for NewsWidget {
    fn id(&self) -> &str {
        "news"
    }

    fn title(&self) -> &str {
        "Latest News"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        vec![
            FieldSchema::new("heading", FieldKind::Text, "Heading:")
                .default_value("Latest headlines")
                .placeholder("Section heading"),
            FieldSchema::new("count", FieldKind::Number, "Headlines to show:")
                .default_value(10)
                .refs(RefShortcuts::new(vec![("5", "5"), ("10", "10"), ("20", "20")]).submitter()),
            FieldSchema::new("feed_url", FieldKind::Url, "Feed URL:")
                .default_value("https://example.com/feed")
                .placeholder("https://"),
            FieldSchema::new("contact", FieldKind::Email, "Contact email:")
                .default_value("editor@example.com"),
            FieldSchema::new("intro", FieldKind::Textarea, "Intro text:")
                .default_value("Hand-picked stories."),
            FieldSchema::new("source", FieldKind::Select, "Source:")
                .default_value("world")
                .choices(vec![
                    ("world", "World"),
                    ("local", "Local"),
                    ("tech", "Technology"),
                ])
                .submitter(),
            FieldSchema::new("align", FieldKind::ButtonSet, "Alignment:")
                .default_value("left")
                .choices(vec![("left", "Left"), ("center", "Center"), ("right", "Right")]),
            FieldSchema::new("density", FieldKind::Radio, "Density:")
                .default_value("cozy")
                .choices(vec![("cozy", "Cozy"), ("compact", "Compact")])
                .layout(Layout::Horizontal),
            FieldSchema::new("skin", FieldKind::RadioImage, "Skin:")
                .default_value("light")
                .choices(vec![
                    ("light", "https://example.com/skins/light.png"),
                    ("dark", "https://example.com/skins/dark.png"),
                ]),
            FieldSchema::new("show_meta", FieldKind::MultiCheckbox, "Show metadata:")
                .default_value(Value::list(["date"]))
                .choices(vec![
                    ("date", "Date"),
                    ("author", "Author"),
                    ("comments", "Comment count"),
                ]),
            FieldSchema::new("sections", FieldKind::Sortable, "Section order:")
                .default_value(Value::list(["top", "opinion"]))
                .choices(vec![
                    ("top", "Top stories"),
                    ("opinion", "Opinion"),
                    ("sports", "Sports"),
                    ("weather", "Weather"),
                ]),
            FieldSchema::new("show_images", FieldKind::Checkbox, "Images:")
                .default_value(true)
                .side_text("Show thumbnails"),
            FieldSchema::new("auto_refresh", FieldKind::Toggle, "Auto refresh:")
                .default_value(false)
                .side_text("Reload every five minutes")
                .inline(),
        ]
    }

    fn render_body(&self, settings: &SettingsView) -> String {
        let sections = settings.list("sections").join(", ");

        format!(
            "<h3>{}</h3><p>{} headlines from {} ({})</p>",
            settings.text("heading"),
            settings.number("count"),
            settings.text("source"),
            if sections.is_empty() {
                "no sections".to_string()
            } else {
                sections
            },
        )
    }
}

/// A widget with no settings at all.
struct ClockWidget;

impl DashboardWidget for ClockWidget {
    fn id(&self) -> &str {
        "clock"
    }

    fn title(&self) -> &str {
        "Clock"
    }

    fn render_body(&self, _settings: &SettingsView) -> String {
        "<p>It is always now.</p>".to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let site = DashboardSite::new("News Site Dashboard", Arc::new(MemoryStore::new()))
        .register(Arc::new(NewsWidget))?
        .register(Arc::new(ClockWidget))?;

    // 1. Plain render: every field shows its default.
    info!("Rendering dashboard from defaults");
    let page = site.render_page(&SettingsRequest::get())?;
    println!("--- initial page ({} bytes) ---", page.len());
    println!("{}", site.render_widget("news")?);

    // 2. A save submission, as an urlencoded body the way a browser
    //    would send it.
    let body = "action=save_news&submit_type=save\
                &news%5Bheading%5D=Breaking+now\
                &news%5Bcount%5D=7abc\
                &news%5Bfeed_url%5D=https%3A%2F%2Fnews.example.com%2Frss\
                &news%5Bcontact%5D=desk%40example.com\
                &news%5Bintro%5D=Top+picks\
                &news%5Bsource%5D=tech\
                &news%5Balign%5D=center\
                &news%5Bdensity%5D=compact\
                &news%5Bskin%5D=dark\
                &news%5Bshow_meta%5D%5B%5D=date&news%5Bshow_meta%5D%5B%5D=author\
                &news%5Bsections%5D=sports%2Ctop\
                &news%5Bshow_images%5D=1";
    let request = SettingsRequest::from_urlencoded(Method::Post, body);

    info!("Applying save submission");
    site.render_page(&request)?;
    println!("--- after save ---");
    println!("{}", site.render_widget("news")?);

    // 3. Reset: the record is deleted and defaults come back.
    let reset = SettingsRequest::post()
        .param("action", "save_news")
        .param("submit_type", "reset");

    info!("Applying reset submission");
    site.render_page(&reset)?;
    println!("--- after reset ---");
    println!("{}", site.render_widget("news")?);

    Ok(())
}
