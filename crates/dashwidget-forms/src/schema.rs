//! Field schema definitions.

use crate::error::{Result, SchemaError};
use crate::value::Value;

/// The closed set of supported field kinds.
///
/// Render and sanitize dispatch match exhaustively on this enum, so adding
/// a kind forces both sites to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Integer input.
    Number,
    /// URL input.
    Url,
    /// Email input.
    Email,
    /// Multi-line text input.
    Textarea,
    /// Dropdown select.
    Select,
    /// Radio group styled as a button row.
    ButtonSet,
    /// Radio group.
    Radio,
    /// Radio group where each choice is an image.
    RadioImage,
    /// One checkbox per choice.
    MultiCheckbox,
    /// Reorderable list with per-item visibility.
    Sortable,
    /// Single checkbox.
    Checkbox,
    /// Single checkbox styled as a switch.
    Toggle,
}

impl FieldKind {
    /// Parses a kind from its type name.
    ///
    /// Names are lower-cased and hyphens fold to underscores, so
    /// "radio-image" and "RadioImage" both resolve. Unknown names yield
    /// `None`; callers skip such fields rather than failing.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase().replace('-', "_");

        match normalized.as_str() {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "url" => Some(Self::Url),
            "email" => Some(Self::Email),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            "buttonset" | "button_set" => Some(Self::ButtonSet),
            "radio" => Some(Self::Radio),
            "radioimage" | "radio_image" => Some(Self::RadioImage),
            "multicheckbox" | "multi_checkbox" | "multicheck" => Some(Self::MultiCheckbox),
            "sortable" => Some(Self::Sortable),
            "checkbox" => Some(Self::Checkbox),
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }

    /// Returns the canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Url => "url",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::ButtonSet => "buttonset",
            Self::Radio => "radio",
            Self::RadioImage => "radioimage",
            Self::MultiCheckbox => "multicheckbox",
            Self::Sortable => "sortable",
            Self::Checkbox => "checkbox",
            Self::Toggle => "toggle",
        }
    }

    /// Whether this kind requires a non-empty choice catalog.
    pub fn needs_choices(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::ButtonSet
                | Self::Radio
                | Self::RadioImage
                | Self::MultiCheckbox
                | Self::Sortable
        )
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Choice list layout for radio-style controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Choices stacked top to bottom.
    #[default]
    Vertical,
    /// Choices flowing left to right.
    Horizontal,
}

impl Layout {
    /// Returns the layout name used in CSS class suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Reference shortcuts: preset buttons next to a field.
///
/// Clicking one writes its value into the field's input; when `submitter`
/// is set the enclosing form is submitted as well.
#[derive(Debug, Clone, Default)]
pub struct RefShortcuts {
    /// Whether picking a preset submits the form.
    pub submitter: bool,
    /// Preset (value, label) pairs.
    pub choices: Vec<(String, String)>,
}

impl RefShortcuts {
    /// Creates shortcuts from (value, label) pairs.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            submitter: false,
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        }
    }

    /// Makes picking a preset submit the form.
    #[must_use]
    pub fn submitter(mut self) -> Self {
        self.submitter = true;
        self
    }
}

/// Definition of a single settings field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Field id, unique within a widget.
    pub id: String,
    /// Field kind.
    pub kind: FieldKind,
    /// Label shown next to the control.
    pub title: String,
    /// Value used when no setting has been persisted.
    pub default: Value,
    /// Ordered (key, label-or-url) choices for choice-based kinds.
    pub choices: Vec<(String, String)>,
    /// Placeholder for scalar inputs.
    pub placeholder: Option<String>,
    /// Choice layout for radio-style kinds.
    pub layout: Layout,
    /// Whether label and control sit on one line.
    pub inline: bool,
    /// Whether changing this field submits the form.
    pub submitter: bool,
    /// Text shown beside a checkbox/toggle control.
    pub side_text: Option<String>,
    /// Optional preset shortcuts.
    pub refs: Option<RefShortcuts>,
}

impl FieldSchema {
    /// Creates a field definition with an empty default.
    pub fn new(id: impl Into<String>, kind: FieldKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            default: Value::Text(String::new()),
            choices: Vec::new(),
            placeholder: None,
            layout: Layout::default(),
            inline: false,
            submitter: false,
            side_text: None,
            refs: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    /// Sets the choice catalog.
    #[must_use]
    pub fn choices(mut self, choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        self.choices = choices
            .into_iter()
            .map(|(k, l)| (k.into(), l.into()))
            .collect();
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the choice layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Puts label and control on one line.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Marks the field as a submitter: changing it submits the form.
    #[must_use]
    pub fn submitter(mut self) -> Self {
        self.submitter = true;
        self
    }

    /// Sets the side text for checkbox/toggle controls.
    #[must_use]
    pub fn side_text(mut self, text: impl Into<String>) -> Self {
        self.side_text = Some(text.into());
        self
    }

    /// Attaches preset shortcuts.
    #[must_use]
    pub fn refs(mut self, refs: RefShortcuts) -> Self {
        self.refs = Some(refs);
        self
    }

    /// Looks up the label for a choice key.
    pub fn choice_label(&self, key: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, l)| l.as_str())
    }

    /// Checks the schema invariants for this field.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SchemaError::EmptyFieldId);
        }

        if self.kind.needs_choices() && self.choices.is_empty() {
            return Err(SchemaError::MissingChoices(self.id.clone()));
        }

        let shape_ok = match self.kind {
            FieldKind::Number => matches!(self.default, Value::Number(_)),
            FieldKind::Checkbox | FieldKind::Toggle => matches!(self.default, Value::Bool(_)),
            FieldKind::MultiCheckbox | FieldKind::Sortable => {
                matches!(self.default, Value::List(_))
            }
            _ => matches!(self.default, Value::Text(_)),
        };

        if !shape_ok {
            return Err(SchemaError::DefaultMismatch {
                field: self.id.clone(),
                kind: self.kind.as_str().to_string(),
            });
        }

        Ok(())
    }
}

/// Validates a widget's full field list, including id uniqueness.
pub fn validate_fields(fields: &[FieldSchema]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();

    for field in fields {
        field.validate()?;

        if !seen.insert(field.id.as_str()) {
            return Err(SchemaError::DuplicateFieldId(field.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_normalizes() {
        assert_eq!(FieldKind::parse("text"), Some(FieldKind::Text));
        assert_eq!(FieldKind::parse("Radio-Image"), Some(FieldKind::RadioImage));
        assert_eq!(FieldKind::parse("BUTTONSET"), Some(FieldKind::ButtonSet));
        assert_eq!(FieldKind::parse("multicheck"), Some(FieldKind::MultiCheckbox));
        assert_eq!(FieldKind::parse("marquee"), None);
    }

    #[test]
    fn test_builder() {
        let field = FieldSchema::new("volume", FieldKind::Number, "Volume:")
            .default_value(10)
            .placeholder("0-100")
            .inline();

        assert_eq!(field.id, "volume");
        assert_eq!(field.default, Value::Number(10));
        assert_eq!(field.placeholder.as_deref(), Some("0-100"));
        assert!(field.inline);
        assert!(!field.submitter);
    }

    #[test]
    fn test_validate_empty_id() {
        let field = FieldSchema::new("", FieldKind::Text, "Broken");
        assert!(matches!(field.validate(), Err(SchemaError::EmptyFieldId)));
    }

    #[test]
    fn test_validate_missing_choices() {
        let field = FieldSchema::new("pick", FieldKind::Select, "Pick one");
        assert!(matches!(
            field.validate(),
            Err(SchemaError::MissingChoices(_))
        ));
    }

    #[test]
    fn test_validate_default_shape() {
        let field = FieldSchema::new("count", FieldKind::Number, "Count")
            .default_value("ten");
        assert!(matches!(
            field.validate(),
            Err(SchemaError::DefaultMismatch { .. })
        ));

        let field = FieldSchema::new("order", FieldKind::Sortable, "Order")
            .choices(vec![("a", "A")])
            .default_value(Value::list(["a"]));
        assert!(field.validate().is_ok());
    }

    #[test]
    fn test_validate_fields_duplicate_id() {
        let fields = vec![
            FieldSchema::new("a", FieldKind::Text, "A"),
            FieldSchema::new("a", FieldKind::Text, "A again"),
        ];
        assert!(matches!(
            validate_fields(&fields),
            Err(SchemaError::DuplicateFieldId(_))
        ));
    }

    #[test]
    fn test_choice_label() {
        let field = FieldSchema::new("pick", FieldKind::Select, "Pick")
            .choices(vec![("one", "First"), ("two", "Second")]);
        assert_eq!(field.choice_label("two"), Some("Second"));
        assert_eq!(field.choice_label("three"), None);
    }
}
