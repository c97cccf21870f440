//! Per-kind coercion of submitted values.
//!
//! Sanitizing never fails: malformed or missing input degrades to the
//! kind's empty value so a submission always produces a full record.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::FieldKind;
use crate::value::Value;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A raw value as it arrives in a submitted payload.
///
/// Scalar inputs submit one string; multi-checkbox groups submit one entry
/// per checked box; a field missing from the payload entirely is `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawValue {
    /// The field did not appear in the payload.
    #[default]
    Absent,
    /// A single submitted string.
    Scalar(String),
    /// Repeated submissions under one name (`field[]`).
    Many(Vec<String>),
}

impl RawValue {
    /// Creates a scalar raw value.
    pub fn scalar(s: impl Into<String>) -> Self {
        Self::Scalar(s.into())
    }

    /// Creates a repeated raw value.
    pub fn many<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(items.into_iter().map(Into::into).collect())
    }

    fn as_scalar(&self) -> &str {
        match self {
            Self::Scalar(s) => s,
            Self::Absent | Self::Many(_) => "",
        }
    }

    fn as_entries(&self) -> &[String] {
        match self {
            Self::Many(items) => items,
            Self::Scalar(s) => std::slice::from_ref(s),
            Self::Absent => &[],
        }
    }
}

/// The shared normalization primitive for submitted text.
///
/// Strips HTML tags and control characters, collapses whitespace runs to
/// single spaces, and trims.
pub fn safe_text(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    let cleaned: String = stripped.chars().filter(|c| !c.is_control()).collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters allowed in a persisted URL, beyond ASCII alphanumerics.
const URL_CHARS: &str = "-~+_.?#=!&;,/:%@$|*'()[]";

/// Normalizes a submitted URL into a storable raw string.
///
/// Removes backslash escaping, trims, and drops characters a URL cannot
/// carry. No scheme is forced; relative and scheme-less values pass
/// through as typed.
pub fn sanitize_url(raw: &str) -> String {
    let unslashed = raw
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace('\\', "");

    unslashed
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || URL_CHARS.contains(*c))
        .collect()
}

/// Parses the leading integer of a string, `0` when there is none.
pub fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let mut digits = String::new();
    let mut chars = s.chars().peekable();

    if let Some('+' | '-') = chars.peek() {
        digits.push(chars.next().unwrap_or('+'));
    }

    for c in chars {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            break;
        }
    }

    digits.parse().unwrap_or(0)
}

/// Splits a comma-joined key list, sanitizing each segment.
///
/// Empty segments (including a fully empty input) are dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(safe_text)
        .filter(|s| !s.is_empty())
        .collect()
}

fn truthy(s: &str) -> bool {
    matches!(s, "1" | "true" | "on")
}

/// Coerces a raw submitted value into the typed value for a field kind.
///
/// The dispatch is exhaustive over [`FieldKind`]; `Absent` input yields
/// the kind's empty value (`""`, `0`, `false`, or `[]`).
pub fn sanitize(kind: FieldKind, raw: &RawValue) -> Value {
    match kind {
        FieldKind::Url => Value::Text(sanitize_url(raw.as_scalar())),
        FieldKind::Number => Value::Number(leading_int(raw.as_scalar())),
        FieldKind::MultiCheckbox => {
            Value::List(raw.as_entries().iter().map(|e| safe_text(e)).collect())
        }
        FieldKind::Sortable => Value::List(split_list(raw.as_scalar())),
        FieldKind::Checkbox | FieldKind::Toggle => {
            Value::Bool(truthy(&safe_text(raw.as_scalar())))
        }
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Textarea
        | FieldKind::Select
        | FieldKind::ButtonSet
        | FieldKind::Radio
        | FieldKind::RadioImage => Value::Text(safe_text(raw.as_scalar())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_text_strips_tags() {
        assert_eq!(safe_text("<b>bold</b> move"), "bold move");
        assert_eq!(safe_text("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(safe_text("  spaced\t\tout \n text  "), "spaced out text");
        assert_eq!(safe_text("plain"), "plain");
        assert_eq!(safe_text(""), "");
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(
            sanitize_url("  https://example.com/a?b=1 "),
            "https://example.com/a?b=1"
        );
        assert_eq!(sanitize_url("https:\\/\\/example.com"), "https://example.com");
        assert_eq!(sanitize_url("no spaces here"), "nospaceshere");
        assert_eq!(sanitize_url("example.com/path"), "example.com/path");
        assert_eq!(sanitize_url(""), "");
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("7abc"), 7);
        assert_eq!(leading_int("42"), 42);
        assert_eq!(leading_int("-13px"), -13);
        assert_eq!(leading_int("+5"), 5);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int("  12  "), 12);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("a, b , c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("a,,c,"), vec!["a", "c"]);
        assert_eq!(split_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_absent_yields_empty_per_kind() {
        let absent = RawValue::Absent;

        assert_eq!(sanitize(FieldKind::Text, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Url, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Email, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Textarea, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Select, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::ButtonSet, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Radio, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::RadioImage, &absent), Value::text(""));
        assert_eq!(sanitize(FieldKind::Number, &absent), Value::Number(0));
        assert_eq!(sanitize(FieldKind::Checkbox, &absent), Value::Bool(false));
        assert_eq!(sanitize(FieldKind::Toggle, &absent), Value::Bool(false));
        assert_eq!(sanitize(FieldKind::MultiCheckbox, &absent), Value::list([] as [&str; 0]));
        assert_eq!(sanitize(FieldKind::Sortable, &absent), Value::list([] as [&str; 0]));
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(
            sanitize(FieldKind::Number, &RawValue::scalar("7abc")),
            Value::Number(7)
        );
        assert_eq!(
            sanitize(FieldKind::Number, &RawValue::scalar("")),
            Value::Number(0)
        );
    }

    #[test]
    fn test_sortable_coercion() {
        assert_eq!(
            sanitize(FieldKind::Sortable, &RawValue::scalar("b, a ,c")),
            Value::list(["b", "a", "c"])
        );
        assert_eq!(
            sanitize(FieldKind::Sortable, &RawValue::scalar("<i>b</i>,a")),
            Value::list(["b", "a"])
        );
    }

    #[test]
    fn test_multicheckbox_coercion() {
        assert_eq!(
            sanitize(FieldKind::MultiCheckbox, &RawValue::many(["y"])),
            Value::list(["y"])
        );
        assert_eq!(
            sanitize(
                FieldKind::MultiCheckbox,
                &RawValue::many(["<em>x</em>", " z "])
            ),
            Value::list(["x", "z"])
        );
    }

    #[test]
    fn test_checkbox_coercion() {
        assert_eq!(
            sanitize(FieldKind::Checkbox, &RawValue::scalar("1")),
            Value::Bool(true)
        );
        assert_eq!(
            sanitize(FieldKind::Toggle, &RawValue::scalar("on")),
            Value::Bool(true)
        );
        assert_eq!(
            sanitize(FieldKind::Checkbox, &RawValue::scalar("")),
            Value::Bool(false)
        );
        assert_eq!(
            sanitize(FieldKind::Checkbox, &RawValue::scalar("maybe")),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_text_default_branch() {
        assert_eq!(
            sanitize(FieldKind::Text, &RawValue::scalar("<b>hi</b> there")),
            Value::text("hi there")
        );
    }
}
