//! Persisted setting values.

use serde::{Deserialize, Serialize};

/// A single persisted setting value.
///
/// Records store one `Value` per field id. Booleans are modeled as real
/// booleans; [`Value::as_bool`] tolerates the scalar forms older records
/// used ("1", "true", "on") so they read back correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean (checkbox, toggle).
    Bool(bool),
    /// An integer (number fields).
    Number(i64),
    /// A scalar string (text, url, email, select, radio, ...).
    Text(String),
    /// An ordered list of choice keys (multicheckbox, sortable).
    List(Vec<String>),
}

impl Value {
    /// Builds a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Builds a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the value as a string slice, if scalar text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer, if numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value interpreted as a boolean.
    ///
    /// Legacy records persisted checkbox state as scalars; those forms
    /// ("1", "true", "on", nonzero numbers) are accepted here so the
    /// tolerance stays at the value boundary instead of leaking into
    /// sanitize or render dispatch.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0,
            Self::Text(s) => matches!(s.as_str(), "1" | "true" | "on"),
            Self::List(_) => false,
        }
    }

    /// Returns the value as a list of keys, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Renders the value the way a scalar form control expects it.
    ///
    /// Lists join on commas (the sortable hidden-input format); booleans
    /// map to "1"/"".
    pub fn to_control_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => {
                if *b {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::text("hello").as_text(), Some("hello"));
        assert_eq!(Value::Number(7).as_number(), Some(7));
        assert_eq!(
            Value::list(["a", "b"]).as_list(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(Value::text("hello").as_number(), None);
    }

    #[test]
    fn test_bool_legacy_forms() {
        assert!(Value::Bool(true).as_bool());
        assert!(!Value::Bool(false).as_bool());
        assert!(Value::text("1").as_bool());
        assert!(Value::text("true").as_bool());
        assert!(Value::text("on").as_bool());
        assert!(!Value::text("").as_bool());
        assert!(!Value::text("no").as_bool());
        assert!(Value::Number(2).as_bool());
        assert!(!Value::Number(0).as_bool());
    }

    #[test]
    fn test_control_value() {
        assert_eq!(Value::text("x").to_control_value(), "x");
        assert_eq!(Value::Number(10).to_control_value(), "10");
        assert_eq!(Value::Bool(true).to_control_value(), "1");
        assert_eq!(Value::Bool(false).to_control_value(), "");
        assert_eq!(Value::list(["a", "b"]).to_control_value(), "a,b");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Value::list(["x", "z"])).unwrap();
        assert_eq!(json, r#"["x","z"]"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::list(["x", "z"]));

        let back: Value = serde_json::from_str("true").unwrap();
        assert_eq!(back, Value::Bool(true));
        let back: Value = serde_json::from_str("42").unwrap();
        assert_eq!(back, Value::Number(42));
        let back: Value = serde_json::from_str(r#""hi""#).unwrap();
        assert_eq!(back, Value::text("hi"));
    }
}
