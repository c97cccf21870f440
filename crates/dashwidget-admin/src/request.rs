//! Submitted settings requests.
//!
//! A transport-agnostic model of what the host shell hands over on each
//! request cycle: the method, top-level markers (`action`, `submit_type`),
//! and raw per-field values namespaced by widget id.

use std::collections::HashMap;

use dashwidget_forms::RawValue;

/// Request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
}

impl Method {
    /// Parses a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the method as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the method carries a body write (POST-equivalent).
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One settings submission as received from the host shell.
#[derive(Debug, Clone, Default)]
pub struct SettingsRequest {
    method: Option<Method>,
    params: HashMap<String, String>,
    fields: HashMap<String, HashMap<String, RawValue>>,
}

impl SettingsRequest {
    /// Creates a request with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method: Some(method),
            params: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    /// Creates a GET request (plain render, no submission).
    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    /// Creates a POST request.
    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    /// Sets a top-level parameter such as `action` or `submit_type`.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets a scalar field value in a widget's namespace.
    #[must_use]
    pub fn field(
        mut self,
        widget_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.fields
            .entry(widget_id.into())
            .or_default()
            .insert(field_id.into(), RawValue::scalar(value));
        self
    }

    /// Sets a repeated field value (checkbox groups) in a widget's
    /// namespace.
    #[must_use]
    pub fn field_many<I, S>(
        mut self,
        widget_id: impl Into<String>,
        field_id: impl Into<String>,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .entry(widget_id.into())
            .or_default()
            .insert(field_id.into(), RawValue::many(values));
        self
    }

    /// Returns the request method, if one was supplied.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Returns a top-level parameter.
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the raw value submitted for a field, `Absent` when the
    /// field (or the whole widget namespace) is missing.
    pub fn raw_field(&self, widget_id: &str, field_id: &str) -> RawValue {
        self.fields
            .get(widget_id)
            .and_then(|ns| ns.get(field_id))
            .cloned()
            .unwrap_or(RawValue::Absent)
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// Keys shaped `widget[field]` land in that widget's namespace;
    /// `widget[field][]` appends to a repeated value; anything else is a
    /// top-level parameter. Later scalar pairs replace earlier ones.
    pub fn from_urlencoded(method: Method, body: &str) -> Self {
        let mut request = Self::new(method);

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let Some(key) = parts.next() else { continue };
            let value = urldecode(parts.next().unwrap_or(""));
            let key = urldecode(key);

            match parse_bracket_key(&key) {
                Some((widget, field, repeated)) => {
                    let ns = request.fields.entry(widget).or_default();
                    if repeated {
                        match ns.entry(field).or_insert_with(|| RawValue::many([] as [&str; 0]))
                        {
                            RawValue::Many(items) => items.push(value),
                            slot => *slot = RawValue::many([value]),
                        }
                    } else {
                        ns.insert(field, RawValue::scalar(value));
                    }
                }
                None => {
                    request.params.insert(key, value);
                }
            }
        }

        request
    }
}

/// Splits `widget[field]` / `widget[field][]` keys.
fn parse_bracket_key(key: &str) -> Option<(String, String, bool)> {
    let open = key.find('[')?;
    let widget = &key[..open];
    let rest = &key[open..];

    let (field_part, repeated) = match rest.strip_suffix("[]") {
        Some(r) => (r, true),
        None => (rest, false),
    };

    let field = field_part.strip_prefix('[')?.strip_suffix(']')?;
    if widget.is_empty() || field.is_empty() || field.contains('[') {
        return None;
    }

    Some((widget.to_string(), field.to_string(), repeated))
}

/// Percent-decoding with `+`-as-space.
fn urldecode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() == 2 {
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    bytes.push(byte);
                    continue;
                }
            }
            bytes.push(b'%');
            bytes.extend_from_slice(hex.as_bytes());
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
