//! Form Fields
//!
//! Snapshot of a form's values and its `application/x-www-form-urlencoded`
//! serialization (same output as `URLSearchParams`).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is by the urlencoded serializer, besides ASCII alphanumerics
const FORM_URLENCODED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Ordered (name, value) pairs captured at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_urlencoded(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
    }
}

/// Percent-encode one name or value; spaces become `+`
fn encode_component(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, FORM_URLENCODED).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
