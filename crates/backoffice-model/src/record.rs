#![deny(unsafe_code)]

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::FieldName;

/// A single field value as delivered by the backend.
///
/// The console never interprets values beyond display and substring search,
/// so the shape stays deliberately small. Anything absent or `null` is
/// [`FieldValue::Missing`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl FieldValue {
    /// The text the search filter matches against. Missing values match as
    /// the empty string rather than erroring.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_str()),
            Self::Number(value) => Cow::Owned(value.to_string()),
            Self::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
            Self::Missing => Cow::Borrowed(""),
        }
    }
}

/// An opaque key/value row.
///
/// Field order is canonicalized (`BTreeMap`) so that serialization and table
/// rendering are deterministic regardless of backend JSON key order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: &FieldName) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text the search filter sees for `field`; absent fields match as "".
    pub fn search_text(&self, field: &FieldName) -> Cow<'_, str> {
        match self.fields.get(field) {
            Some(value) => value.search_text(),
            None => Cow::Borrowed(""),
        }
    }
}

impl FromIterator<(FieldName, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
