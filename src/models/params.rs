use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{ImagineError, Result};

/// A scalar form value. Encoded with its `Display` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            // Keep the decimal point: 7.0 goes out as "7.0", not "7".
            ParamValue::Float(v) => write!(f, "{:?}", v),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

pub type Parameters = BTreeMap<String, ParamValue>;

/// Keeps only the entries that carry a value.
pub fn parameter_builder<I>(entries: I) -> Parameters
where
    I: IntoIterator<Item = (&'static str, Option<ParamValue>)>,
{
    entries
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
}

/// Convenience for `parameter_builder` entries.
pub fn opt<T: Into<ParamValue>>(value: Option<T>) -> Option<ParamValue> {
    value.map(Into::into)
}

/// Fails with every missing field name, in the order given.
pub fn non_optional_parameter_checker(fields: &[(&'static str, bool)]) -> Result<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImagineError::MissingParameters(missing))
    }
}

#[derive(Debug, Default)]
pub struct RequiredFields {
    fields: Vec<(&'static str, bool)>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<T>(mut self, name: &'static str, value: &Option<T>) -> Self {
        self.fields.push((name, value.is_some()));
        self
    }

    pub fn check(self) -> Result<()> {
        non_optional_parameter_checker(&self.fields)
    }
}

/// Borrows a required value, reporting its name when absent.
pub fn require<'a, T>(name: &'static str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ImagineError::MissingParameters(vec![name]))
}
