use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::PrefsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefType {
    Bool,
    Int,
    Str,
}

impl PrefType {
    pub fn as_str(&self) -> &str {
        match self {
            PrefType::Bool => "bool",
            PrefType::Int => "integer",
            PrefType::Str => "string",
        }
    }
}

impl fmt::Display for PrefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl PrefValue {
    pub fn pref_type(&self) -> PrefType {
        match self {
            PrefValue::Bool(_) => PrefType::Bool,
            PrefValue::Int(_) => PrefType::Int,
            PrefValue::Str(_) => PrefType::Str,
        }
    }

    /// Converts a JSON scalar. Integral floats such as `9091.0` are accepted
    /// as integers; arrays, objects, null and fractional numbers are not.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(PrefValue::Bool(*b)),
            Value::String(s) => Some(PrefValue::Str(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(PrefValue::Int(i))
                } else {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                        .map(|f| PrefValue::Int(f as i64))
                }
            }
            _ => None,
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Int(value)
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Str(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Str(value.to_string())
    }
}

/// Typed extraction used by `Prefs::get`.
pub trait FromPrefValue: Sized {
    const TYPE: PrefType;

    fn from_pref_value(value: &PrefValue) -> Option<Self>;
}

impl FromPrefValue for bool {
    const TYPE: PrefType = PrefType::Bool;

    fn from_pref_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromPrefValue for i64 {
    const TYPE: PrefType = PrefType::Int;

    fn from_pref_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromPrefValue for String {
    const TYPE: PrefType = PrefType::Str;

    fn from_pref_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

pub(crate) fn mismatch(key: &str, expected: PrefType, found: PrefType) -> PrefsError {
    PrefsError::TypeMismatch {
        key: key.to_string(),
        expected,
        found,
    }
}
