//! Value enum for slide property values

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value for a single slide property.
///
/// Header payloads are plain JSON objects, so a property value is one of a
/// small set of scalar shapes. TIFF and vendor tags arrive as strings;
/// reader-derived properties may be numeric or null. Booleans are accepted
/// on the wire so a stray `true` in a vendor header cannot abort
/// deserialization of the whole document.
///
/// # Example
///
/// ```
/// use slidemeta_lib::model::PropertyValue;
///
/// let vendor = PropertyValue::from("aperio");
/// let levels = PropertyValue::from(9i64);
/// let empty = PropertyValue::Null;
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl PropertyValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Returns the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
        }
    }
}

/// Natural display form: strings verbatim, numbers as printed by their
/// primitive type, null as the empty string.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => Ok(()),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
            PropertyValue::Float(n) => write!(f, "{}", n),
            PropertyValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let v: PropertyValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, PropertyValue::Null);

        let v: PropertyValue = serde_json::from_str("40000").unwrap();
        assert_eq!(v, PropertyValue::Int(40000));

        let v: PropertyValue = serde_json::from_str("0.2325").unwrap();
        assert_eq!(v, PropertyValue::Float(0.2325));

        let v: PropertyValue = serde_json::from_str("\"Aperio Leica Biosystems\"").unwrap();
        assert_eq!(v.as_str(), Some("Aperio Leica Biosystems"));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(PropertyValue::Null.to_string(), "");
        assert_eq!(PropertyValue::Int(42).to_string(), "42");
        assert_eq!(PropertyValue::Float(0.5).to_string(), "0.5");
        assert_eq!(PropertyValue::from("x20").to_string(), "x20");
    }
}
