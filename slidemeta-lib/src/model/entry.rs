//! Property entries and dictionary flattening

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::PropertyValue;

/// A flat property dictionary as delivered by the slide header endpoint.
///
/// Keys are unique; iteration order is the map's key order, which is all
/// the table binding relies on (the widget re-sorts rows by its own sort
/// rendering anyway).
pub type PropertyDictionary = BTreeMap<String, PropertyValue>;

/// One key/value row of the properties table.
///
/// Created by flattening a dictionary entry; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// The full property key, namespace prefix included.
    pub key: String,
    /// The property value.
    pub value: PropertyValue,
}

impl PropertyEntry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flattens a property dictionary into one [`PropertyEntry`] per key.
///
/// Entries come out in the dictionary's iteration order. Total and pure:
/// an empty dictionary flattens to an empty vec, nothing errors.
pub fn flatten(dict: &PropertyDictionary) -> Vec<PropertyEntry> {
    dict.iter()
        .map(|(key, value)| PropertyEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&PropertyDictionary::new()).is_empty());
    }

    #[test]
    fn test_flatten_preserves_pairs() {
        let mut dict = PropertyDictionary::new();
        dict.insert("openslide.vendor".into(), "hamamatsu".into());
        dict.insert("openslide.level-count".into(), PropertyValue::Int(9));
        dict.insert("tiff.DateTime".into(), PropertyValue::Null);

        let entries = flatten(&dict);
        assert_eq!(entries.len(), dict.len());
        for entry in &entries {
            assert_eq!(dict.get(&entry.key), Some(&entry.value));
        }
    }

    #[test]
    fn test_flatten_order_matches_dictionary() {
        let mut dict = PropertyDictionary::new();
        dict.insert("b".into(), PropertyValue::Int(2));
        dict.insert("a".into(), PropertyValue::Int(1));

        let keys: Vec<_> = flatten(&dict).into_iter().map(|e| e.key).collect();
        let dict_keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, dict_keys);
    }
}
