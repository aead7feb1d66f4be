//! Primitive value conversions between the external and internal
//! representations.
//!
//! Conversions are best-effort: malformed external input normalizes to
//! absent or empty, it is never rejected.

use std::collections::BTreeMap;

use crate::external::IdValue;

/// External scalar identifier to its numeric form.
pub fn id_to_number(value: Option<&IdValue>) -> Option<i64> {
    value.and_then(IdValue::to_number)
}

/// External identifier list to positional numeric form.
///
/// Unparsable elements become `None`; the list keeps its length.
pub fn ids_to_numbers(values: &[IdValue]) -> Vec<Option<i64>> {
    values.iter().map(IdValue::to_number).collect()
}

/// Internal scalar identifier back to the host's string form.
pub fn number_to_id(value: Option<i64>) -> Option<IdValue> {
    value.map(|n| IdValue::Text(n.to_string()))
}

/// Internal identifier list back to the host's string form.
///
/// An absent element renders the literal text `undefined`, which is what the
/// host stores for a hole in the list. It is kept, not dropped.
pub fn numbers_to_ids(values: &[Option<i64>]) -> Vec<IdValue> {
    values
        .iter()
        .map(|value| match value {
            Some(n) => IdValue::Text(n.to_string()),
            None => IdValue::Text("undefined".to_string()),
        })
        .collect()
}

/// Decode `key=value` label strings into a map.
///
/// Only the first `=` splits; an embedded `=` stays in the value. Key and
/// value are kept verbatim, no trimming. An entry with no `=` becomes a key
/// with an empty value.
pub fn labels_from_encoded(encoded: &[String]) -> BTreeMap<String, String> {
    encoded
        .iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (entry.clone(), String::new()),
        })
        .collect()
}

/// Encode the label map back into `key=value` strings, in map order.
pub fn labels_to_encoded(labels: &BTreeMap<String, String>) -> Vec<String> {
    labels
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{
        id_to_number, ids_to_numbers, labels_from_encoded, labels_to_encoded, number_to_id,
        numbers_to_ids,
    };
    use crate::external::IdValue;

    #[test]
    fn scalar_id_conversion() {
        assert_eq!(id_to_number(Some(&IdValue::from("123"))), Some(123));
        assert_eq!(id_to_number(Some(&IdValue::from(123))), Some(123));
        assert_eq!(id_to_number(Some(&IdValue::from("garbage"))), None);
        assert_eq!(id_to_number(None), None);
    }

    #[test]
    fn id_list_keeps_positions() {
        let values = vec![IdValue::from("1"), IdValue::from("x"), IdValue::from(3)];
        assert_eq!(ids_to_numbers(&values), vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn numbers_render_as_text() {
        assert_eq!(
            number_to_id(Some(42)),
            Some(IdValue::Text("42".to_string()))
        );
        assert_eq!(number_to_id(None), None);
    }

    #[test]
    fn absent_list_element_renders_undefined() {
        let rendered = numbers_to_ids(&[Some(7), None]);
        assert_eq!(
            rendered,
            vec![
                IdValue::Text("7".to_string()),
                IdValue::Text("undefined".to_string()),
            ]
        );
    }

    #[test]
    fn labels_split_on_first_equals() {
        let encoded = vec!["a=1".to_string(), "b=2=x".to_string()];
        let labels = labels_from_encoded(&encoded);
        assert_eq!(labels.get("a").map(String::as_str), Some("1"));
        assert_eq!(labels.get("b").map(String::as_str), Some("2=x"));
    }

    #[test]
    fn label_without_delimiter_keeps_empty_value() {
        let labels = labels_from_encoded(&["orphan".to_string()]);
        assert_eq!(labels.get("orphan").map(String::as_str), Some(""));
    }

    #[test]
    fn labels_encode_in_map_order() {
        let mut labels = BTreeMap::new();
        labels.insert("tier".to_string(), "web".to_string());
        labels.insert("env".to_string(), "prod".to_string());
        assert_eq!(
            labels_to_encoded(&labels),
            vec!["env=prod".to_string(), "tier=web".to_string()]
        );
    }
}
