// src/domain/params.rs

use std::collections::BTreeMap;

/// A single outbound query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    /// Rendering used when the parameter is placed on a query string.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Text(text) => text.clone(),
            ParamValue::Int(value) => value.to_string(),
            ParamValue::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// The outbound API parameter set.
///
/// Keys come from the fixed set in `crate::common`. The map is owned by the
/// discovery orchestrator; repositories and use cases receive a value for
/// the duration of one call and never retain it. Backed by a `BTreeMap` so
/// the rendered query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiParams {
    entries: BTreeMap<&'static str, ParamValue>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) {
        self.entries.insert(key, value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(ParamValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(ParamValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(ParamValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Key/value pairs in key order, rendered for a query string.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.render()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PARAM_API_KEY, PARAM_INCLUDE_ADULT, PARAM_PAGE};

    #[test]
    fn test_typed_accessors() {
        let mut params = ApiParams::new();
        params.insert(PARAM_API_KEY, "k");
        params.insert(PARAM_PAGE, 3);
        params.insert(PARAM_INCLUDE_ADULT, true);

        assert_eq!(params.get_text(PARAM_API_KEY), Some("k"));
        assert_eq!(params.get_int(PARAM_PAGE), Some(3));
        assert_eq!(params.get_bool(PARAM_INCLUDE_ADULT), Some(true));
        assert_eq!(params.get_int(PARAM_API_KEY), None);
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut params = ApiParams::new();
        params.insert(PARAM_PAGE, 1);
        params.insert(PARAM_PAGE, 2);
        assert_eq!(params.get_int(PARAM_PAGE), Some(2));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_query_rendering_is_deterministic() {
        let mut params = ApiParams::new();
        params.insert(PARAM_PAGE, 11);
        params.insert(PARAM_API_KEY, "k");
        params.insert(PARAM_INCLUDE_ADULT, false);

        let query = params.to_query();
        assert_eq!(
            query,
            vec![
                ("api_key".to_string(), "k".to_string()),
                ("include_adult".to_string(), "false".to_string()),
                ("page".to_string(), "11".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_clears_key() {
        let mut params = ApiParams::new();
        params.insert(PARAM_API_KEY, "k");
        params.remove(PARAM_API_KEY);
        assert!(!params.contains(PARAM_API_KEY));
    }
}
