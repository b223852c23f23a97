use crate::keys::structs::bulk_key_mapping::BulkKeyMapping;
use std::collections::HashMap;

impl BulkKeyMapping {
    pub(crate) fn insert(&mut self, original: String, normalized: String) {
        self.to_original.insert(normalized.clone(), original.clone());
        self.to_normalized.insert(original, normalized);
    }

    pub fn normalized_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.to_normalized.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn original_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.to_original.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.to_normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_normalized.is_empty()
    }

    pub fn normalize_keys<S: AsRef<str>>(&self, keys: &[S]) -> Vec<String> {
        keys.iter()
            .map(|key| self.normalized_for(key.as_ref()).to_string())
            .collect()
    }

    /// Re-keys a backend result by original keys.
    pub fn restore<V>(&self, found: HashMap<String, V>) -> HashMap<String, V> {
        found
            .into_iter()
            .map(|(key, value)| (self.original_for(&key).to_string(), value))
            .collect()
    }
}
