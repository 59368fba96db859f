use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::FirmId;

/// Private free-text notes keyed by firm id. Entries are never removed automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes {
    entries: BTreeMap<String, String>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert. Returns true if the stored text changed.
    pub fn set(&mut self, id: &FirmId, text: &str) -> bool {
        let key = id.key().into_owned();
        if self.entries.get(&key).map(String::as_str) == Some(text) {
            return false;
        }
        self.entries.insert(key, text.to_string());
        true
    }

    pub fn get(&self, id: &FirmId) -> Option<&str> {
        self.entries.get(id.key().as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut notes = Notes::new();
        assert!(notes.set(&FirmId::Number(1), "met at demo day"));
        assert_eq!(notes.get(&FirmId::Text("1".to_string())), Some("met at demo day"));
        assert_eq!(notes.get(&FirmId::Number(2)), None);
    }

    #[test]
    fn test_set_same_text_is_unchanged() {
        let mut notes = Notes::new();
        notes.set(&FirmId::Number(1), "a");
        assert!(!notes.set(&FirmId::Number(1), "a"));
        assert!(notes.set(&FirmId::Number(1), ""));
        assert_eq!(notes.get(&FirmId::Number(1)), Some(""));
    }

    #[test]
    fn test_serializes_as_object() {
        let mut notes = Notes::new();
        notes.set(&FirmId::Number(4), "warm intro");
        let json = serde_json::to_value(&notes).unwrap();
        assert_eq!(json, serde_json::json!({ "4": "warm intro" }));
    }
}
