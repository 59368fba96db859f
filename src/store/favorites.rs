use serde::{Deserialize, Serialize};

use crate::models::{Firm, FirmId};

/// Shortlisted firms, each snapshotted in full when starred. Keeps star order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    firms: Vec<Firm>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the firm if starred, append it otherwise. Returns whether it is now starred.
    pub fn toggle(&mut self, firm: &Firm) -> bool {
        if let Some(pos) = self.position(&firm.id) {
            self.firms.remove(pos);
            false
        } else {
            self.firms.push(firm.clone());
            true
        }
    }

    pub fn contains(&self, id: &FirmId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &FirmId) -> Option<&Firm> {
        self.firms.iter().find(|f| &f.id == id)
    }

    pub fn firms(&self) -> &[Firm] {
        &self.firms
    }

    pub fn len(&self) -> usize {
        self.firms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firms.is_empty()
    }

    fn position(&self, id: &FirmId) -> Option<usize> {
        self.firms.iter().position(|f| &f.id == id)
    }

    /// Drop repeated ids from stored data, keeping the first occurrence.
    pub(crate) fn dedup(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.firms.retain(|f| seen.insert(f.id.clone()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_firm(id: i64) -> Firm {
        serde_json::from_value(serde_json::json!({ "id": id, "name": format!("Firm {id}") }))
            .unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(&make_firm(1)));
        assert!(favorites.contains(&FirmId::Number(1)));
        assert!(!favorites.toggle(&make_firm(1)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut favorites = Favorites::new();
        favorites.toggle(&make_firm(1));
        favorites.toggle(&make_firm(2));
        let before = favorites.clone();

        favorites.toggle(&make_firm(3));
        favorites.toggle(&make_firm(3));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_toggle_matches_by_id_not_snapshot() {
        let mut favorites = Favorites::new();
        favorites.toggle(&make_firm(1));
        let mut renamed = make_firm(1);
        renamed.name = "Renamed".to_string();
        assert!(!favorites.toggle(&renamed));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_keeps_star_order() {
        let mut favorites = Favorites::new();
        for id in [3, 1, 2] {
            favorites.toggle(&make_firm(id));
        }
        let ids: Vec<String> = favorites.firms().iter().map(|f| f.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_dedup_stored_duplicates() {
        let raw = r#"[{"id":1,"name":"a"},{"id":"1","name":"b"},{"id":2}]"#;
        let favorites: Favorites = serde_json::from_str(raw).unwrap();
        let favorites = favorites.dedup();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.get(&FirmId::Number(1)).unwrap().name, "a");
    }
}
