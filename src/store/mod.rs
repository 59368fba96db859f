//! Persisted user collections: favorites, notes and recently viewed firms.
//!
//! Each collection is loaded once when [`PersistentCollections`] is built and written back
//! synchronously after every mutation. Missing or unreadable data loads as an empty
//! collection; write failures are logged and the in-memory state is kept.

pub mod favorites;
pub mod kv;
pub mod notes;
pub mod recent;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::models::{Firm, FirmId};
use favorites::Favorites;
use kv::KeyValueStore;
use notes::Notes;
use recent::RecentlyViewed;

pub const FAVORITES_KEY: &str = "favorites";
pub const NOTES_KEY: &str = "vcNotes";
pub const RECENT_KEY: &str = "recentlyViewed";

/// Options for [`PersistentCollections::load`].
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub recent_capacity: usize,
    /// Recently viewed resets every session unless this is set.
    pub persist_recent: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            recent_capacity: recent::DEFAULT_RECENT_CAPACITY,
            persist_recent: false,
        }
    }
}

pub struct PersistentCollections {
    storage: Arc<dyn KeyValueStore>,
    favorites: Favorites,
    notes: Notes,
    recent: RecentlyViewed,
    persist_recent: bool,
}

impl PersistentCollections {
    pub fn load(storage: Arc<dyn KeyValueStore>, options: StoreOptions) -> Self {
        let favorites = load_or_default::<Favorites>(storage.as_ref(), FAVORITES_KEY).dedup();
        let notes = load_or_default::<Notes>(storage.as_ref(), NOTES_KEY);
        let recent = if options.persist_recent {
            let stored = load_or_default::<Vec<Firm>>(storage.as_ref(), RECENT_KEY);
            RecentlyViewed::from_firms(stored, options.recent_capacity)
        } else {
            RecentlyViewed::with_capacity(options.recent_capacity)
        };

        tracing::info!(
            "Loaded {} favorites, {} notes, {} recently viewed",
            favorites.len(),
            notes.len(),
            recent.len()
        );

        Self {
            storage,
            favorites,
            notes,
            recent,
            persist_recent: options.persist_recent,
        }
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn recent(&self) -> &RecentlyViewed {
        &self.recent
    }

    /// Toggle and persist the full favorites list. Returns whether the firm is now starred.
    pub fn toggle_favorite(&mut self, firm: &Firm) -> bool {
        let starred = self.favorites.toggle(firm);
        save(self.storage.as_ref(), FAVORITES_KEY, &self.favorites);
        starred
    }

    /// Upsert a note and persist the full map.
    pub fn set_note(&mut self, id: &FirmId, text: &str) {
        if self.notes.set(id, text) {
            save(self.storage.as_ref(), NOTES_KEY, &self.notes);
        }
    }

    pub fn record_view(&mut self, firm: Firm) {
        self.recent.record(firm);
        if self.persist_recent {
            save(self.storage.as_ref(), RECENT_KEY, &self.recent.to_vec());
        }
    }

    /// Re-read favorites from storage, as on login.
    pub fn reload_favorites(&mut self) {
        self.favorites = load_or_default::<Favorites>(self.storage.as_ref(), FAVORITES_KEY).dedup();
    }
}

fn load_or_default<T: DeserializeOwned + Default>(storage: &dyn KeyValueStore, key: &str) -> T {
    match storage.get(key) {
        Ok(Some(data)) => serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed '{key}' data: {e}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!("Failed to read '{key}' from storage: {e:#}");
            T::default()
        }
    }
}

fn save<T: Serialize + ?Sized>(storage: &dyn KeyValueStore, key: &str, value: &T) {
    let data = match serde_json::to_string(value) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to serialize '{key}': {e}");
            return;
        }
    };
    if let Err(e) = storage.set(key, &data) {
        tracing::warn!("Failed to persist '{key}': {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kv::MemoryStore;

    fn make_firm(id: i64) -> Firm {
        serde_json::from_value(serde_json::json!({ "id": id, "name": format!("Firm {id}") }))
            .unwrap()
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("disk unavailable")
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk unavailable")
        }
    }

    #[test]
    fn test_empty_storage_loads_empty_collections() {
        let collections =
            PersistentCollections::load(Arc::new(MemoryStore::new()), StoreOptions::default());
        assert!(collections.favorites().is_empty());
        assert!(collections.notes().is_empty());
        assert!(collections.recent().is_empty());
    }

    #[test]
    fn test_corrupt_storage_loads_empty_collections() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(FAVORITES_KEY, "{not json").unwrap();
        storage.set(NOTES_KEY, "[1, 2]").unwrap();
        let collections = PersistentCollections::load(storage, StoreOptions::default());
        assert!(collections.favorites().is_empty());
        assert!(collections.notes().is_empty());
    }

    #[test]
    fn test_read_failure_loads_empty_and_write_failure_keeps_memory() {
        let mut collections =
            PersistentCollections::load(Arc::new(FailingStore), StoreOptions::default());
        assert!(collections.toggle_favorite(&make_firm(1)));
        collections.set_note(&FirmId::Number(1), "still here");
        assert!(collections.favorites().contains(&FirmId::Number(1)));
        assert_eq!(collections.notes().get(&FirmId::Number(1)), Some("still here"));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let storage = Arc::new(MemoryStore::new());
        let mut collections = PersistentCollections::load(storage.clone(), StoreOptions::default());
        collections.toggle_favorite(&make_firm(1));
        collections.set_note(&FirmId::Number(1), "follow up");

        let reloaded = PersistentCollections::load(storage.clone(), StoreOptions::default());
        assert!(reloaded.favorites().contains(&FirmId::Number(1)));
        assert_eq!(reloaded.notes().get(&FirmId::Number(1)), Some("follow up"));

        let favorites: serde_json::Value =
            serde_json::from_str(&storage.get(FAVORITES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(favorites[0]["name"], "Firm 1");
    }

    #[test]
    fn test_recent_not_persisted_by_default() {
        let storage = Arc::new(MemoryStore::new());
        let mut collections = PersistentCollections::load(storage.clone(), StoreOptions::default());
        collections.record_view(make_firm(1));
        assert_eq!(storage.get(RECENT_KEY).unwrap(), None);

        let reloaded = PersistentCollections::load(storage, StoreOptions::default());
        assert!(reloaded.recent().is_empty());
    }

    #[test]
    fn test_recent_persisted_when_enabled() {
        let storage = Arc::new(MemoryStore::new());
        let options = StoreOptions {
            recent_capacity: 5,
            persist_recent: true,
        };
        let mut collections = PersistentCollections::load(storage.clone(), options);
        for id in [1, 2, 1] {
            collections.record_view(make_firm(id));
        }

        let reloaded = PersistentCollections::load(storage, options);
        let ids: Vec<String> = reloaded.recent().iter().map(|f| f.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
