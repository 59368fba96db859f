use parking_lot::Mutex;
use std::sync::Arc;

use crate::catalog::{self, CatalogSource};
use crate::config::Config;
use crate::session::SearchSession;
use crate::store::kv::{FileStore, KeyValueStore};
use crate::store::PersistentCollections;

/// Shared application state.
///
/// The session lock is only held for synchronous work; catalog fetches run unlocked.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: Arc<Mutex<SearchSession>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_dir())?);
        let source = catalog::from_location(&config.catalog, config.fetch_timeout())?;
        Ok(Self::with_parts(config, source, storage))
    }

    /// Build from explicit collaborators.
    pub fn with_parts(
        config: Config,
        source: Arc<dyn CatalogSource>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let collections = PersistentCollections::load(storage, config.store_options());
        let session = SearchSession::new(source, collections, config.logged_in);
        Self {
            config,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Fetch the catalog once and seed the autosuggest vocabulary. Failure is logged only.
    pub async fn warm_vocabulary(&self) {
        let source = self.session.lock().catalog_source();
        match source.fetch().await {
            Ok(firms) => {
                let mut session = self.session.lock();
                session.load_vocabulary(&firms);
                tracing::info!(
                    "Autosuggest ready: {} industry tags from {} firms",
                    session.vocabulary().len(),
                    firms.len()
                );
            }
            Err(e) => tracing::warn!("Could not load autosuggest vocabulary: {e}"),
        }
    }
}
