use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::store::StoreOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where persisted favorites, notes and history live
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Catalog location: an http(s) URL or a local JSON file path
    pub catalog: String,
    /// Catalog fetch timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Number of recently viewed firms kept
    pub recent_capacity: usize,
    /// Keep recently viewed firms across restarts
    pub persist_recent: bool,
    /// Initial state of the login stub
    pub logged_in: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            bind_addr: "127.0.0.1:9100".to_string(),
            catalog: "./data/firms.json".to_string(),
            fetch_timeout_secs: 15,
            recent_capacity: 5,
            persist_recent: false,
            logged_in: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("VC_FINDER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("VC_FINDER_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(catalog) = std::env::var("VC_FINDER_CATALOG") {
            config.catalog = catalog;
        }
        if let Ok(val) = std::env::var("VC_FINDER_FETCH_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.fetch_timeout_secs = v.clamp(1, 60);
            }
        }
        if let Ok(val) = std::env::var("VC_FINDER_RECENT_CAPACITY") {
            if let Ok(v) = val.parse::<usize>() {
                config.recent_capacity = v.max(1);
            }
        }
        if let Ok(val) = std::env::var("VC_FINDER_PERSIST_RECENT") {
            if let Some(v) = parse_flag(&val) {
                config.persist_recent = v;
            }
        }
        if let Ok(val) = std::env::var("VC_FINDER_LOGGED_IN") {
            if let Some(v) = parse_flag(&val) {
                config.logged_in = v;
            }
        }

        config
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join("storage")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            recent_capacity: self.recent_capacity,
            persist_recent: self.persist_recent,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
