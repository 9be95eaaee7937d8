//! Server configuration shared by everything that talks to the backend.
//!
//! Filled once from the configuration service, then read. Single-threaded,
//! so interior mutability via RefCell is enough; clones share the map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use viewer_types::service::{ConfigEntry, ConfigRecord};

pub const PROXY_PATH_KEY: &str = "server_proxy_path";
pub const COLOR_MAP_PATH_KEY: &str = "colour_map_path";

#[derive(Clone)]
pub struct ConfigurationService {
    entries: Rc<RefCell<HashMap<String, ConfigEntry>>>,
    default_proxy_path: Rc<str>,
}

impl ConfigurationService {
    pub fn new(default_proxy_path: &str) -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            default_proxy_path: Rc::from(default_proxy_path),
        }
    }

    /// Store all usable records and return how many were stored.
    pub fn populate(&self, records: Vec<ConfigRecord>) -> usize {
        let mut entries = self.entries.borrow_mut();
        let mut stored = 0;
        for (name, entry) in records.into_iter().filter_map(ConfigRecord::into_entry) {
            entries.insert(name, entry);
            stored += 1;
        }
        stored
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).map(|e| e.value.clone())
    }

    /// URL segment that prefixes every backend service call
    pub fn proxy_path(&self) -> String {
        self.value(PROXY_PATH_KEY)
            .map(|p| p.trim_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.default_proxy_path.to_string())
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<(String, ConfigEntry)> {
        let mut all: Vec<_> = self
            .entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
