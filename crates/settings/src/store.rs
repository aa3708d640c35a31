//! Key-value settings collaborator.

use std::collections::BTreeMap;

use serde_json::Value;

/// Settings store seam. All durable configuration lives behind this trait;
/// this workspace only reads through it.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct InMemorySettings {
    values: BTreeMap<String, Value>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
