//! Caller-owned credential map consulted by the configuration checks.
//!
//! Values arrive already decrypted. The validator only reads them and only
//! cares whether a key holds a truthy value; the secrets themselves never
//! appear in errors or logs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Configuration keys mapped to credential values.
pub struct NetworkConfig {
    values: BTreeMap<String, Value>,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// True when `key` holds something usable.
    ///
    /// Absent keys, `null`, `false`, `0`, and empty strings, arrays or
    /// objects all count as not set.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(is_truthy)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for NetworkConfig
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Read a JSON object of decrypted credentials from disk.
pub fn load_network_config(path: &Path) -> Result<NetworkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading network config {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing network config {}; expected a JSON object", path.display()))
}
