use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::{
    errors::{Result, SwitcherError},
    utils::persistence::save_json_atomic,
};

/// Stores every key in a single JSON object on disk.
///
/// The file is read once on open and rewritten in full on each `set`. A value
/// only becomes visible through `get` once the rewrite has succeeded.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let data = fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&data)? {
                    Value::Object(map) => map,
                    other => {
                        return Err(SwitcherError::Storage(format!(
                            "expected a JSON object in {}, found {}",
                            path.display(),
                            kind_of(&other)
                        )))
                    }
                }
            }
        } else {
            Map::new()
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened preference store");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value);
        save_json_atomic(&next, &self.path)?;
        self.values = next;
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
