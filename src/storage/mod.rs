pub mod json_file;
pub mod memory;

use serde_json::Value;

use crate::errors::Result;

/// Synchronous key/value persistence for user preferences.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Returns the stored value or `default` when nothing was written yet.
    fn get_or(&self, key: &str, default: Value) -> Result<Value> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
