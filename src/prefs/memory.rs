use std::collections::HashMap;
use std::sync::Mutex;

use super::{KeyValueStore, PrefsError, Result};

/// Process-local store. `failing()` builds one whose every call errors.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: Mutex<HashMap<String, String>>,
    failing: bool,
}

impl MemoryPrefStore {
    pub fn failing() -> Self {
        Self {
            values: Mutex::default(),
            failing: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(PrefsError::Unavailable("memory store set to fail".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryPrefStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        let values = self
            .values
            .lock()
            .map_err(|e| PrefsError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        let mut values = self
            .values
            .lock()
            .map_err(|e| PrefsError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
