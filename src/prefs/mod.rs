//! Local key-value preferences (theme mode)

mod file;
mod memory;

pub use file::FilePrefStore;
pub use memory::MemoryPrefStore;

use std::future::Future;
use thiserror::Error;
use tracing::error;

pub const THEME_KEY: &str = "theme";
const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preferences file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, PrefsError>;

/// Async string get/set store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Persisted theme mode; anything other than `"dark"` (including a read
/// failure) resolves to light.
pub async fn load_dark_mode<S: KeyValueStore>(store: &S) -> bool {
    match store.get(THEME_KEY).await {
        Ok(value) => value.as_deref() == Some(DARK),
        Err(e) => {
            error!("Error loading theme preference: {}", e);
            false
        }
    }
}

pub async fn save_dark_mode<S: KeyValueStore>(store: &S, dark: bool) -> Result<()> {
    store.set(THEME_KEY, theme_value(dark)).await
}

pub fn theme_value(dark: bool) -> &'static str {
    if dark {
        DARK
    } else {
        LIGHT
    }
}
