use crate::config::CONFIG;
use crate::error::AppError;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};

pub const LOGS_KEY: &str = "mundo_vpn_logs";
pub const USER_KEY: &str = "mundo_vpn_user";

/// Every key the app writes. Clearing touches these and nothing else.
pub const RECORD_KEYS: [&str; 2] = [LOGS_KEY, USER_KEY];

const FILE_EXTENSION: &str = "json";

static STORE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Minimal string key-value capability backing the two persisted records.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = CONFIG.data_dir.clone() {
        return dir;
    }

    if let Some(proj_dirs) = ProjectDirs::from("io", "mundo", "MundoVPN") {
        return proj_dirs.config_dir().to_path_buf();
    }

    std::env::current_dir().unwrap_or_default()
}

/// One JSON document per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn open_default() -> Self {
        Self::new(get_data_dir())
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, FILE_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = STORE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = STORE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = STORE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}

/// Reads `key`, falling back to `default` when it is absent or unreadable.
///
/// A stored value that fails to parse is reported and replaced by the default;
/// the next save overwrites it.
pub fn load_or<T, F>(store: &dyn KeyValueStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key) {
        Ok(Some(contents)) => match serde_json::from_str::<T>(&contents) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse stored '{}': {}. Using defaults.", key, e);
                default()
            }
        },
        Ok(None) => default(),
        Err(e) => {
            error!("Failed to read stored '{}': {}", key, e);
            default()
        }
    }
}

pub fn save<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)
}

pub fn clear_all(store: &dyn KeyValueStore) -> Result<(), AppError> {
    for key in RECORD_KEYS {
        store.remove(key)?;
    }
    info!("Cleared persisted records");
    Ok(())
}
