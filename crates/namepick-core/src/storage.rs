//! Group persistence (load/save of the whole group mapping).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::PickerError;
use crate::group::GroupMap;

const STORE_FILENAME: &str = "groups.json";
const CONFIG_DIR_NAME: &str = "namepick";

/// Storage service for the group mapping.
///
/// Every mutation rewrites the whole mapping, so implementations only need
/// whole-value load and save.
pub trait GroupStore: Send + Sync {
    /// Load all groups. Missing or unreadable data yields an empty mapping.
    fn load(&self) -> GroupMap;

    /// Replace the stored mapping.
    fn save(&self, groups: &GroupMap) -> Result<(), PickerError>;
}

/// In-memory store. Clones share the same mapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    groups: Arc<Mutex<GroupMap>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `groups`.
    #[must_use]
    pub fn with_groups(groups: GroupMap) -> Self {
        Self {
            groups: Arc::new(Mutex::new(groups)),
        }
    }

    /// Copy of the currently stored mapping.
    #[must_use]
    pub fn snapshot(&self) -> GroupMap {
        self.groups.lock().clone()
    }
}

impl GroupStore for MemoryStore {
    fn load(&self) -> GroupMap {
        self.snapshot()
    }

    fn save(&self, groups: &GroupMap) -> Result<(), PickerError> {
        *self.groups.lock() = groups.clone();
        Ok(())
    }
}

/// JSON file store: a single object mapping group name to member list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location (see [`default_store_path`]).
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(default_store_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GroupStore for JsonFileStore {
    fn load(&self) -> GroupMap {
        load_from_path(&self.path)
    }

    fn save(&self, groups: &GroupMap) -> Result<(), PickerError> {
        save_to_path(groups, &self.path)
    }
}

/// Load a group mapping from `path`. Missing or corrupt files load as empty.
#[must_use]
pub fn load_from_path(path: &Path) -> GroupMap {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return GroupMap::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "cannot read group store, starting empty");
            return GroupMap::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(groups) => groups,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "corrupt group store, starting empty");
            GroupMap::new()
        }
    }
}

/// Write a group mapping to `path`, replacing the previous file in one rename.
pub fn save_to_path(groups: &GroupMap, path: &Path) -> Result<(), PickerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(groups)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), groups = groups.len(), "group store saved");
    Ok(())
}

/// Standard store location.
///
/// Uses `$XDG_CONFIG_HOME/namepick/groups.json`, then `~/.config/namepick/groups.json`,
/// and finally `.namepick_groups.json` in the working directory.
#[must_use]
pub fn default_store_path() -> PathBuf {
    xdg_store_path().unwrap_or_else(cwd_store_path)
}

fn xdg_store_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(STORE_FILENAME))
}

fn cwd_store_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{CONFIG_DIR_NAME}_{STORE_FILENAME}"))
}
