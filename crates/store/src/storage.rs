//! Storage backends for persisting raw values
//!
//! A store holds string values (JSON documents) under string keys. The
//! filesystem backend keeps one group of keys per JSON file.

use crate::app_name::AppName;
use crate::error::StoreError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of one group: key to JSON-encoded value
pub type Group = BTreeMap<String, String>;

/// Group used when none is given explicitly
pub const DEFAULT_GROUP: &str = "defaults";

/// Storage port for raw values keyed by name
///
/// All calls are synchronous and either complete or fail immediately.
pub trait KeyValueStore {
    /// Load the raw value stored under `key`. Returns `Ok(None)` when missing.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist a raw value under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`. Returns `Ok(true)` if a value was removed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// List the keys currently stored.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

/// Load a group from disk
///
/// Returns an empty group if the file doesn't exist or is empty.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_group(path: &Path) -> Result<Group, StoreError> {
    if !path.exists() {
        return Ok(Group::new());
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(Group::new());
    }

    serde_json::from_str(&contents).map_err(|source| StoreError::ParseGroup {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a group to disk
///
/// Creates the storage directory if it doesn't exist.
/// The data is saved as pretty-printed JSON, written to a sibling `.tmp`
/// file first and renamed over the group file.
pub fn save_group(path: &Path, data: &Group) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let contents =
        serde_json::to_string_pretty(data).map_err(|source| StoreError::EncodeGroup {
            path: path.to_path_buf(),
            source,
        })?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)
}

/// Path a corrupt group file is moved to before it is replaced
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("json.bak")
}

/// Load a group that is about to be rewritten
///
/// A group file that no longer parses is moved to [`backup_path`] and
/// replaced by an empty group, so one bad write cannot block every later one.
fn load_group_for_write(path: &Path) -> Result<Group, StoreError> {
    match load_group(path) {
        Err(StoreError::ParseGroup { source, .. }) => {
            let backup = backup_path(path);
            fs::rename(path, &backup).map_err(|source| StoreError::Write {
                path: backup.clone(),
                source,
            })?;
            tracing::warn!(
                path = %path.display(),
                backup = %backup.display(),
                error = %source,
                "set aside corrupt group file"
            );
            Ok(Group::new())
        }
        other => other,
    }
}

/// Modify a group by loading it, applying a modification function, and saving it back
///
/// The modifier returns `true` if it changed the data; the group is only
/// written in that case. Returns whether the group was modified. A corrupt
/// group file is set aside and the modifier starts from an empty group.
pub fn modify_group<F>(path: &Path, modifier: F) -> Result<bool, StoreError>
where
    F: FnOnce(&mut Group) -> bool,
{
    let mut data = load_group_for_write(path)?;
    let modified = modifier(&mut data);

    if modified {
        save_group(path, &data)?;
    }

    Ok(modified)
}

/// Filesystem store keeping one group in `<dir>/<group>.json`
///
/// Every call goes to disk, so two `FileStore`s over the same file observe
/// each other's writes.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    group: String,
}

impl FileStore {
    /// Create a store in the platform storage directory of `app_name`
    pub fn new(app_name: &AppName) -> Self {
        Self::at(app_name.storage_dir())
    }

    /// Create a store rooted at an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            group: DEFAULT_GROUP.to_string(),
        }
    }

    /// Get the file path of this store's group
    pub fn group_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.group))
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let data = load_group(&self.group_path())?;
        Ok(data.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.group_path();
        modify_group(&path, |data| {
            data.insert(key.to_string(), value);
            true
        })?;
        tracing::trace!(key, path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        modify_group(&self.group_path(), |data| data.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let data = load_group(&self.group_path())?;
        Ok(data.into_keys().collect())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<Group>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.data.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.borrow_mut().remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.borrow().keys().cloned().collect())
    }
}
