//! Typed helpers over any [`KeyValueStore`]
//!
//! Values are stored as JSON documents, so anything implementing
//! `Serialize`/`DeserializeOwned` can be kept under a key.

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use serde::{Serialize, de::DeserializeOwned};

/// Read a value from the store
///
/// Returns `Ok(None)` when the key is missing or holds an empty string.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the value cannot be
/// deserialized.
///
/// # Example
///
/// ```
/// use shopping_list_store::{MemoryStore, read_value, write_value};
///
/// let store = MemoryStore::new();
/// write_value(&store, "darkMode", &true).unwrap();
/// let dark: Option<bool> = read_value(&store, "darkMode").unwrap();
/// assert_eq!(dark, Some(true));
/// ```
pub fn read_value<T>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get_raw(key)? else {
        return Ok(None);
    };

    if raw.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })
}

/// Write a value to the store
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the store cannot be written.
pub fn write_value<T>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let json_value = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;

    store.set_raw(key, json_value)
}
