//! Key-value store for the shopping list
//!
//! A simple JSON-based store that persists data to disk. Each group of keys
//! is stored in a separate JSON file under the platform config directory.
//!
//! # Features
//!
//! - Simple get/set/remove operations behind the [`KeyValueStore`] port
//! - Group-based organization, one pretty-printed JSON file per group,
//!   replaced atomically and set aside if it stops parsing
//! - Typed helpers for anything `serde` can encode
//! - An in-memory backend for tests
//!
//! # Example
//!
//! ```no_run
//! use shopping_list_store::{AppName, FileStore, read_value, write_value};
//!
//! let app_name = AppName::new("hu", "gavaller", "Bevasarlolista");
//! let store = FileStore::new(&app_name);
//!
//! write_value(&store, "darkMode", &true)?;
//! let dark: Option<bool> = read_value(&store, "darkMode")?;
//! # Ok::<(), shopping_list_store::StoreError>(())
//! ```

mod app_name;
mod error;
mod helpers;
mod storage;

pub use app_name::{AppName, STORE_DIR_ENV};
pub use error::StoreError;
pub use helpers::{read_value, write_value};
pub use storage::{
    DEFAULT_GROUP, FileStore, Group, KeyValueStore, MemoryStore, backup_path, load_group,
    modify_group, save_group,
};
