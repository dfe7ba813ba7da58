//! Preferences for the shopping list
//!
//! Two independent flags, each kept under its own key so that a broken or
//! missing entry only resets that one preference.
//!
//! # Example
//!
//! ```
//! use shopping_list_prefs::{HeaderColor, Preferences};
//! use shopping_list_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut prefs = Preferences::load(&store);
//! assert!(!prefs.dark_mode());
//!
//! prefs.set_header_color(&store, HeaderColor::Green)?;
//! assert_eq!(Preferences::load(&store).header_color(), HeaderColor::Green);
//! # Ok::<(), shopping_list_store::StoreError>(())
//! ```

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use shopping_list_store::{KeyValueStore, StoreError, read_value, write_value};
use std::fmt;

/// Key of the dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";
/// Key of the header color
pub const HEADER_COLOR_KEY: &str = "headerColor";

/// Tint of the list header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderColor {
    #[default]
    None,
    Red,
    Green,
    Orange,
    Purple,
}

impl HeaderColor {
    pub const ALL: [HeaderColor; 5] = [
        HeaderColor::None,
        HeaderColor::Red,
        HeaderColor::Green,
        HeaderColor::Orange,
        HeaderColor::Purple,
    ];
}

impl fmt::Display for HeaderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderColor::None => "None",
            HeaderColor::Red => "Red",
            HeaderColor::Green => "Green",
            HeaderColor::Orange => "Orange",
            HeaderColor::Purple => "Purple",
        };
        f.write_str(name)
    }
}

/// Appearance preferences, read once when the view is built
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    dark_mode: bool,
    header_color: HeaderColor,
}

/// Read one preference, falling back to its default on any failure
fn load_or_default<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match read_value(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring unreadable preference");
            T::default()
        }
    }
}

impl Preferences {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            dark_mode: load_or_default(store, DARK_MODE_KEY),
            header_color: load_or_default(store, HEADER_COLOR_KEY),
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn header_color(&self) -> HeaderColor {
        self.header_color
    }

    /// Change the dark mode flag and persist it
    ///
    /// The in-memory value changes even if writing fails.
    pub fn set_dark_mode(
        &mut self,
        store: &impl KeyValueStore,
        dark_mode: bool,
    ) -> Result<(), StoreError> {
        self.dark_mode = dark_mode;
        write_value(store, DARK_MODE_KEY, &dark_mode)
    }

    /// Change the header color and persist it
    pub fn set_header_color(
        &mut self,
        store: &impl KeyValueStore,
        header_color: HeaderColor,
    ) -> Result<(), StoreError> {
        self.header_color = header_color;
        write_value(store, HEADER_COLOR_KEY, &header_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_store::{FileStore, MemoryStore};

    #[test]
    fn defaults_when_nothing_is_stored() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert!(!prefs.dark_mode());
        assert_eq!(prefs.header_color(), HeaderColor::None);
    }

    #[test]
    fn each_preference_is_its_own_entry() {
        let store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        prefs.set_dark_mode(&store, true).unwrap();
        prefs.set_header_color(&store, HeaderColor::Purple).unwrap();

        assert_eq!(store.get_raw(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(
            store.get_raw(HEADER_COLOR_KEY).unwrap().as_deref(),
            Some("\"purple\"")
        );
    }

    #[test]
    fn broken_entry_only_resets_itself() {
        let store = MemoryStore::new();
        store.set_raw(DARK_MODE_KEY, "true".to_string()).unwrap();
        store
            .set_raw(HEADER_COLOR_KEY, "\"magenta\"".to_string())
            .unwrap();

        let prefs = Preferences::load(&store);
        assert!(prefs.dark_mode());
        assert_eq!(prefs.header_color(), HeaderColor::None);
    }

    #[test]
    fn preferences_persist_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::load(&FileStore::at(dir.path()));
        prefs
            .set_header_color(&FileStore::at(dir.path()), HeaderColor::Orange)
            .unwrap();

        let reloaded = Preferences::load(&FileStore::at(dir.path()));
        assert_eq!(reloaded.header_color(), HeaderColor::Orange);
        assert!(!reloaded.dark_mode());
    }
}
