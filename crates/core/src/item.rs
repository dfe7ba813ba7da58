//! Shopping items and the ordered collection holding them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopping_list_store::{KeyValueStore, read_value, write_value};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::error::{ListError, ListResult};

/// Key the item collection is stored under
pub const ITEMS_KEY: &str = "shopping_items";

/// Unique, immutable identifier of an [`Item`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single shopping-list entry
///
/// The category is referenced by name, not by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    done: bool,
    category_name: String,
    created_at: DateTime<Utc>,
}

impl Item {
    fn new(name: String, category_name: String) -> Self {
        Self {
            id: ItemId::new(),
            name,
            done: false,
            category_name,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the item belongs to `category_name` and matches `needle`,
    /// which must already be lowercase
    fn matches(&self, category_name: &str, needle: &str) -> bool {
        self.category_name == category_name
            && (needle.is_empty() || self.name.to_lowercase().contains(needle))
    }
}

/// Trim a user-entered name, rejecting blank input
fn clean_name(name: &str) -> ListResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ListError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Ordered collection of items; insertion order is display order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> ListResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ListError::ItemNotFound(id))
    }

    /// Append a new, not yet done item
    ///
    /// Blank names are rejected and leave the collection untouched.
    pub fn add(&mut self, name: &str, category_name: &str) -> ListResult<&Item> {
        let name = clean_name(name)?;
        self.items.push(Item::new(name, category_name.to_string()));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip the done flag, returning its new value
    pub fn toggle_done(&mut self, id: ItemId) -> ListResult<bool> {
        let item = self.get_mut(id)?;
        item.done = !item.done;
        Ok(item.done)
    }

    pub fn remove(&mut self, id: ItemId) -> ListResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Delete every item matching `predicate`, returning how many went
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Item) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Delete every item
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Change an item's name in place; id, done flag and creation time stay
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> ListResult<&Item> {
        let name = clean_name(new_name)?;
        let item = self.get_mut(id)?;
        item.name = name;
        Ok(item)
    }

    /// Point an item at another category
    pub fn move_to(&mut self, id: ItemId, category_name: &str) -> ListResult<&Item> {
        let item = self.get_mut(id)?;
        item.category_name = category_name.to_string();
        Ok(item)
    }

    /// Re-point every item of category `old` to `new`, returning how many changed
    pub fn rename_category(&mut self, old: &str, new: &str) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| item.category_name == old) {
            item.category_name = new.to_string();
            changed += 1;
        }
        changed
    }

    /// Number of items referencing `category_name`
    pub fn count_in(&self, category_name: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.category_name == category_name)
            .count()
    }

    /// Items of `category_name` whose name contains `search`, ignoring case
    ///
    /// An empty `search` matches every item of the category. Storage order
    /// is kept.
    pub fn filter<'a>(
        &'a self,
        category_name: &'a str,
        search: &'a str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(move |item| item.matches(category_name, &needle))
    }

    /// Load the collection, propagating any storage or decode failure
    pub fn try_load(store: &impl KeyValueStore) -> ListResult<Self> {
        let mut items: Vec<Item> = read_value(store, ITEMS_KEY)?.unwrap_or_default();

        let mut seen = HashSet::with_capacity(items.len());
        items.retain(|item| seen.insert(item.id));
        Ok(Self { items })
    }

    /// Load the collection, treating any failure as an empty list
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::try_load(store).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load items, starting empty");
            Self::default()
        })
    }

    /// Write the whole collection as one JSON snapshot
    pub fn save(&self, store: &impl KeyValueStore) -> ListResult<()> {
        write_value(store, ITEMS_KEY, &self.items)?;
        tracing::debug!(count = self.items.len(), "saved items");
        Ok(())
    }
}
