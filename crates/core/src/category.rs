//! Categories and the built-in fallback set

use serde::{Deserialize, Serialize};
use shopping_list_store::{KeyValueStore, read_value, write_value};
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

use crate::error::{ListError, ListResult};
use crate::icon::Icon;

/// Key the category collection is stored under
pub const CATEGORIES_KEY: &str = "categories";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    const fn fixed(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named, iconed grouping of items
///
/// Names are not required to be unique or non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    icon: Icon,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }
}

// Built-ins keep the same ids on every read so a selection survives
// re-evaluating the fallback.
const GROCERIES_ID: CategoryId = CategoryId::fixed(0x5b0c_1e00_0000_4000_8000_0000_0000_0001);
const HOUSEHOLD_ID: CategoryId = CategoryId::fixed(0x5b0c_1e00_0000_4000_8000_0000_0000_0002);
const OTHER_ID: CategoryId = CategoryId::fixed(0x5b0c_1e00_0000_4000_8000_0000_0000_0003);

fn groceries() -> Category {
    Category {
        id: GROCERIES_ID,
        name: "Groceries".to_string(),
        icon: Icon::Cart,
    }
}

/// The categories shown while none have been saved
pub fn builtin_categories() -> Vec<Category> {
    vec![
        groceries(),
        Category {
            id: HOUSEHOLD_ID,
            name: "Household".to_string(),
            icon: Icon::House,
        },
        Category {
            id: OTHER_ID,
            name: "Other".to_string(),
            icon: Icon::Ellipsis,
        },
    ]
}

/// Ordered, persisted collection of categories
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The saved categories, possibly empty
    pub fn persisted(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the built-ins are being shown in place of saved categories
    pub fn is_using_defaults(&self) -> bool {
        self.categories.is_empty()
    }

    /// The categories to show: the saved ones, or the built-ins when none are saved
    ///
    /// Evaluated on every call and never written back.
    pub fn effective_categories(&self) -> Cow<'_, [Category]> {
        if self.categories.is_empty() {
            Cow::Owned(builtin_categories())
        } else {
            Cow::Borrowed(&self.categories)
        }
    }

    /// The first effective category; there is always one
    pub fn first(&self) -> Category {
        self.categories.first().cloned().unwrap_or_else(groceries)
    }

    /// Look up a category among the effective ones
    pub fn find(&self, id: CategoryId) -> Option<Category> {
        self.effective_categories()
            .iter()
            .find(|category| category.id == id)
            .cloned()
    }

    /// Save the built-ins as real categories if nothing is saved yet
    ///
    /// Returns `true` if the defaults were adopted.
    pub fn adopt_defaults(&mut self) -> bool {
        if !self.categories.is_empty() {
            return false;
        }
        self.categories = builtin_categories();
        true
    }

    pub fn add(&mut self, name: &str, icon: Icon) -> &Category {
        self.categories.push(Category::new(name, icon));
        &self.categories[self.categories.len() - 1]
    }

    /// Change the name and/or icon of a saved category
    pub fn update(
        &mut self,
        id: CategoryId,
        name: Option<&str>,
        icon: Option<Icon>,
    ) -> ListResult<&Category> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or(ListError::CategoryNotFound(id))?;

        if let Some(name) = name {
            category.name = name.to_string();
        }
        if let Some(icon) = icon {
            category.icon = icon;
        }
        Ok(category)
    }

    pub fn remove(&mut self, id: CategoryId) -> ListResult<Category> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(ListError::CategoryNotFound(id))?;
        Ok(self.categories.remove(index))
    }

    pub fn try_load(store: &impl KeyValueStore) -> ListResult<Self> {
        let categories = read_value(store, CATEGORIES_KEY)?.unwrap_or_default();
        Ok(Self { categories })
    }

    /// Load the collection, treating any failure as "nothing saved"
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::try_load(store).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load categories, using defaults");
            Self::default()
        })
    }

    pub fn save(&self, store: &impl KeyValueStore) -> ListResult<()> {
        write_value(store, CATEGORIES_KEY, &self.categories)?;
        tracing::debug!(count = self.categories.len(), "saved categories");
        Ok(())
    }
}
