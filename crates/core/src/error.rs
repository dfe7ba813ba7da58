use shopping_list_store::StoreError;
use thiserror::Error;

use crate::category::CategoryId;
use crate::item::ItemId;

pub type ListResult<T> = Result<T, ListError>;

/// Error type for list operations.
///
/// None of these reach the user; the view layer logs them and carries on
/// as if nothing happened.
#[derive(Debug, Error)]
pub enum ListError {
    /// Item names must contain something besides whitespace.
    #[error("item name is empty")]
    EmptyName,
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    /// Items still point at the category by name.
    #[error("category '{name}' is used by {count} item(s)")]
    CategoryInUse { name: String, count: usize },
    /// Renaming would merge the category's items into another category.
    #[error("another category is already named '{name}'")]
    CategoryNameTaken { name: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}
