//! Shopping list core
//!
//! The ordered item and category collections behind the shopping list,
//! their filters, and their JSON snapshots in a
//! [`KeyValueStore`](shopping_list_store::KeyValueStore).
//!
//! # Example
//!
//! ```
//! use shopping_list_core::ShoppingList;
//! use shopping_list_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut list = ShoppingList::load(&store);
//!
//! let id = list.items_mut().add("Milk", "Groceries")?.id();
//! list.items_mut().toggle_done(id)?;
//! list.save(&store)?;
//!
//! let found: Vec<_> = list.items().filter("Groceries", "milk").collect();
//! assert_eq!(found.len(), 1);
//! # Ok::<(), shopping_list_core::ListError>(())
//! ```

mod category;
mod error;
mod icon;
mod item;
mod list;

pub use category::{CATEGORIES_KEY, Category, CategoryId, CategoryStore, builtin_categories};
pub use error::{ListError, ListResult};
pub use icon::Icon;
pub use item::{ITEMS_KEY, Item, ItemId, ItemStore};
pub use list::ShoppingList;
