//! Items and categories together, with the rules that span both
//!
//! Items point at categories by name. Renaming a category carries its items
//! along, and a category cannot be removed while items still point at it.

use shopping_list_store::KeyValueStore;

use crate::category::{Category, CategoryId, CategoryStore};
use crate::error::{ListError, ListResult};
use crate::icon::Icon;
use crate::item::ItemStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShoppingList {
    items: ItemStore,
    categories: CategoryStore,
}

impl ShoppingList {
    /// Load both collections; each falls back independently on failure
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            items: ItemStore::load(store),
            categories: CategoryStore::load(store),
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> ListResult<()> {
        self.items.save(store)?;
        self.categories.save(store)
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemStore {
        &mut self.items
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    /// Whether some other effective category carries the same name as `id`
    fn name_is_shared(&self, id: CategoryId, name: &str) -> bool {
        self.categories
            .effective_categories()
            .iter()
            .any(|category| category.id() != id && category.name() == name)
    }

    fn existing(&self, id: CategoryId) -> ListResult<Category> {
        self.categories
            .find(id)
            .ok_or(ListError::CategoryNotFound(id))
    }

    pub fn add_category(&mut self, name: &str, icon: Icon) -> CategoryId {
        self.categories.adopt_defaults();
        self.categories.add(name, icon).id()
    }

    /// Rename a category and move its items along
    ///
    /// Items stay where they are when another category still has the old
    /// name, since they cannot be told apart. Returns how many items moved.
    ///
    /// Fails with [`ListError::CategoryNameTaken`] when the items would move
    /// to a name another category already uses; they could not be moved
    /// back out afterwards.
    pub fn rename_category(&mut self, id: CategoryId, name: &str) -> ListResult<usize> {
        let old = self.existing(id)?;
        if old.name() == name {
            return Ok(0);
        }

        let shared = self.name_is_shared(id, old.name());
        if !shared && self.items.count_in(old.name()) > 0 && self.name_is_shared(id, name) {
            return Err(ListError::CategoryNameTaken {
                name: name.to_string(),
            });
        }
        self.categories.adopt_defaults();
        self.categories.update(id, Some(name), None)?;

        if shared {
            return Ok(0);
        }
        let moved = self.items.rename_category(old.name(), name);
        tracing::debug!(from = old.name(), to = name, moved, "renamed category");
        Ok(moved)
    }

    pub fn set_category_icon(&mut self, id: CategoryId, icon: Icon) -> ListResult<()> {
        self.existing(id)?;
        self.categories.adopt_defaults();
        self.categories.update(id, None, Some(icon))?;
        Ok(())
    }

    /// Number of items that keep category `id` from being removed
    pub fn blocking_items(&self, id: CategoryId) -> usize {
        match self.categories.find(id) {
            Some(category) if !self.name_is_shared(id, category.name()) => {
                self.items.count_in(category.name())
            }
            _ => 0,
        }
    }

    /// Remove a category nothing else depends on
    ///
    /// Fails with [`ListError::CategoryInUse`] while items point at it.
    pub fn remove_category(&mut self, id: CategoryId) -> ListResult<Category> {
        let category = self.existing(id)?;
        let count = self.blocking_items(id);
        if count > 0 {
            return Err(ListError::CategoryInUse {
                name: category.name().to_string(),
                count,
            });
        }

        self.categories.adopt_defaults();
        self.categories.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_store::MemoryStore;

    fn groceries_id(list: &ShoppingList) -> CategoryId {
        list.categories().effective_categories()[0].id()
    }

    #[test]
    fn renaming_a_builtin_adopts_defaults_and_moves_items() {
        let mut list = ShoppingList::default();
        list.items_mut().add("Milk", "Groceries").unwrap();
        let id = groceries_id(&list);

        assert_eq!(list.rename_category(id, "Food").unwrap(), 1);
        assert_eq!(list.categories().persisted().len(), 3);
        assert_eq!(list.categories().persisted()[0].name(), "Food");
        assert_eq!(list.items().items()[0].category_name(), "Food");
    }

    #[test]
    fn typing_through_another_categorys_name_keeps_items() {
        let mut list = ShoppingList::default();
        list.items_mut().add("Milk", "Groceries").unwrap();
        let id = groceries_id(&list);

        for name in ["O", "Ot", "Oth", "Othe", "Other", "Other2"] {
            let _ = list.rename_category(id, name);
        }

        assert_eq!(list.categories().find(id).unwrap().name(), "Other2");
        assert_eq!(list.items().items()[0].category_name(), "Other2");
        assert_eq!(list.items().count_in("Other"), 0);
    }

    #[test]
    fn rename_into_a_used_name_is_refused() {
        let mut list = ShoppingList::default();
        list.items_mut().add("Milk", "Groceries").unwrap();
        let id = groceries_id(&list);

        assert!(matches!(
            list.rename_category(id, "Household"),
            Err(ListError::CategoryNameTaken { name }) if name == "Household"
        ));
        assert_eq!(list.categories().find(id).unwrap().name(), "Groceries");
        assert!(list.categories().is_using_defaults());
    }

    #[test]
    fn empty_category_may_take_a_used_name() {
        let mut list = ShoppingList::default();
        let id = groceries_id(&list);
        assert_eq!(list.rename_category(id, "Household").unwrap(), 0);
        assert_eq!(list.categories().persisted()[0].name(), "Household");
    }

    #[test]
    fn rename_leaves_items_when_name_is_shared() {
        let mut list = ShoppingList::default();
        let first = list.add_category("Food", Icon::Cart);
        list.add_category("Food", Icon::Leaf);
        list.items_mut().add("Milk", "Food").unwrap();

        assert_eq!(list.rename_category(first, "Dairy").unwrap(), 0);
        assert_eq!(list.items().items()[0].category_name(), "Food");
    }

    #[test]
    fn removal_is_blocked_while_items_reference_category() {
        let mut list = ShoppingList::default();
        list.items_mut().add("Milk", "Groceries").unwrap();
        let id = groceries_id(&list);

        assert_eq!(list.blocking_items(id), 1);
        assert!(matches!(
            list.remove_category(id),
            Err(ListError::CategoryInUse { count: 1, .. })
        ));
        assert!(list.categories().is_using_defaults());

        let item = list.items().items()[0].id();
        list.items_mut().remove(item).unwrap();
        list.remove_category(id).unwrap();
        let remaining: Vec<_> = list
            .categories()
            .effective_categories()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(remaining, ["Household", "Other"]);
    }

    #[test]
    fn duplicate_name_does_not_block_removal() {
        let mut list = ShoppingList::default();
        let first = list.add_category("Food", Icon::Cart);
        list.add_category("Food", Icon::Leaf);
        list.items_mut().add("Milk", "Food").unwrap();

        list.remove_category(first).unwrap();
        assert_eq!(list.categories().persisted().len(), 4);
    }

    #[test]
    fn icon_change_on_unknown_category_is_not_found() {
        let mut list = ShoppingList::default();
        assert!(matches!(
            list.set_category_icon(CategoryId::new(), Icon::Star),
            Err(ListError::CategoryNotFound(_))
        ));
        assert!(list.categories().is_using_defaults());
    }

    #[test]
    fn save_and_load_both_collections() {
        let kv = MemoryStore::new();
        let mut list = ShoppingList::default();
        list.add_category("Pets", Icon::Star);
        list.items_mut().add("Cat food", "Pets").unwrap();
        list.save(&kv).unwrap();

        assert_eq!(ShoppingList::load(&kv), list);
    }
}
