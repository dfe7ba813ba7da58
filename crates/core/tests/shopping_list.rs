use shopping_list_core::{Icon, ItemStore, ShoppingList, builtin_categories};
use shopping_list_store::{FileStore, KeyValueStore, MemoryStore, backup_path};

#[test]
fn milk_in_groceries() {
    let mut items = ItemStore::new();

    let milk = items.add("Milk", "Groceries").unwrap().id();
    assert_eq!(items.len(), 1);
    assert!(!items.items()[0].is_done());
    assert_eq!(items.items()[0].category_name(), "Groceries");

    assert!(items.toggle_done(milk).unwrap());
    assert!(items.items()[0].is_done());

    let found: Vec<_> = items.filter("Groceries", "milk").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), milk);

    assert_eq!(items.filter("Household", "").count(), 0);

    items.remove(milk).unwrap();
    assert!(items.is_empty());
}

#[test]
fn every_valid_add_grows_by_one() {
    let mut items = ItemStore::new();
    for (n, name) in ["Milk", " eggs", "Bread ", "x"].into_iter().enumerate() {
        let added = items.add(name, "Groceries").unwrap();
        assert!(!added.is_done());
        assert_eq!(items.len(), n + 1);
    }
}

#[test]
fn list_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut list = ShoppingList::load(&FileStore::at(dir.path()));
    assert_eq!(
        list.categories().effective_categories().as_ref(),
        builtin_categories().as_slice()
    );

    let pets = list.add_category("Pets", Icon::Star);
    let food = list.items_mut().add("Cat food", "Pets").unwrap().id();
    list.items_mut().add("Soap", "Household").unwrap();
    list.items_mut().toggle_done(food).unwrap();
    list.save(&FileStore::at(dir.path())).unwrap();

    let reloaded = ShoppingList::load(&FileStore::at(dir.path()));
    assert_eq!(reloaded, list);
    assert_eq!(
        reloaded.categories().find(pets).map(|c| c.name().to_string()),
        Some("Pets".to_string())
    );
    assert!(reloaded.items().get(food).unwrap().is_done());
}

#[test]
fn corrupt_group_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    std::fs::write(store.group_path(), "this is not json").unwrap();

    let list = ShoppingList::load(&store);
    assert!(list.items().is_empty());
    assert!(list.categories().is_using_defaults());
}

#[test]
fn saving_after_a_corrupt_group_file_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    std::fs::write(store.group_path(), "this is not json").unwrap();

    let mut list = ShoppingList::load(&store);
    list.items_mut().add("Milk", "Groceries").unwrap();
    list.items().save(&store).unwrap();

    let reloaded = ShoppingList::load(&FileStore::at(dir.path()));
    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items().items()[0].name(), "Milk");
    assert!(backup_path(&store.group_path()).exists());
}

#[test]
fn category_rename_cascades_through_storage() {
    let store = MemoryStore::new();
    let mut list = ShoppingList::load(&store);
    list.items_mut().add("Milk", "Groceries").unwrap();

    let groceries = list.categories().effective_categories()[0].id();
    list.rename_category(groceries, "Food").unwrap();
    list.save(&store).unwrap();

    let reloaded = ShoppingList::load(&store);
    assert_eq!(reloaded.items().filter("Food", "").count(), 1);
    assert_eq!(reloaded.items().filter("Groceries", "").count(), 0);
    assert!(store.keys().unwrap().contains(&"categories".to_string()));
}
