use shopping_list_store::{FileStore, KeyValueStore, load_group, read_value, write_value};

#[test]
fn values_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();

    let first = FileStore::at(dir.path());
    write_value(&first, "headerColor", "green").unwrap();
    write_value(&first, "darkMode", &true).unwrap();
    drop(first);

    let second = FileStore::at(dir.path());
    let color: Option<String> = read_value(&second, "headerColor").unwrap();
    let dark: Option<bool> = read_value(&second, "darkMode").unwrap();
    assert_eq!(color.as_deref(), Some("green"));
    assert_eq!(dark, Some(true));

    let mut keys = second.keys().unwrap();
    keys.sort();
    assert_eq!(keys, vec!["darkMode".to_string(), "headerColor".to_string()]);
}

#[test]
fn group_file_maps_keys_to_json_strings() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path());
    write_value(&store, "numbers", &vec![1, 2, 3]).unwrap();

    let group = load_group(&store.group_path()).unwrap();
    assert_eq!(group.get("numbers").map(String::as_str), Some("[1,2,3]"));

    let on_disk = std::fs::read_to_string(store.group_path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert!(parsed["numbers"].is_string());
}
