use crate::PluginSet;

#[test]
fn test_duplicates_collapse_on_deserialize() {
    let set: PluginSet =
        serde_json::from_str(r#"["Vault", "WorldEdit", "Vault", "LuckPerms"]"#).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec!["Vault", "WorldEdit", "LuckPerms"]
    );
}

#[test]
fn test_toggle_twice_restores_original_contents() {
    let original = PluginSet::from_iter(["EssentialsX", "Vault"]);

    for name in ["Vault", "CoreProtect"] {
        let mut set = original.clone();
        set.toggle(name);
        set.toggle(name);
        assert!(set.iter().all(|n| original.contains(n)));
        assert_eq!(set.len(), original.len());
    }
}

#[test]
fn test_toggle_reports_membership() {
    let mut set = PluginSet::new();
    assert!(set.toggle("WorldEdit"));
    assert!(set.contains("WorldEdit"));
    assert!(!set.toggle("WorldEdit"));
    assert!(set.is_empty());
}

#[test]
fn test_insert_existing_is_noop() {
    let mut set = PluginSet::from_iter(["Vault"]);
    assert!(!set.insert("Vault"));
    assert_eq!(set.len(), 1);
}
