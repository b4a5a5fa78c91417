use questbag_inventory::{
    AddOutcome, Category, DomainError, Inventory, InventoryConfig, ItemId, ItemRecord,
};

fn item(id: i64, name: &str, category: Category, quantity: i64) -> ItemRecord {
    ItemRecord::new(ItemId::new(id), name, category, quantity)
}

fn snapshot(inv: &Inventory, category: Category) -> Vec<(i64, String, i64)> {
    inv.compartment(category)
        .iter()
        .map(|r| (r.id_typed().get(), r.name().to_string(), r.quantity()))
        .collect()
}

fn stocked() -> Inventory {
    let mut inv = Inventory::from_config(&InventoryConfig { max_capacity: 10 });
    inv.add(item(1, "Sword", Category::Weapon, 1)).unwrap();
    inv.add(item(2, "Shield", Category::Armor, 1)).unwrap();
    inv.add(item(3, "Health Potion", Category::Generic, 5)).unwrap();
    inv.add(item(4, "Bow", Category::Weapon, 1)).unwrap();
    inv
}

#[test]
fn demo_session_end_to_end() {
    questbag_observability::init_for_tests();

    let mut inv = stocked();

    assert_eq!(
        snapshot(&inv, Category::Weapon),
        vec![(1, "Sword".to_string(), 1), (4, "Bow".to_string(), 1)]
    );
    assert_eq!(snapshot(&inv, Category::Armor), vec![(2, "Shield".to_string(), 1)]);
    assert_eq!(
        snapshot(&inv, Category::Generic),
        vec![(3, "Health Potion".to_string(), 5)]
    );

    let removed = inv.remove_by_id(ItemId::new(2)).unwrap();
    assert_eq!(removed.name(), "Shield");
    assert!(inv.compartment(Category::Armor).is_empty());

    assert_eq!(inv.update_quantity(ItemId::new(1), 2).unwrap(), 1);
    assert_eq!(
        snapshot(&inv, Category::Weapon),
        vec![(1, "Sword".to_string(), 2), (4, "Bow".to_string(), 1)]
    );
    assert_eq!(inv.len(), 3);
}

#[test]
fn demo_session_transcript() {
    questbag_observability::init_for_tests();

    let mut inv = stocked();

    let mut out = String::new();
    for name in ["weapons", "armor", "items"] {
        out.push_str(&inv.list_category(name).unwrap().to_string());
    }
    inv.remove_by_id(ItemId::new(2)).unwrap();
    out.push_str(&inv.list_category("armor").unwrap().to_string());
    inv.update_quantity(ItemId::new(1), 2).unwrap();
    out.push_str(&inv.list_category("weapons").unwrap().to_string());

    let expected = "\
Weapons:
Sword (ID: 1) - Quantity: 1
Bow (ID: 4) - Quantity: 1
Armor:
Shield (ID: 2) - Quantity: 1
Items:
Health Potion (ID: 3) - Quantity: 5
Armor:
Weapons:
Sword (ID: 1) - Quantity: 2
Bow (ID: 4) - Quantity: 1
";
    assert_eq!(out, expected);
}

#[test]
fn filling_to_capacity_blocks_further_adds() {
    questbag_observability::init_for_tests();

    let mut inv = Inventory::new(3);
    inv.add(item(1, "Sword", Category::Weapon, 1)).unwrap();
    inv.add(item(1, "Sword", Category::Weapon, 2)).unwrap();
    assert_eq!(inv.len(), 1);

    inv.add(item(2, "Shield", Category::Armor, 1)).unwrap();
    assert!(!inv.is_full());
    inv.add(item(3, "Potion", Category::Generic, 5)).unwrap();
    assert!(inv.is_full());

    let before = inv.clone();

    let new_id = inv.add(item(4, "Bow", Category::Weapon, 1));
    assert!(matches!(new_id, Err(DomainError::CapacityExceeded { capacity: 3, .. })));

    let merge = inv.add(item(1, "Sword", Category::Weapon, 1));
    assert!(matches!(merge, Err(DomainError::CapacityExceeded { .. })));

    assert_eq!(inv, before);
    assert_eq!(inv.find(ItemId::new(1)).unwrap().quantity(), 3);

    // Freeing a slot re-enables both inserts and merges.
    inv.remove_by_id(ItemId::new(2)).unwrap();
    assert_eq!(
        inv.add(item(1, "Sword", Category::Weapon, 1)).unwrap(),
        AddOutcome::Merged { quantity: 4 }
    );
}

#[test]
fn rejections_leave_every_compartment_untouched() {
    questbag_observability::init_for_tests();

    let mut inv = stocked();
    let before = inv.clone();

    assert_eq!(
        inv.remove_by_id(ItemId::new(42)).unwrap_err(),
        DomainError::NotFound(ItemId::new(42))
    );
    assert!(inv.update_quantity(ItemId::new(42), 1).is_err());
    assert!(matches!(
        inv.list_category("Weapons"),
        Err(DomainError::UnknownCategory(name)) if name == "Weapons"
    ));
    assert!(matches!(
        inv.add_tagged(ItemId::new(9), "Gem", "treasure", 1),
        Err(DomainError::UnknownCategory(_))
    ));

    assert_eq!(inv, before);
}
