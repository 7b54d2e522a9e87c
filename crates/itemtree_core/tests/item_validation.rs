use itemtree_core::{transform_items, Item, ItemService, TreeCapability, TreeError};

fn valid_items() -> Vec<Item> {
    vec![
        Item::new(2, 4, Some(5), "index.tsx"),
        Item::new(5, 2, Some(1), "AssignmentTable"),
        Item::top_level(1, 1, "components"),
        Item::top_level(6, 2, "controllers"),
    ]
}

#[test]
fn validating_valid_collection_never_fails() {
    let service = ItemService::new();
    let items = valid_items();
    service.validate_collection(&items).unwrap();
    service.validate_collection(&items).unwrap();
}

#[test]
fn duplicate_id_fails_until_removed() {
    let service = ItemService::new();
    let mut items = valid_items();
    items.push(Item::top_level(2, 1, "main.tsx"));

    let err = service.validate_collection(&items).unwrap_err();
    assert_eq!(err, TreeError::DuplicateIdentifier(2));
    assert!(err.to_string().contains("duplicate entries"));

    items.pop();
    service.validate_collection(&items).unwrap();
}

#[test]
fn duplicate_id_produces_no_output() {
    let mut items = valid_items();
    items.insert(1, Item::top_level(2, 1, "main.tsx"));
    let err = transform_items(&ItemService::new(), &items).unwrap_err();
    assert!(matches!(err, TreeError::DuplicateIdentifier(2)));
}

#[test]
fn dangling_parent_fails_until_parent_added() {
    let service = ItemService::new();
    let mut items = valid_items();
    items[0].parent = Some(100);

    let err = transform_items(&service, &items).unwrap_err();
    assert_eq!(err, TreeError::DanglingParentReference(100));
    assert!(err.to_string().contains("100"));

    items.push(Item::top_level(100, 9, "src"));
    service.validate_collection(&items).unwrap();
}

#[test]
fn reserved_id_fails_even_when_otherwise_valid() {
    let mut items = valid_items();
    items.push(Item::top_level(0, 3, "root"));

    let err = transform_items(&ItemService::new(), &items).unwrap_err();
    assert_eq!(err, TreeError::ReservedIdentifierUsed);
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn validation_does_not_diagnose_cycles() {
    let items = vec![
        Item::new(1, 1, Some(2), "a"),
        Item::new(2, 1, Some(1), "b"),
    ];
    ItemService::new().validate_collection(&items).unwrap();
}
