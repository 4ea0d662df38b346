use reviewcheck::stores::app_store::AppStore;

#[test]
fn test_sheet_state_starts_absent() {
    let store = AppStore::new();
    assert_eq!(store.snapshot().shopping_sheet_expanded, None);
}

#[test]
fn test_set_and_clear_sheet_state() {
    let store = AppStore::new();

    store.set_shopping_sheet_expanded(true);
    assert_eq!(store.snapshot().shopping_sheet_expanded, Some(true));

    store.set_shopping_sheet_expanded(false);
    assert_eq!(store.snapshot().shopping_sheet_expanded, Some(false));

    store.clear_shopping_sheet();
    assert_eq!(store.snapshot().shopping_sheet_expanded, None);
}

#[test]
fn test_subscribers_observe_changes() {
    let store = AppStore::new();
    let mut rx = store.subscribe();
    rx.borrow_and_update();

    store.set_shopping_sheet_expanded(true);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().shopping_sheet_expanded, Some(true));
}

#[test]
fn test_repeated_value_does_not_notify() {
    let store = AppStore::new();
    store.set_shopping_sheet_expanded(true);

    let mut rx = store.subscribe();
    rx.borrow_and_update();

    store.set_shopping_sheet_expanded(true);
    assert!(!rx.has_changed().unwrap());

    store.clear_shopping_sheet();
    store.clear_shopping_sheet();
    assert!(rx.has_changed().unwrap());
}
