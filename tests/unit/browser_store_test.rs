use reviewcheck::services::product_classifier::ProductPageClassifier;
use reviewcheck::stores::browser_store::BrowserStore;

const PRODUCT_URL: &str = "https://www.amazon.com/dp/B09TEST";
const ARTICLE_URL: &str = "https://example.com/article";

fn store() -> BrowserStore {
    BrowserStore::new(ProductPageClassifier::default())
}

#[test]
fn test_create_tab_returns_unique_ids() {
    let store = store();
    let id1 = store.create_tab(None, true);
    let id2 = store.create_tab(None, false);
    assert_ne!(id1, id2);
    assert_eq!(store.tab_count(), 2);
}

#[test]
fn test_first_tab_selected_even_when_not_requested() {
    let store = store();
    let id = store.create_tab(Some(ARTICLE_URL), false);
    assert_eq!(store.snapshot().selected_tab_id, Some(id));
}

#[test]
fn test_create_tab_default_url_is_not_product() {
    let store = store();
    let id = store.create_tab(None, true);
    let snapshot = store.snapshot();
    let tab = snapshot.selected_tab().unwrap();
    assert_eq!(tab.id, id);
    assert_eq!(tab.url, "about:blank");
    assert!(!tab.is_product_url);
    assert!(!tab.loading);
}

#[test]
fn test_create_tab_classifies_product_url() {
    let store = store();
    store.create_tab(Some(PRODUCT_URL), true);
    assert!(store.snapshot().selected_tab().unwrap().is_product_url);
}

#[test]
fn test_update_tab_url_reclassifies_both_directions() {
    let store = store();
    let id = store.create_tab(Some(ARTICLE_URL), true);
    assert!(!store.snapshot().selected_tab().unwrap().is_product_url);

    store.update_tab_url(&id, PRODUCT_URL).unwrap();
    assert!(store.snapshot().selected_tab().unwrap().is_product_url);

    store.update_tab_url(&id, ARTICLE_URL).unwrap();
    assert!(!store.snapshot().selected_tab().unwrap().is_product_url);
}

#[test]
fn test_close_selected_tab_switches_to_neighbor() {
    let store = store();
    let id1 = store.create_tab(None, true);
    let id2 = store.create_tab(None, true);
    let id3 = store.create_tab(None, false);

    store.close_tab(&id2).unwrap();
    let selected = store.snapshot().selected_tab_id.unwrap();
    assert!(selected == id1 || selected == id3);
    assert_eq!(store.tab_count(), 2);
}

#[test]
fn test_close_last_tab_leaves_no_selection() {
    let store = store();
    let id = store.create_tab(None, true);
    store.close_tab(&id).unwrap();
    assert_eq!(store.tab_count(), 0);
    assert!(store.snapshot().selected_tab_id.is_none());
    assert!(store.snapshot().selected_tab().is_none());
}

#[test]
fn test_close_unselected_tab_keeps_selection() {
    let store = store();
    let id1 = store.create_tab(None, true);
    let id2 = store.create_tab(None, false);
    store.close_tab(&id2).unwrap();
    assert_eq!(store.snapshot().selected_tab_id, Some(id1));
}

#[test]
fn test_operations_on_unknown_tab_return_error() {
    let store = store();
    store.create_tab(None, true);
    assert!(store.close_tab("nonexistent").is_err());
    assert!(store.select_tab("nonexistent").is_err());
    assert!(store.update_tab_url("nonexistent", ARTICLE_URL).is_err());
    assert!(store.set_tab_loading("nonexistent", true).is_err());
}

#[test]
fn test_select_tab() {
    let store = store();
    let id1 = store.create_tab(None, true);
    let id2 = store.create_tab(None, false);
    assert_eq!(store.snapshot().selected_tab_id, Some(id1));

    store.select_tab(&id2).unwrap();
    assert_eq!(store.snapshot().selected_tab_id, Some(id2));
}

#[test]
fn test_subscribers_observe_mutations() {
    let store = store();
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().tabs.is_empty());

    let id = store.create_tab(Some(PRODUCT_URL), true);
    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.tabs.len(), 1);
    assert_eq!(snapshot.selected_tab_id, Some(id));
}

#[test]
fn test_noop_mutations_do_not_notify() {
    let store = store();
    let id = store.create_tab(Some(PRODUCT_URL), true);

    let mut rx = store.subscribe();
    rx.borrow_and_update();

    // Already not loading, already this URL, already selected.
    store.set_tab_loading(&id, false).unwrap();
    store.update_tab_url(&id, PRODUCT_URL).unwrap();
    store.select_tab(&id).unwrap();
    assert!(!rx.has_changed().unwrap());

    store.set_tab_loading(&id, true).unwrap();
    assert!(rx.has_changed().unwrap());
}
