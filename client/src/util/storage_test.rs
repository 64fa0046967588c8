use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    assert_eq!(storage.len(), 1);

    storage.set("token", "def");
    assert_eq!(storage.get("token").as_deref(), Some("def"));

    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::with_entries([("user", "{}")]);
    storage.remove("token");
    assert_eq!(storage.len(), 1);
}

#[test]
fn arc_storage_delegates_to_inner() {
    let inner = std::sync::Arc::new(MemoryStorage::new());
    let shared = inner.clone();
    shared.set("k", "v");
    assert_eq!(inner.get("k").as_deref(), Some("v"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let storage = BrowserStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}
