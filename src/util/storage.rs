//! Per-tab browser storage for the persisted login flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session holder mirrors one `sessionStorage` entry into reactive
//! state. These helpers centralize hydrate-only read/write behavior so state
//! code never repeats web-sys glue; server-side rendering sees no storage
//! and treats every key as absent.
//!
//! Native unit tests (no features) run against a thread-local map instead,
//! so the storage-dependent session semantics stay observable off-browser.
//! Each test thread gets its own tab-like scope.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Handle on the tab's `sessionStorage`, when the browser grants one.
#[cfg(feature = "hydrate")]
fn browser_store() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read the raw value stored under `key`, if any.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = browser_store()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        test_store::read(key)
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, replacing any previous entry.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = browser_store() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        test_store::write(key, value);
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = (key, value);
    }
}

/// Delete the entry under `key` entirely, if present.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = browser_store() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        test_store::remove(key);
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = key;
    }
}

/// In-memory stand-in for `sessionStorage` used by native unit tests.
#[cfg(all(not(feature = "hydrate"), test))]
mod test_store {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
