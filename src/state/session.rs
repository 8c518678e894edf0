//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! One shared password gates the recipe editor routes. A successful login is
//! remembered for the lifetime of the tab by mirroring a flag into per-tab
//! `sessionStorage`; reloading the page re-promotes the in-memory flag from
//! that entry. The search query rides along here because the home page and
//! the search bar share it across navigations.
//!
//! DESIGN
//! ======
//! The state transitions are plain functions over `SessionState` so the
//! exact login/restore/logout semantics stay testable without a reactive
//! runtime. The [`Session`] handle is thin signal glue over them,
//! constructed once in `App` and passed to components through context
//! rather than living in a hidden global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// `sessionStorage` key holding the persisted login flag.
pub const AUTH_KEY: &str = "auth";
/// Literal stored value marking an authenticated tab session. Anything else
/// under [`AUTH_KEY`] is treated as absent.
pub const AUTH_PRESENT: &str = "true";

/// Password baked in at compile time through `COOKBOOK_PASSWORD`.
///
/// `None` when the build did not provide one, in which case login can never
/// succeed.
fn configured_password() -> Option<&'static str> {
    option_env!("COOKBOOK_PASSWORD")
}

/// Authentication flag and search query for the current tab.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Whether a valid password has been presented this tab session.
    pub logged_in: bool,
    /// Current recipe search text; any consumer may read or write it.
    pub search_query: String,
}

/// Attempt a login against the configured password.
///
/// On a match the in-memory flag is set and the persisted flag written; on a
/// mismatch nothing changes anywhere. Returns whether the attempt succeeded.
pub(crate) fn attempt_login(
    state: &mut SessionState,
    password: &str,
    configured: Option<&str>,
) -> bool {
    let accepted = configured.is_some_and(|secret| password == secret);
    if accepted {
        state.logged_in = true;
        storage::write(AUTH_KEY, AUTH_PRESENT);
    }
    accepted
}

/// Promote the in-memory flag from the persisted one.
///
/// Only the literal [`AUTH_PRESENT`] restores a session; anything else
/// leaves the flag exactly as it was. This never demotes an already
/// logged-in state, even when the persisted entry has meanwhile vanished.
pub(crate) fn restore_persisted(state: &mut SessionState) {
    if storage::read(AUTH_KEY).as_deref() == Some(AUTH_PRESENT) {
        state.logged_in = true;
    }
}

/// Drop the login: clear the in-memory flag and delete the persisted entry.
pub(crate) fn clear_login(state: &mut SessionState) {
    state.logged_in = false;
    storage::remove(AUTH_KEY);
}

/// Copyable handle over the tab's session state.
///
/// `App` constructs exactly one and provides it through context; components
/// fetch it with [`use_session`]. All operations are synchronous and none of
/// them can fail; `login` reports rejection through its return value.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Fresh handle: logged out, empty search query.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Compare `password` to the configured secret.
    ///
    /// A match marks the tab authenticated (memory and storage) and returns
    /// true; a mismatch changes nothing and returns false. Callers may retry
    /// any number of times.
    pub fn login(&self, password: &str) -> bool {
        self.state
            .try_update(|state| attempt_login(state, password, configured_password()))
            .unwrap_or(false)
    }

    /// Re-read the persisted flag, promoting the in-memory flag when it is
    /// present. Never demotes.
    pub fn check_session(&self) {
        self.state.update(restore_persisted);
    }

    /// Log out: reset the in-memory flag and remove the persisted entry.
    pub fn logout(&self) {
        self.state.update(clear_login);
    }

    /// Reactive read of the login flag.
    pub fn logged_in(&self) -> bool {
        self.state.with(|state| state.logged_in)
    }

    /// Read the state without subscribing, for navigation-scoped decisions.
    pub fn with_untracked<U>(&self, f: impl FnOnce(&SessionState) -> U) -> U {
        self.state.with_untracked(f)
    }

    /// Reactive read of the shared search query.
    pub fn search_query(&self) -> String {
        self.state.with(|state| state.search_query.clone())
    }

    /// Replace the shared search query.
    pub fn set_search_query(&self, query: &str) {
        self.state.update(|state| query.clone_into(&mut state.search_query));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
