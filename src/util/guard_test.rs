#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::session::{AUTH_KEY, AUTH_PRESENT, restore_persisted};
use crate::util::storage;

/// Run one guarded-navigation check the way the installed effect does:
/// promote from the persisted flag, then decide from the in-memory one.
fn resolve(state: &mut SessionState) -> bool {
    restore_persisted(state);
    should_redirect_home(state)
}

#[test]
fn navigation_without_any_session_redirects_home() {
    storage::remove(AUTH_KEY);
    let mut state = SessionState::default();
    assert!(resolve(&mut state));
    assert!(!state.logged_in);
}

#[test]
fn navigation_with_a_persisted_flag_is_allowed_and_promotes() {
    storage::write(AUTH_KEY, AUTH_PRESENT);
    let mut state = SessionState::default();
    assert!(!resolve(&mut state));
    assert!(state.logged_in, "allowing must promote the in-memory flag");
}

#[test]
fn navigation_with_only_an_in_memory_login_is_allowed() {
    storage::remove(AUTH_KEY);
    let mut state = SessionState {
        logged_in: true,
        ..SessionState::default()
    };
    assert!(!resolve(&mut state));
}

#[test]
fn garbage_persisted_values_do_not_unlock_navigation() {
    let mut state = SessionState::default();
    for value in ["TRUE", "1", "yes", ""] {
        storage::write(AUTH_KEY, value);
        assert!(resolve(&mut state), "value {value:?} must not unlock the editor");
    }
}

#[test]
fn repeated_navigations_re_check_without_caching() {
    storage::remove(AUTH_KEY);
    let mut state = SessionState::default();
    assert!(resolve(&mut state));

    // A login elsewhere in the tab persists the flag; the next navigation
    // must see it even though the previous decision was a redirect.
    storage::write(AUTH_KEY, AUTH_PRESENT);
    assert!(!resolve(&mut state));
}

#[test]
fn should_redirect_home_mirrors_the_flag() {
    let mut state = SessionState::default();
    assert!(should_redirect_home(&state));
    state.logged_in = true;
    assert!(!should_redirect_home(&state));
}
