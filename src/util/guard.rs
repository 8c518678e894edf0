//! Login guard for the recipe editor routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/pridat` and `/upravit/:id` must only be usable with the tab
//! authenticated. The editor page installs this guard; home and recipe
//! detail never do, so unguarded routes carry no session check at all.
//!
//! DESIGN
//! ======
//! Every navigation that lands on a guarded page first re-synchronizes the
//! in-memory flag from the persisted one and then decides, so a reload
//! mid-session stays on the page while a stale tab bounces to `/`. The
//! decision reads the flag untracked: it belongs to that one navigation,
//! and later state changes do not re-run it. The requested destination is
//! dropped on redirect; there is no return-after-login.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::{Session, SessionState};

/// Whether a guarded navigation must bounce to `/` for this state.
pub(crate) fn should_redirect_home(state: &SessionState) -> bool {
    !state.logged_in
}

/// Install the editor-route login guard on the current page.
///
/// The effect tracks the router's `pathname`, so the check re-runs on every
/// navigation that stays within the guarded routes, including param-only
/// moves like `/upravit/1` to `/upravit/2`.
pub fn install_login_guard<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let navigate = navigate.clone();
    Effect::new(move || {
        let _path = location.pathname.get();
        session.check_session();
        if session.with_untracked(should_redirect_home) {
            navigate("/", NavigateOptions::default());
        }
    });
}
