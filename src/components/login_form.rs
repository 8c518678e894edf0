//! Password form arming the editor routes.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Single-password login form.
///
/// Submits against [`crate::state::session::Session::login`]; a rejected
/// password shows an inline message and leaves the session untouched, so
/// the user may simply try again.
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let password = RwSignal::new(String::new());
    let rejected = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = session.login(&password.get());
        rejected.set(!accepted);
        if accepted {
            password.set(String::new());
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-form__password"
                type="password"
                placeholder="Heslo"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="login-form__submit" type="submit">"Přihlásit"</button>
            <Show when=move || rejected.get()>
                <span class="login-form__error">"Špatné heslo."</span>
            </Show>
        </form>
    }
}
