//! Search input bound to the shared session query.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Text input mirroring the session's `search_query` both ways.
///
/// The query is a plain UI convenience: nothing validates or persists it,
/// and any other consumer may overwrite it.
#[component]
pub fn SearchBar() -> impl IntoView {
    let session = use_session();

    view! {
        <input
            class="search-bar"
            type="search"
            placeholder="Hledat recept..."
            prop:value=move || session.search_query()
            on:input=move |ev| session.set_search_query(&event_target_value(&ev))
        />
    }
}
