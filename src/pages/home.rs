//! Home page listing recipes with shared search and the login controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unguarded landing route, and where a redirected navigation
//! ends up. It fetches the recipe list once on hydration, filters it
//! client-side by the session's shared search query, and hosts the login
//! form that arms the editor routes (plus the sign-out that disarms them).

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::recipe_card::RecipeCard;
use crate::components::search_bar::SearchBar;
use crate::net::types::Recipe;
use crate::state::session::use_session;

/// Case-insensitive name filter over the fetched list.
///
/// A blank or whitespace-only query keeps everything.
fn filter_recipes(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.to_vec();
    }
    recipes
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Home page: the searchable recipe list plus the session controls.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let loading = RwSignal::new(true);

    // Request the list once per mount; re-navigating to `/` re-fetches.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_recipes().await {
                recipes.set(list);
            }
            loading.set(false);
        });
    });

    let filtered = move || filter_recipes(&recipes.get(), &session.search_query());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__title">"Moje kuchařka"</h1>
                <SearchBar/>
                <Show when=move || session.logged_in() fallback=|| view! { <LoginForm/> }>
                    <div class="home-page__actions">
                        <a class="home-page__add" href="/pridat">"Přidat recept"</a>
                        <button class="home-page__logout" on:click=move |_| session.logout()>
                            "Odhlásit"
                        </button>
                    </div>
                </Show>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="home-page__loading">"Načítám..."</p> }
            >
                <div class="home-page__grid">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|recipe| {
                                view! {
                                    <RecipeCard
                                        id=recipe.id
                                        name=recipe.name
                                        category=recipe.category
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
