//! Recipe detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unguarded read-only view of one recipe. Logged-in tabs additionally get
//! an edit link into the guarded editor; the link is cosmetic, and the
//! editor route re-checks the session itself on arrival.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Recipe;
use crate::state::session::use_session;

/// Detail page: fetches the routed recipe and renders it.
#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let recipe = RwSignal::new(None::<Recipe>);
    let loading = RwSignal::new(true);

    let recipe_id = move || params.read().get("id");

    // Fetch whenever the routed id changes.
    Effect::new(move || {
        let Some(id) = recipe_id() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            recipe.set(crate::net::api::fetch_recipe(&id).await);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="recipe-detail">
            <a class="recipe-detail__back" href="/">"Zpět na přehled"</a>
            {move || match recipe.get() {
                Some(found) => render_recipe(found, session.logged_in()).into_any(),
                None => view! {
                    <p class="recipe-detail__empty">
                        {move || if loading.get() { "Načítám..." } else { "Recept nenalezen." }}
                    </p>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Render one fetched recipe; `can_edit` adds the editor link.
fn render_recipe(recipe: Recipe, can_edit: bool) -> impl IntoView {
    let edit_href = format!("/upravit/{}", recipe.id);

    view! {
        <article class="recipe-detail__body">
            <h1 class="recipe-detail__name">{recipe.name}</h1>
            <Show when=move || can_edit>
                <a class="recipe-detail__edit" href=edit_href.clone()>"Upravit"</a>
            </Show>
            {(!recipe.category.is_empty())
                .then(|| {
                    view! { <p class="recipe-detail__category">{recipe.category.clone()}</p> }
                })}
            {recipe
                .image_url
                .map(|url| view! { <img class="recipe-detail__photo" src=url alt=""/> })}
            <h2>"Suroviny"</h2>
            <ul class="recipe-detail__ingredients">
                {recipe
                    .ingredients
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect_view()}
            </ul>
            <h2>"Postup"</h2>
            <ol class="recipe-detail__steps">
                {recipe
                    .steps
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect_view()}
            </ol>
        </article>
    }
}
