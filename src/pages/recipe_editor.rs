//! Recipe editor page serving both the create and edit routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/pridat` mounts this page with no route param; `/upravit/:id` mounts it
//! with one. Both are login-gated twice over: the route guard re-checks the
//! persisted flag on every navigation here and bounces logged-out tabs to
//! `/`, and the form itself renders only for an authenticated session, so a
//! server render or a paint before the check shows a placeholder instead of
//! a usable editor.

#[cfg(test)]
#[path = "recipe_editor_test.rs"]
mod recipe_editor_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::RecipeDraft;
use crate::state::session::use_session;
use crate::util::guard::install_login_guard;

/// Split textarea input into trimmed, non-empty lines.
fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Build the submission payload from raw form input.
///
/// The only hard requirement is a non-blank name; everything else is
/// tidied (trimmed, blank lines dropped, blank URL submitted as absent).
fn build_draft(
    name: &str,
    category: &str,
    image_url: &str,
    ingredients: &str,
    steps: &str,
) -> Result<RecipeDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Zadej název receptu.");
    }
    let image_url = image_url.trim();
    Ok(RecipeDraft {
        name: name.to_owned(),
        category: category.trim().to_owned(),
        image_url: (!image_url.is_empty()).then(|| image_url.to_owned()),
        ingredients: parse_lines(ingredients),
        steps: parse_lines(steps),
    })
}

/// Editor page: create (`/pridat`) and edit (`/upravit/:id`) modes.
///
/// The form mounts only once the session flag is set; until then the page
/// holds a placeholder while the guard resolves the navigation.
#[component]
pub fn RecipeEditorPage() -> impl IntoView {
    let session = use_session();
    install_login_guard(session, use_navigate());

    view! {
        <Show
            when=move || session.logged_in()
            fallback=|| {
                view! {
                    <div class="recipe-editor">
                        <p class="recipe-editor__pending">"Ověřuji přihlášení..."</p>
                    </div>
                }
            }
        >
            <EditorForm/>
        </Show>
    }
}

/// Form body, mounted only for an authenticated session.
#[component]
fn EditorForm() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = move || params.read().get("id");

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let ingredients = RwSignal::new(String::new());
    let steps = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Edit mode: load the routed recipe into the form, once per id.
    let loaded_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(id) = recipe_id() else {
            return;
        };
        if loaded_id.get().as_deref() == Some(id.as_str()) {
            return;
        }
        loaded_id.set(Some(id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(recipe) = crate::net::api::fetch_recipe(&id).await {
                name.set(recipe.name);
                category.set(recipe.category);
                image_url.set(recipe.image_url.unwrap_or_default());
                ingredients.set(recipe.ingredients.join("\n"));
                steps.set(recipe.steps.join("\n"));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let navigate_after_save = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match build_draft(
            &name.get(),
            &category.get(),
            &image_url.get(),
            &ingredients.get(),
            &steps.get(),
        ) {
            Ok(draft) => draft,
            Err(reason) => {
                message.set(reason.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set("Ukládám...".to_owned());
        let id = recipe_id();
        let navigate = navigate_after_save.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = match &id {
                Some(id) => crate::net::api::update_recipe(id, &draft).await,
                None => crate::net::api::create_recipe(&draft).await,
            };
            match saved {
                Ok(recipe) => {
                    navigate(&format!("/recept/{}", recipe.id), NavigateOptions::default());
                }
                Err(reason) => {
                    message.set(format!("Uložení selhalo: {reason}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, id, navigate);
    };

    let heading = move || {
        if recipe_id().is_some() {
            "Upravit recept"
        } else {
            "Přidat recept"
        }
    };

    view! {
        <div class="recipe-editor">
            <h1 class="recipe-editor__heading">{heading}</h1>
            <form class="recipe-editor__form" on:submit=on_submit>
                <label>
                    "Název"
                    <input
                        class="recipe-editor__name"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Kategorie"
                    <input
                        class="recipe-editor__category"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Fotka (URL)"
                    <input
                        class="recipe-editor__image"
                        type="text"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Suroviny (jedna na řádek)"
                    <textarea
                        class="recipe-editor__ingredients"
                        prop:value=move || ingredients.get()
                        on:input=move |ev| ingredients.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Postup (jeden krok na řádek)"
                    <textarea
                        class="recipe-editor__steps"
                        prop:value=move || steps.get()
                        on:input=move |ev| steps.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="recipe-editor__save" type="submit" disabled=move || busy.get()>
                    "Uložit"
                </button>
                <Show when=move || !message.get().is_empty()>
                    <p class="recipe-editor__message">{move || message.get()}</p>
                </Show>
            </form>
        </div>
    }
}
