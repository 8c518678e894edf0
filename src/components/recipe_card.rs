//! Card component for recipe list entries on the home page.

use leptos::prelude::*;

/// A clickable card linking to the recipe's detail page.
#[component]
pub fn RecipeCard(id: String, name: String, category: String) -> impl IntoView {
    let href = format!("/recept/{id}");
    let has_category = !category.is_empty();

    view! {
        <a class="recipe-card" href=href>
            <span class="recipe-card__name">{name}</span>
            <Show when=move || has_category>
                <span class="recipe-card__category">{category.clone()}</span>
            </Show>
        </a>
    }
}
