//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, recipe_detail::RecipeDetailPage, recipe_editor::RecipeEditorPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the single session handle and sets up client-side routing. The
/// guard lives in the editor page itself, so `/` and `/recept/:id` never
/// run a session check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session per running app, shared through context.
    let session = Session::new();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/cookbook.css"/>
        <Title text="Moje kuchařka"/>

        <Router>
            <Routes fallback=|| "Stránka nenalezena.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("recept"), ParamSegment("id")) view=RecipeDetailPage/>
                <Route path=StaticSegment("pridat") view=RecipeEditorPage/>
                <Route path=(StaticSegment("upravit"), ParamSegment("id")) view=RecipeEditorPage/>
            </Routes>
        </Router>
    }
}
