//! Recipe DTOs shared with the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the recipe endpoints speak so serde
//! round-trips stay lossless; the client adds no interpretation of its own
//! beyond defaulting absent list fields to empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A stored recipe as returned by the `/api/recipes` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Backend-assigned identifier, used in `/recept/{id}` and
    /// `/upravit/{id}` routes.
    pub id: String,
    /// Display name; also the search target on the home page.
    pub name: String,
    /// Free-form category label (e.g. `"dezerty"`).
    #[serde(default)]
    pub category: String,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Ingredient lines, one entry per editor line.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps in cooking order.
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Editor payload for creating or updating a recipe.
///
/// Same shape as [`Recipe`] minus the identifier, which the backend assigns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Display name; the editor refuses to submit a blank one.
    pub name: String,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
    /// Optional photo URL; blank input submits as absent.
    pub image_url: Option<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps.
    #[serde(default)]
    pub steps: Vec<String>,
}
