//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and inputs while reading/writing shared
//! session state from the Leptos context provider.

pub mod login_form;
pub mod recipe_card;
pub mod search_bar;
