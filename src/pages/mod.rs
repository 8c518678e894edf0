//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Only the editor page installs the login guard; the other
//! routes never touch the session check.

pub mod home;
pub mod recipe_detail;
pub mod recipe_editor;
