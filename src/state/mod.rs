//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Everything tab-scoped (the login flag, the shared search query) lives in
//! the single `session` model; pages and components reach it through the
//! context handle provided by `App`.

pub mod session;
