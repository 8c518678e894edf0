//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` wraps the per-tab browser storage behind feature-gated arms;
//! `guard` owns the redirect effect for the login-gated editor routes.

pub mod guard;
pub mod storage;
