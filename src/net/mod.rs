//! Networking modules for the recipe REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the shared JSON schema.
//! The session core never touches the network; password checks happen
//! entirely in the client.

pub mod api;
pub mod types;
