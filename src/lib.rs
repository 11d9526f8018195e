//! Single-page task manager.
//!
//! The binary serves a built UI bundle with SPA fallback routing
//! ([`server`]). The library side models the browser behavior behind
//! the UI: the [`Task`](models::Task) data shape, clients for the
//! remote task store ([`store`]), and the view-state transitions each
//! user action performs ([`board`]).

pub mod board;
pub mod models;
pub mod server;
pub mod store;
