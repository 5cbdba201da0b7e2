//! Pulse: a minimal JSON status API.
//!
//! Serves a health probe and a root informational route, configured
//! entirely from the process environment.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
