//! Core module - configuration, state, and server bootstrap

pub mod config;
pub mod server;
pub mod state;

pub use config::{Catalog, Config};
pub use server::Server;
pub use state::ServerState;
