//! IDMS Server - employee directory backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): axum routes and handlers
//! - **Authentication** (`auth`): JWT + Argon2 credential handling
//! - **Database** (`db`): embedded SQLite store behind repositories
//! - **Uploads** (`services::photo`): profile photo validation and storage
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # configuration, state, server bootstrap
//! ├── auth/          # JWT service, auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool setup, models, filter, repositories
//! ├── services/      # photo upload store
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Catalog, Config, Server, ServerState};
pub use services::photo::{PhotoStore, StoredPhoto};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
