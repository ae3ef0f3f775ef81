//! Server state - shared handles for every request
//!
//! [`ServerState`] holds the configuration plus the service singletons.
//! Cloning is shallow (pool handle + `Arc`s), so every handler gets its
//! own cheap copy through the axum `State` extractor.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Catalog, Config};
use crate::db::DbService;
use crate::services::photo::PhotoStore;
use crate::utils::AppError;

#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SQLite)
    pub db: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// Profile photo storage
    pub photos: Arc<PhotoStore>,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Order matters: directories first, then the database (applies
    /// migrations), then the services. A store that cannot be opened or
    /// migrated fails startup.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_dirs()
            .map_err(|e| AppError::internal(format!("Failed to create data directories: {}", e)))?;

        let db_service = DbService::new(&config.database_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let photos = Arc::new(PhotoStore::new(config.upload_dir_path()));

        Ok(Self {
            config: config.clone(),
            db: db_service.pool,
            jwt_service,
            photos,
        })
    }

    /// Get a database pool handle
    pub fn get_db(&self) -> SqlitePool {
        self.db.clone()
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// The closed vocabularies employee input is validated against
    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }
}
