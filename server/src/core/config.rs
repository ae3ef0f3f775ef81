//! Server configuration
//!
//! Every knob can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 5000 | HTTP service port |
//! | DATABASE_PATH | data/idms.db | SQLite database file |
//! | UPLOAD_DIR | data/uploads | Profile photo directory |
//! | CLIENT_ORIGIN | (unset) | Allowed CORS origin |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWT_SECRET | (dev default in debug) | Token signing key |
//! | JWT_EXPIRATION_MINUTES | 60 | Token lifetime |
//! | DEPARTMENTS / DESIGNATIONS / GENDERS | built-in sets | Comma-separated vocabularies |

use std::path::{Path, PathBuf};

use crate::auth::JwtConfig;
use shared::MetaOptions;

/// The three closed vocabularies employee records are validated against.
///
/// Modeled as configuration data rather than code branches: the
/// selectable values can be extended by deployment without touching the
/// validation or the meta endpoint.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub departments: Vec<String>,
    pub designations: Vec<String>,
    pub genders: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            departments: to_owned(&["HR", "Engineering", "Sales", "Marketing", "Finance", "Admin"]),
            designations: to_owned(&["Manager", "Lead", "Developer", "Analyst", "Intern"]),
            genders: to_owned(&["Male", "Female", "Other"]),
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn from_env_list(var: &str, default: Vec<String>) -> Vec<String> {
    match std::env::var(var) {
        Ok(raw) => {
            let values: Vec<String> = raw
                .split(',')
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect();
            if values.is_empty() { default } else { values }
        }
        Err(_) => default,
    }
}

impl Catalog {
    /// Load the vocabularies, allowing env overrides per list
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            departments: from_env_list("DEPARTMENTS", defaults.departments),
            designations: from_env_list("DESIGNATIONS", defaults.designations),
            genders: from_env_list("GENDERS", defaults.genders),
        }
    }

    pub fn is_department(&self, value: &str) -> bool {
        self.departments.iter().any(|v| v == value)
    }

    pub fn is_designation(&self, value: &str) -> bool {
        self.designations.iter().any(|v| v == value)
    }

    pub fn is_gender(&self, value: &str) -> bool {
        self.genders.iter().any(|v| v == value)
    }

    pub fn to_meta_options(&self) -> MetaOptions {
        MetaOptions {
            departments: self.departments.clone(),
            designations: self.designations.clone(),
            genders: self.genders.clone(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Directory uploaded photos are written to
    pub upload_dir: String,
    /// Allowed CORS origin for the browser client, if restricted
    pub client_origin: Option<String>,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Closed vocabularies for employee validation
    pub catalog: Catalog,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/idms.db".into()),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "data/uploads".into()),
            client_origin: std::env::var("CLIENT_ORIGIN").ok().filter(|v| !v.is_empty()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            catalog: Catalog::from_env(),
        }
    }

    /// Override the filesystem-facing settings, commonly for tests
    pub fn with_overrides(
        database_path: impl Into<String>,
        upload_dir: impl Into<String>,
        http_port: u16,
    ) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.upload_dir = upload_dir.into();
        config.http_port = http_port;
        config
    }

    /// Create the data directories this config points at, if missing
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        if let Some(parent) = Path::new(&self.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::create_dir_all(&self.upload_dir)
    }

    pub fn upload_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
