//! Client-facing API DTOs
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
///
/// `identifier` may be either an email address or a username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Token + redacted account summary returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Redacted user summary — never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
}

// =============================================================================
// Employee API DTOs
// =============================================================================

/// Query parameters accepted by the employee list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// The three closed vocabularies used for employee validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaOptions {
    pub departments: Vec<String>,
    pub designations: Vec<String>,
    pub genders: Vec<String>,
}
