//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Directory record as stored and as returned to clients (camelCase JSON)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub department: String,
    pub phone_number: String,
    pub designation: String,
    pub gender: String,
    pub photo_path: String,
    pub photo_original_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload handed to the repository, already validated
#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub department: String,
    pub phone_number: String,
    pub designation: String,
    pub gender: String,
    pub photo_path: String,
    pub photo_original_name: String,
}
