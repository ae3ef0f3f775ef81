//! Shared types for the IDMS employee directory
//!
//! Request/response DTOs used in API communication. These types are the
//! wire contract between the server and any client front-end.

pub mod client;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    AuthResponse, EmployeeListQuery, LoginRequest, MetaOptions, RegisterRequest, UserInfo,
};
