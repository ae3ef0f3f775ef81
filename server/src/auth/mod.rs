//! Authentication module
//!
//! - [`JwtService`] - session token minting and verification
//! - [`CurrentUser`] - caller identity attached to authenticated requests
//! - [`require_auth`] - bearer-token middleware gating `/api/` routes

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
