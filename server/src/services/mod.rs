//! Service layer

pub mod photo;

pub use photo::{PhotoStore, StoredPhoto};
