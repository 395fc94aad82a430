//! Boundary layer for the store's keys API: wire types plus the HTTP adapter
//! that produces typed errors.

pub mod api;
pub mod types;

pub use api::KeysApi;
pub use types::{ApiError, GetOptions, KeysResponse, Node, SetOptions};
