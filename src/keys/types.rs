//! Wire types for the store's v2 keys API
//!
//! The wire format is owned by the remote store; these types only mirror the
//! subset the client reads and writes.

use serde::{Deserialize, Serialize};

/// Error code for "key not found"
pub const CODE_KEY_NOT_FOUND: u64 = 100;
/// Error code for "not a file" (operation on a directory node)
pub const CODE_NOT_FILE: u64 = 102;
/// Error code for "not a directory"
pub const CODE_NOT_DIR: u64 = 104;
/// Error code for "node already exists" (conditional create lost)
pub const CODE_NODE_EXIST: u64 = 105;

/// A node in the store's hierarchical namespace.
///
/// Directory nodes carry `dir: true` and no value; plain nodes carry a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub key: String,
    pub value: Option<String>,
    pub dir: bool,
    /// Children, present on recursive directory reads
    pub nodes: Vec<Node>,
    pub created_index: u64,
    pub modified_index: u64,
}

/// Success envelope returned by the keys API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysResponse {
    pub action: String,
    pub node: Node,
    #[serde(default)]
    pub prev_node: Option<Node>,
}

/// Error body returned by the store on non-2xx answers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_code: u64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub cause: String,
    #[serde(default)]
    pub index: u64,
}

/// Read options, forwarded to the store unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOptions {
    /// Return the whole subtree under a directory key
    pub recursive: bool,
    /// Sort directory listings
    pub sorted: bool,
    /// Linearized read through the current leader
    pub quorum: bool,
}

/// Write options, forwarded to the store unchanged
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Create the key as a directory node
    pub dir: bool,
    /// Conditional write: require the key to (not) exist
    pub prev_exist: Option<bool>,
    /// Time-to-live in seconds
    pub ttl: Option<u64>,
}
