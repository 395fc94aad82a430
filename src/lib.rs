//! # coordkv
//!
//! A bounded-latency client for an etcd-style coordination store, used to
//! persist small configuration values and to establish hierarchical
//! namespaces ("directories") for coordination.
//!
//! Every remote call is wrapped in a fixed deadline chosen at construction;
//! no call blocks indefinitely. The keys-API adapter classifies remote
//! failures into a typed error enum ("key absent" vs. everything else), and
//! directory creation is idempotent: creating a namespace that already exists
//! is success, not an error.
//!
//! ## Usage
//!
//! ```no_run
//! use coordkv::CoordClient;
//! use std::time::Duration;
//!
//! # async fn run() -> coordkv::Result<()> {
//! let client = CoordClient::connect("http://127.0.0.1:2379", Duration::from_secs(2))?;
//!
//! client.ensure_dir("/jobs").await?;
//! client.set("/jobs/cfg", "x").await?;
//! let value = client.get("/jobs/cfg").await?;
//! assert_eq!(value, "x");
//! # Ok(())
//! # }
//! ```
//!
//! ### CLI
//! ```bash
//! coordkv --endpoint http://localhost:2379 mkdir /jobs
//! coordkv set /jobs/cfg x
//! coordkv get /jobs/cfg
//! coordkv publish /jobs -c 32 -d 60 -m POST
//! ```

pub mod client;
pub mod common;
pub mod keys;

// Re-export commonly used types
pub use client::CoordClient;
pub use common::{BenchConfig, ClientConfig, Error, Result};
pub use keys::{GetOptions, SetOptions};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
