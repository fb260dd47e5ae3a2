//! # Berth
//!
//! Metadata persistence core for a container-image registry: repositories,
//! tags, and auxiliary social/ACL records over a key-value store.
//!
//! Primary records are full snapshots keyed by deterministic identifiers;
//! human-readable natural keys (`namespace:name`) resolve to identifiers
//! through per-kind secondary name indexes. The store offers no multi-key
//! transactions, so cross-record consistency is maintained by per-key
//! serialization in this process and documented-as-accepted gaps everywhere
//! else.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use berth::config::RegistryConfig;
//! use berth::registry::RepositoryManager;
//! use berth::store::{KvStore, SqliteKv};
//!
//! let config = RegistryConfig::default();
//! let store: Arc<dyn KvStore> = Arc::new(SqliteKv::new(config.db_path()).unwrap());
//! store.initialize().unwrap();
//!
//! let repos = RepositoryManager::new(store, images, &config);
//! repos.put("genki", "couchdb", manifest_json, "docker/24.0").unwrap();
//! ```
//!
//! The HTTP surface, blob storage, and authentication live in the consuming
//! application; this crate is only the record layer they call into.

pub mod config;
pub mod error;
pub mod mint;
pub mod registry;
pub mod store;
pub mod types;
