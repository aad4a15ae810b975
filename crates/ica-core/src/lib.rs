//! ica-core: domain model, local store, and the small engines around it.
//!
//! This crate owns everything the `ica` tools persist and derive: resumes,
//! job applications and quiz attempts kept in a namespaced key-value store,
//! plus the job matching, quiz scoring and dashboard aggregation built on
//! top of them.

pub mod applications;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod ids;
pub mod matching;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod state;
pub mod statistics;
pub mod store;

pub use error::{ComposeError, StoreError};
pub use store::{FileStore, KeyValueStore, LocalStore, MemoryStore};
