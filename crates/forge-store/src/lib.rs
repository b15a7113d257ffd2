//! forge-store
//!
//! Persistence for ClinicalForge: the [`DocumentStore`] abstraction with
//! S3-backed and in-memory implementations, the typed submission
//! repository, the profile service with its TTL cache, and contributor
//! aggregation.

pub mod contributors;
pub mod document;
pub mod error;
pub mod memory;
pub mod profiles;
pub mod repository;
pub mod s3;

pub use document::{DocumentStore, StoredDocument};
pub use error::{RepositoryError, StoreError};
pub use memory::MemoryStore;
pub use profiles::ProfileService;
pub use repository::SubmissionRepository;
pub use s3::S3DocumentStore;
