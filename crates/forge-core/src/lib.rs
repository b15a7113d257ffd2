//! forge-core
//!
//! Pure domain types and collection/key conventions for ClinicalForge.
//! No store or SDK dependency — this is the shared vocabulary of the system.

pub mod collections;
pub mod error;
pub mod models;
