//! Core domain layer. No external I/O dependencies.
//!
//! Reference handles and their errors live here. Dependencies flow inward.

pub mod errors;
pub mod refs;

pub use errors::DomainError;
pub use refs::{CollectionRef, DatabaseId, DocumentRef};
