//! Domain errors. Raised at the client-lifecycle and configuration edges.
//!
//! Reference traversal itself is infallible; anything deeper (network,
//! permissions) surfaces from the backend SDK, not from this crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid reference path: {0}")]
    InvalidPath(String),

    #[error("Firestore handle is not initialized (call Firestore::init_global first)")]
    NotInitialized,

    #[error("Firestore handle is already initialized")]
    AlreadyInitialized,
}
