//! fireeats-store: Firestore naming layer for the FireEats restaurant review app.
//!
//! Pure indirection over the document database's resource naming. Reads,
//! writes and queries belong to the backend SDK, not to this crate.

pub mod domain;
pub mod shared;
pub mod store;

pub use domain::{CollectionRef, DatabaseId, DocumentRef, DomainError};
pub use store::client::Firestore;
pub use store::collections::{COLL_RATINGS, COLL_RESTAURANTS};
