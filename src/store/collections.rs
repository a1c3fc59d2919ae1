//! Well-known collection names and their accessors.
//!
//! The whole data layout of the app hangs off two fixed names: a top-level
//! `restaurants` collection, and a `ratings` subcollection under each
//! restaurant document. Everything else (queries, writes, listeners) is the
//! backend SDK's business.

use crate::domain::{CollectionRef, DocumentRef, DomainError};
use crate::store::client::Firestore;

/// Top-level collection holding one document per restaurant.
pub const COLL_RESTAURANTS: &str = "restaurants";

/// Subcollection under each restaurant document holding its ratings.
pub const COLL_RATINGS: &str = "ratings";

/// The `restaurants` collection on the process-wide handle.
/// Errors only when the handle was never installed.
pub fn restaurants() -> Result<CollectionRef, DomainError> {
    Ok(Firestore::global()?.collection(COLL_RESTAURANTS))
}

/// The `restaurants` collection on an explicit handle (tests, emulator
/// instances, multi-project tooling).
pub fn restaurants_in(store: &Firestore) -> CollectionRef {
    store.collection(COLL_RESTAURANTS)
}

/// The `ratings` subcollection of the given restaurant document. Pure
/// traversal of the parent reference; never touches the shared handle.
pub fn rating_collection(restaurant: &DocumentRef) -> CollectionRef {
    restaurant.collection(COLL_RATINGS)
}
