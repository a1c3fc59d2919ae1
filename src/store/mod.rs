//! Store layer: the shared client handle and the app's well-known collections.

pub mod client;
pub mod collections;

pub use client::Firestore;
pub use collections::{rating_collection, restaurants, restaurants_in};
