//! Shared Firestore client handle.
//!
//! The handle binds a database identity and roots collection references.
//! It owns no connection; the backend SDK does the actual talking. The
//! process-wide instance mirrors the SDK's `getInstance()` lifecycle:
//! installed once at startup, read-only afterwards.

use crate::domain::{CollectionRef, DatabaseId, DomainError};
use crate::shared::config::AppConfig;
use std::sync::{Arc, OnceLock};
use tracing::info;

static GLOBAL: OnceLock<Arc<Firestore>> = OnceLock::new();

/// Handle to one Firestore database. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firestore {
    db: DatabaseId,
}

impl Firestore {
    pub fn new(db: DatabaseId) -> Self {
        Self { db }
    }

    /// Build a handle from configuration. Errors when no project id is set.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, DomainError> {
        let project_id = cfg
            .project_id()
            .ok_or_else(|| DomainError::Config("FIREEATS_PROJECT_ID is not set".into()))?;
        Ok(Self::new(DatabaseId::new(
            project_id,
            cfg.database_id_or_default(),
        )))
    }

    pub fn database(&self) -> &DatabaseId {
        &self.db
    }

    /// Reference to the top-level collection `id`.
    /// No local validation; the backend rejects invalid names on use.
    pub fn collection(&self, id: impl Into<String>) -> CollectionRef {
        CollectionRef::root(self.db.clone(), id)
    }

    /// Install the process-wide handle. Errors if one is already installed.
    pub fn init_global(db: DatabaseId) -> Result<Arc<Self>, DomainError> {
        let handle = Arc::new(Self::new(db));
        GLOBAL
            .set(Arc::clone(&handle))
            .map_err(|_| DomainError::AlreadyInitialized)?;
        info!(
            project = handle.db.project_id(),
            database = handle.db.database_id(),
            "Firestore handle installed"
        );
        Ok(handle)
    }

    /// The process-wide handle, if installed.
    pub fn global() -> Result<Arc<Self>, DomainError> {
        GLOBAL.get().cloned().ok_or(DomainError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_roots_at_database() {
        let store = Firestore::new(DatabaseId::default_for_project("fireeats-demo"));
        let coll = store.collection("restaurants");
        assert_eq!(coll.path(), "restaurants");
        assert_eq!(coll.database(), store.database());
    }

    #[test]
    fn test_from_config_requires_project_id() {
        let err = Firestore::from_config(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_from_config_binds_project_and_database() {
        let cfg = AppConfig {
            project_id: Some("fireeats-demo".into()),
            database_id: Some("reviews".into()),
            ..AppConfig::default()
        };
        let store = Firestore::from_config(&cfg).unwrap();
        assert_eq!(store.database().project_id(), "fireeats-demo");
        assert_eq!(store.database().database_id(), "reviews");
    }

    #[test]
    fn test_from_config_uses_default_database() {
        let cfg = AppConfig {
            project_id: Some("fireeats-demo".into()),
            ..AppConfig::default()
        };
        let store = Firestore::from_config(&cfg).unwrap();
        assert_eq!(store.database().database_id(), DatabaseId::DEFAULT_DATABASE);
    }
}
