//! Reference handles for the hosted document database.
//!
//! Pure path values. A reference names a collection or document; it never
//! performs I/O. Equality is path equality, so repeated lookups of the same
//! name compare equal.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one Firestore database within a Google Cloud project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseId {
    project_id: String,
    database_id: String,
}

impl DatabaseId {
    /// Database id Firestore assigns when none is chosen explicitly.
    pub const DEFAULT_DATABASE: &'static str = "(default)";

    pub fn new(project_id: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database_id: database_id.into(),
        }
    }

    /// The `(default)` database of the given project.
    pub fn default_for_project(project_id: impl Into<String>) -> Self {
        Self::new(project_id, Self::DEFAULT_DATABASE)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Root of all document resource names:
    /// `projects/{project}/databases/{database}/documents`.
    pub fn root_resource(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database_id
        )
    }
}

/// Handle naming a collection: a group of documents under a common path.
///
/// Segment count is always odd (`restaurants`, `restaurants/{id}/ratings`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RefParts")]
pub struct CollectionRef {
    db: DatabaseId,
    segments: Vec<String>,
}

impl CollectionRef {
    /// Top-level collection. Only the client handle creates these.
    pub(crate) fn root(db: DatabaseId, id: impl Into<String>) -> Self {
        Self {
            db,
            segments: vec![id.into()],
        }
    }

    /// Collection id: the last path segment.
    pub fn id(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Slash-joined path relative to the database root.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn database(&self) -> &DatabaseId {
        &self.db
    }

    /// Owning document, or `None` for a top-level collection.
    pub fn parent(&self) -> Option<DocumentRef> {
        if self.segments.len() == 1 {
            return None;
        }
        Some(DocumentRef {
            db: self.db.clone(),
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Reference to the document `id` within this collection.
    pub fn doc(&self, id: impl Into<String>) -> DocumentRef {
        let mut segments = self.segments.clone();
        segments.push(id.into());
        DocumentRef {
            db: self.db.clone(),
            segments,
        }
    }

    /// Fully qualified resource name, e.g.
    /// `projects/p/databases/(default)/documents/restaurants`.
    pub fn resource_name(&self) -> String {
        format!("{}/{}", self.db.root_resource(), self.path())
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Handle naming a single document, itself capable of owning subcollections.
///
/// Segment count is always even (`restaurants/{id}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RefParts")]
pub struct DocumentRef {
    db: DatabaseId,
    segments: Vec<String>,
}

impl DocumentRef {
    /// Document id: the last path segment.
    pub fn id(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Slash-joined path relative to the database root.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn database(&self) -> &DatabaseId {
        &self.db
    }

    /// The collection this document belongs to.
    pub fn parent(&self) -> CollectionRef {
        CollectionRef {
            db: self.db.clone(),
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        }
    }

    /// Reference to the subcollection `id` nested under this document.
    /// No local validation; the backend rejects invalid names on use.
    pub fn collection(&self, id: impl Into<String>) -> CollectionRef {
        let mut segments = self.segments.clone();
        segments.push(id.into());
        CollectionRef {
            db: self.db.clone(),
            segments,
        }
    }

    /// Fully qualified resource name, e.g.
    /// `projects/p/databases/(default)/documents/restaurants/abc`.
    pub fn resource_name(&self) -> String {
        format!("{}/{}", self.db.root_resource(), self.path())
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Wire form of a reference. Segment parity is checked here, so deserialized
/// refs uphold the same invariant as ones built through the client handle.
#[derive(Deserialize)]
struct RefParts {
    db: DatabaseId,
    segments: Vec<String>,
}

impl TryFrom<RefParts> for CollectionRef {
    type Error = DomainError;

    fn try_from(parts: RefParts) -> Result<Self, Self::Error> {
        if parts.segments.is_empty() || parts.segments.len() % 2 == 0 {
            return Err(DomainError::InvalidPath(format!(
                "collection path needs an odd number of segments, got {}",
                parts.segments.len()
            )));
        }
        Ok(Self {
            db: parts.db,
            segments: parts.segments,
        })
    }
}

impl TryFrom<RefParts> for DocumentRef {
    type Error = DomainError;

    fn try_from(parts: RefParts) -> Result<Self, Self::Error> {
        if parts.segments.is_empty() || parts.segments.len() % 2 != 0 {
            return Err(DomainError::InvalidPath(format!(
                "document path needs an even number of segments, got {}",
                parts.segments.len()
            )));
        }
        Ok(Self {
            db: parts.db,
            segments: parts.segments,
        })
    }
}
