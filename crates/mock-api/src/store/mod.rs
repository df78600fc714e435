//! Read-only fixture store.
//!
//! Resolves (route family, stem) pairs to JSON documents under the
//! configured data directory. Documents are loaded fresh from disk on
//! every call; nothing is cached and nothing is ever written.
//!
//! A missing file is a distinct [`StoreError::NotFound`] condition.
//! Any other failure (I/O, malformed JSON) is fatal for the request
//! and surfaces as a generic 500 at the boundary.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Route families sharing one fixture namespace and, where
/// applicable, one `not_found.json` error template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    Catalog,
    Account,
    Orders,
    Order,
    Packages,
    PackageItems,
}

impl RouteFamily {
    /// Directory of this family relative to the store root.
    pub fn dir(&self) -> &'static str {
        match self {
            RouteFamily::Catalog => "catalogo",
            RouteFamily::Account => "account",
            RouteFamily::Orders => "maestro/orders",
            RouteFamily::Order => "maestro/order",
            RouteFamily::Packages => "maestro/packages",
            RouteFamily::PackageItems => "maestro/package_items",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// No fixture exists for the requested key.
    #[error("Fixture not found")]
    NotFound,

    /// Underlying read failed for a reason other than absence.
    #[error("Fixture read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold valid JSON.
    #[error("Malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixture resolution over a read-only directory tree.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a single fixture by family and file stem.
    pub async fn get(&self, family: RouteFamily, stem: &str) -> Result<Value, StoreError> {
        let path = self
            .root
            .join(family.dir())
            .join(format!("{stem}.json"));
        self.read_document(&path).await
    }

    /// Enumerate every `*.json` fixture directly under the family
    /// directory.
    ///
    /// Order is directory enumeration order and is not guaranteed to
    /// be sorted. A missing family directory yields an empty list.
    pub async fn list(&self, family: RouteFamily) -> Result<Vec<Value>, StoreError> {
        let dir = self.root.join(family.dir());

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                documents.push(self.read_document(&path).await?);
            }
        }
        Ok(documents)
    }

    /// Load the family's `not_found.json` error template.
    ///
    /// Returns a fresh document on every call; callers may rewrite
    /// their copy without affecting any other request.
    pub async fn not_found_template(&self, family: RouteFamily) -> Result<Value, StoreError> {
        self.get(family, "not_found").await
    }

    async fn read_document(&self, path: &Path) -> Result<Value, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Stem of an orders page fixture: `sample{offset}`.
pub fn orders_page_stem(offset: i64) -> String {
    format!("sample{offset}")
}

/// Stem of a single-order fixture: the canonical id rendering.
pub fn order_stem(order_id: &Uuid) -> String {
    order_id.to_string()
}

/// Stem of a package or package-items fixture.
///
/// The two ids are joined with no delimiter; fixture filenames on disk
/// rely on this exact concatenation. Canonical UUID rendering keeps
/// both halves fixed-width, which is the only thing standing between
/// this scheme and key collisions.
pub fn package_stem(order_id: &Uuid, package_id: &Uuid) -> String {
    format!("{order_id}{package_id}")
}
