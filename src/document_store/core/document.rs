use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use anyhow::Result;

// ============================================================================
// Document Trait
// ============================================================================

/// A persisted document with a store-assigned string identifier.
///
/// All documents must implement this trait to be used with a document store.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (table) the document lives in
    fn collection() -> &'static str where Self: Sized;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    /// Fill identifiers of embedded sub-documents that have none yet.
    ///
    /// Stores call this on every save. Implementations must keep the order of
    /// embedded collections and must not touch identifiers already assigned.
    fn assign_embedded_ids(&mut self) {}
}

/// Fresh identifier for a document or embedded sub-document.
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

/// Assign every identifier a save would assign.
///
/// Both store implementations run documents through this before writing, so the
/// document a `save` returns always carries its own id and the ids of anything
/// appended to its embedded collections.
pub fn prepare_for_save<D: Document>(mut document: D) -> D {
    let missing = document.id().map_or(true, str::is_empty);
    if missing {
        document.set_id(new_document_id());
    }
    document.assign_embedded_ids();
    document
}

// ============================================================================
// Document Serialization Helpers
// ============================================================================

pub fn serialize_document<D: Serialize>(document: &D) -> Result<String> {
    Ok(serde_json::to_string(document)?)
}

pub fn deserialize_document<D: DeserializeOwned>(json: &str) -> Result<D> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================
