// ============================================================================
// Document Store Core - Generic Persistence Abstractions
// ============================================================================
//
// This module contains GENERIC document persistence contracts that work with
// ANY document type.
//
// Key Principles:
// - No domain-specific code (no Recipe, Ingredient, etc.)
// - Generic over document types
// - One repository contract for reads and writes
//
// ============================================================================

pub mod document;
pub mod repository;

// Re-export core types for convenience
pub use document::{Document, new_document_id, prepare_for_save, serialize_document, deserialize_document};
pub use repository::DocumentRepository;
