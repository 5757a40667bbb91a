// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Model / value objects
// - Commands and converters
// - Errors
// - Services
//
// Persistence goes through the document_store traits only, so every service
// runs the same against Scylla or the in-memory store.
//
// ============================================================================

pub mod recipe;
pub mod unit_of_measure;
pub mod bootstrap;
