// ============================================================================
// Document Store Infrastructure
// ============================================================================
//
// Generic, reusable document persistence.
// Domain-specific documents live in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any document type)
mod core;
mod store;

// Re-export core infrastructure
pub use core::*;
pub use store::*;
