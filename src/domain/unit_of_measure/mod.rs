// ============================================================================
// Unit of Measure Domain
// ============================================================================
//
// - Model (UnitOfMeasure document)
// - Commands (UnitOfMeasureCommand)
// - Converters between the two
// - Service (listing and lookup by description)
//
// ============================================================================

pub mod model;
pub mod commands;
pub mod converters;
pub mod service;

// Re-export for convenience
pub use model::*;
pub use commands::*;
pub use service::*;
