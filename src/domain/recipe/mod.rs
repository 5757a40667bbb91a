// ============================================================================
// Recipe Domain - Recipe aggregate and its embedded ingredients
// ============================================================================
//
// This module contains ALL Recipe-specific code:
// - Value objects (Ingredient, Difficulty)
// - Aggregate (Recipe, with ingredient matching and reconciliation)
// - Commands (RecipeCommand, IngredientCommand)
// - Converters between commands and documents
// - Errors (RecipeError enum)
// - Services (IngredientService, RecipeService)
//
// ============================================================================

pub mod value_objects;
pub mod aggregate;
pub mod commands;
pub mod converters;
pub mod errors;
pub mod ingredient_service;
pub mod recipe_service;

// Re-export for convenience
pub use value_objects::*;
pub use aggregate::*;
pub use commands::*;
pub use errors::*;
pub use ingredient_service::*;
pub use recipe_service::*;
