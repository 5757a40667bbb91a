// ============================================================================
// Recipe Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Ingredient {ingredient_id} not found in recipe {recipe_id}")]
    IngredientNotFound {
        recipe_id: String,
        ingredient_id: String,
    },

    #[error("Ingredient {ingredient_id} matches {matches} entries in recipe {recipe_id}")]
    AmbiguousIngredient {
        recipe_id: String,
        ingredient_id: String,
        matches: usize,
    },

    #[error("Ingredient {description} has a non-finite amount: {amount}")]
    InvalidAmount { description: String, amount: f64 },

    #[error("Ingredient id {ingredient_id} appears more than once in the recipe")]
    DuplicateIngredientId { ingredient_id: String },

    #[error("Unit of measure not found: {0}")]
    UnitOfMeasureNotFound(String),

    #[error("Saved recipe {recipe_id} has no ingredient matching the command")]
    ReconciliationFailed { recipe_id: String },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
