use serde::{Deserialize, Serialize};

use crate::domain::unit_of_measure::UnitOfMeasureCommand;
use super::value_objects::Difficulty;

// ============================================================================
// Recipe Commands - boundary shapes, distinct from persisted documents
// ============================================================================

/// An ingredient as seen at the service boundary.
///
/// Carries `recipe_id` explicitly since the persisted ingredient has no
/// reference to its recipe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCommand {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub recipe_id: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub uom: Option<UnitOfMeasureCommand>,
}

impl IngredientCommand {
    /// The ingredient id, with an empty string treated as absent
    pub fn ingredient_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn uom_id(&self) -> Option<&str> {
        self.uom.as_ref().and_then(UnitOfMeasureCommand::unit_id)
    }

    pub fn with_recipe_id(mut self, recipe_id: &str) -> Self {
        self.recipe_id = recipe_id.to_string();
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCommand {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientCommand>,
}
