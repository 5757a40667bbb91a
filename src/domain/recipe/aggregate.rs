use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::document_store::{new_document_id, Document};
use super::commands::IngredientCommand;
use super::errors::RecipeError;
use super::value_objects::{check_amount, Difficulty, Ingredient};

// ============================================================================
// Recipe Aggregate - root document owning its ingredients
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    // Identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

    // Insertion order is significant
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// How a saved ingredient was re-located after persisting its recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Identity,
    FieldMatch,
}

impl Reconciliation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reconciliation::Identity => "identity",
            Reconciliation::FieldMatch => "field_match",
        }
    }
}

impl Recipe {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// The recipe id, or an empty string before the first save
    pub fn recipe_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Exactly one ingredient with the given id.
    ///
    /// Zero matches and duplicate matches are both errors.
    pub fn ingredient(&self, ingredient_id: &str) -> Result<&Ingredient, RecipeError> {
        let mut matches = self.ingredients.iter().filter(|i| i.has_id(ingredient_id));

        match (matches.next(), matches.count()) {
            (Some(found), 0) => Ok(found),
            (None, _) => Err(RecipeError::IngredientNotFound {
                recipe_id: self.recipe_id().to_string(),
                ingredient_id: ingredient_id.to_string(),
            }),
            (Some(_), extra) => Err(RecipeError::AmbiguousIngredient {
                recipe_id: self.recipe_id().to_string(),
                ingredient_id: ingredient_id.to_string(),
                matches: extra + 1,
            }),
        }
    }

    pub fn ingredient_mut(&mut self, ingredient_id: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|i| i.has_id(ingredient_id))
    }

    /// Append an ingredient, returning its position
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> usize {
        self.ingredients.push(ingredient);
        self.ingredients.len() - 1
    }

    pub fn remove_ingredient(&mut self, ingredient_id: &str) -> Option<Ingredient> {
        let position = self.ingredients.iter().position(|i| i.has_id(ingredient_id))?;
        Some(self.ingredients.remove(position))
    }

    /// Check every ingredient before a whole-recipe write.
    ///
    /// Amounts must be finite and non-empty ingredient ids unique.
    pub fn validate(&self) -> Result<(), RecipeError> {
        let mut seen = HashSet::new();

        for ingredient in &self.ingredients {
            check_amount(&ingredient.description, ingredient.amount)?;

            if let Some(id) = ingredient.id.as_deref().filter(|id| !id.is_empty()) {
                if !seen.insert(id) {
                    return Err(RecipeError::DuplicateIngredientId {
                        ingredient_id: id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Ids currently assigned to ingredients
    pub fn ingredient_ids(&self) -> HashSet<String> {
        self.ingredients.iter().filter_map(|i| i.id.clone()).collect()
    }

    /// Re-locate the ingredient a command was saved as.
    ///
    /// Identity match first. Otherwise the first ingredient that was not in
    /// `ids_before_save` and carries the command's description, amount and
    /// unit id. Ingredients that already existed are never candidates for the
    /// field match, so an identical older entry cannot shadow the new one.
    pub fn reconcile(
        &self,
        command: &IngredientCommand,
        ids_before_save: &HashSet<String>,
    ) -> Result<(&Ingredient, Reconciliation), RecipeError> {
        if let Some(id) = command.ingredient_id() {
            if let Some(found) = self.ingredients.iter().find(|i| i.has_id(id)) {
                return Ok((found, Reconciliation::Identity));
            }
        }

        let uom_id = command.uom_id();
        self.ingredients
            .iter()
            .filter(|i| i.id.as_ref().map_or(true, |id| !ids_before_save.contains(id)))
            .find(|i| i.same_contents(&command.description, command.amount, uom_id))
            .map(|found| (found, Reconciliation::FieldMatch))
            .ok_or_else(|| RecipeError::ReconciliationFailed {
                recipe_id: self.recipe_id().to_string(),
            })
    }
}

impl Document for Recipe {
    fn collection() -> &'static str { "recipes" }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn assign_embedded_ids(&mut self) {
        for ingredient in self.ingredients.iter_mut() {
            if ingredient.id.as_deref().map_or(true, str::is_empty) {
                ingredient.id = Some(new_document_id());
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
