use std::sync::Arc;
use std::time::Instant;

use crate::document_store::DocumentRepository;
use crate::domain::unit_of_measure::UnitOfMeasure;
use crate::metrics::Metrics;

use super::aggregate::Recipe;
use super::commands::IngredientCommand;
use super::errors::RecipeError;
use super::value_objects::{check_amount, Ingredient};

// ============================================================================
// Ingredient Service
// ============================================================================
//
// Orchestrates: load Recipe → mutate embedded ingredients → save Recipe
//
// Every call reads the whole recipe, changes it in memory and writes it
// back. There is no version check between the read and the write, so two
// concurrent writers to one recipe can lose an update.
//
// ============================================================================

pub struct IngredientService {
    recipes: Arc<dyn DocumentRepository<Recipe>>,
    units: Arc<dyn DocumentRepository<UnitOfMeasure>>,
    metrics: Option<Arc<Metrics>>,
}

impl IngredientService {
    pub fn new(
        recipes: Arc<dyn DocumentRepository<Recipe>>,
        units: Arc<dyn DocumentRepository<UnitOfMeasure>>,
    ) -> Self {
        Self { recipes, units, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Look up one ingredient of a recipe as a command
    pub async fn find_by_recipe_id_and_ingredient_id(
        &self,
        recipe_id: &str,
        ingredient_id: &str,
    ) -> Result<IngredientCommand, RecipeError> {
        let started = Instant::now();
        let result = self.find(recipe_id, ingredient_id).await;
        self.record("find", started, result.is_ok());
        result
    }

    /// Update the ingredient the command names, or append it as a new one
    pub async fn save_ingredient_command(
        &self,
        command: IngredientCommand,
    ) -> Result<IngredientCommand, RecipeError> {
        let started = Instant::now();
        let result = self.upsert(command).await;
        self.record("save", started, result.is_ok());
        result
    }

    /// Remove an ingredient. Missing recipe or ingredient is a no-op.
    pub async fn delete_by_id(&self, recipe_id: &str, id_to_delete: &str) -> Result<(), RecipeError> {
        let started = Instant::now();
        let result = self.delete(recipe_id, id_to_delete).await;
        self.record("delete", started, result.is_ok());
        result
    }

    async fn find(&self, recipe_id: &str, ingredient_id: &str) -> Result<IngredientCommand, RecipeError> {
        let recipe = self.load_recipe(recipe_id).await?;
        let ingredient = recipe.ingredient(ingredient_id)?;

        Ok(IngredientCommand::from(ingredient).with_recipe_id(recipe_id))
    }

    async fn upsert(&self, command: IngredientCommand) -> Result<IngredientCommand, RecipeError> {
        check_amount(&command.description, command.amount)?;

        let mut recipe = self.load_recipe(&command.recipe_id).await?;

        // Resolve before touching the recipe so a bad unit leaves it unchanged
        let uom = self.resolve_unit(&command).await?;

        let ids_before_save = recipe.ingredient_ids();

        match command.ingredient_id().and_then(|id| recipe.ingredient_mut(id)) {
            Some(existing) => {
                tracing::debug!(
                    recipe_id = %command.recipe_id,
                    ingredient_id = ?existing.id,
                    "Updating ingredient"
                );
                existing.description = command.description.clone();
                existing.amount = command.amount;
                existing.uom = uom;
            }
            None => {
                let mut ingredient = Ingredient::from(&command);
                ingredient.uom = uom;
                let position = recipe.add_ingredient(ingredient);
                tracing::debug!(
                    recipe_id = %command.recipe_id,
                    position = position,
                    "Adding ingredient"
                );
            }
        }

        let saved = self.recipes.save(recipe).await?;

        let (ingredient, strategy) = saved.reconcile(&command, &ids_before_save)?;
        if let Some(metrics) = &self.metrics {
            metrics.record_reconciliation(strategy.as_str());
        }

        tracing::info!(
            recipe_id = %saved.recipe_id(),
            ingredient_id = ?ingredient.id,
            strategy = strategy.as_str(),
            "✅ Saved ingredient"
        );

        Ok(IngredientCommand::from(ingredient).with_recipe_id(saved.recipe_id()))
    }

    async fn delete(&self, recipe_id: &str, id_to_delete: &str) -> Result<(), RecipeError> {
        tracing::debug!(recipe_id = %recipe_id, ingredient_id = %id_to_delete, "Deleting ingredient");

        let Some(mut recipe) = self.recipes.find_by_id(recipe_id).await? else {
            tracing::debug!(recipe_id = %recipe_id, "Recipe not found, nothing to delete");
            return Ok(());
        };

        if recipe.remove_ingredient(id_to_delete).is_some() {
            self.recipes.save(recipe).await?;
            tracing::info!(recipe_id = %recipe_id, ingredient_id = %id_to_delete, "Deleted ingredient");
        } else {
            tracing::debug!(recipe_id = %recipe_id, ingredient_id = %id_to_delete, "Ingredient not found");
        }

        Ok(())
    }

    async fn load_recipe(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        match self.recipes.find_by_id(recipe_id).await? {
            Some(recipe) => Ok(recipe),
            None => {
                tracing::error!(recipe_id = %recipe_id, "Recipe not found");
                Err(RecipeError::RecipeNotFound(recipe_id.to_string()))
            }
        }
    }

    /// The stored unit the command refers to, if it refers to one
    async fn resolve_unit(&self, command: &IngredientCommand) -> Result<Option<UnitOfMeasure>, RecipeError> {
        let Some(uom_id) = command.uom_id() else {
            return Ok(None);
        };

        self.units
            .find_by_id(uom_id)
            .await?
            .map(Some)
            .ok_or_else(|| RecipeError::UnitOfMeasureNotFound(uom_id.to_string()))
    }

    fn record(&self, operation: &str, started: Instant, success: bool) {
        if let Some(metrics) = &self.metrics {
            metrics.record_ingredient_operation(operation, started.elapsed().as_secs_f64(), success);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
