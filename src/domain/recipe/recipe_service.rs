use std::sync::Arc;

use crate::document_store::DocumentRepository;
use crate::metrics::Metrics;

use super::aggregate::Recipe;
use super::commands::RecipeCommand;
use super::errors::RecipeError;

// ============================================================================
// Recipe Service - whole-recipe reads and writes
// ============================================================================

pub struct RecipeService {
    recipes: Arc<dyn DocumentRepository<Recipe>>,
    metrics: Option<Arc<Metrics>>,
}

impl RecipeService {
    pub fn new(recipes: Arc<dyn DocumentRepository<Recipe>>) -> Self {
        Self { recipes, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn find_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        tracing::debug!("Loading all recipes");
        let result = self.recipes.find_all().await.map_err(RecipeError::from);
        self.record("find_all", result.is_ok());
        result
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Recipe, RecipeError> {
        let result = match self.recipes.find_by_id(id).await {
            Ok(Some(recipe)) => Ok(recipe),
            Ok(None) => Err(RecipeError::RecipeNotFound(id.to_string())),
            Err(e) => Err(e.into()),
        };
        self.record("find_by_id", result.is_ok());
        result
    }

    pub async fn find_command_by_id(&self, id: &str) -> Result<RecipeCommand, RecipeError> {
        let recipe = self.find_by_id(id).await?;
        Ok(RecipeCommand::from(&recipe))
    }

    /// Persist a recipe command, returning it with every id assigned
    pub async fn save_recipe_command(&self, command: RecipeCommand) -> Result<RecipeCommand, RecipeError> {
        let detached = Recipe::from(&command);
        let result = match detached.validate() {
            Ok(()) => self.recipes.save(detached).await.map_err(RecipeError::from),
            Err(e) => Err(e),
        };
        self.record("save", result.is_ok());

        let saved = result?;
        tracing::info!(recipe_id = %saved.recipe_id(), "✅ Saved recipe");
        Ok(RecipeCommand::from(&saved))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), RecipeError> {
        let result = self.recipes.delete_by_id(id).await.map_err(RecipeError::from);
        self.record("delete", result.is_ok());
        result?;
        tracing::info!(recipe_id = %id, "Deleted recipe");
        Ok(())
    }

    fn record(&self, operation: &str, success: bool) {
        if let Some(metrics) = &self.metrics {
            metrics.record_recipe_operation(operation, success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_store::InMemoryDocumentStore;
    use crate::domain::recipe::{Difficulty, IngredientCommand};

    fn service() -> RecipeService {
        RecipeService::new(Arc::new(InMemoryDocumentStore::<Recipe>::new()))
    }

    fn tacos() -> RecipeCommand {
        RecipeCommand {
            description: "Spicy Grilled Chicken Tacos".to_string(),
            prep_time: Some(20),
            cook_time: Some(15),
            servings: Some(4),
            difficulty: Some(Difficulty::Moderate),
            ingredients: vec![IngredientCommand {
                description: "boneless chicken thighs".to_string(),
                amount: 6.0,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_ids() {
        let service = service();

        let saved = service.save_recipe_command(tacos()).await.unwrap();

        let recipe_id = saved.id.clone().unwrap();
        assert_eq!(saved.ingredients.len(), 1);
        assert!(saved.ingredients[0].id.is_some());
        assert_eq!(saved.ingredients[0].recipe_id, recipe_id);
    }

    #[tokio::test]
    async fn test_find_command_by_id() {
        let service = service();
        let saved = service.save_recipe_command(tacos()).await.unwrap();

        let found = service.find_command_by_id(saved.id.as_deref().unwrap()).await.unwrap();

        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_find_missing_recipe() {
        let result = service().find_by_id("nope").await;
        assert!(matches!(result.unwrap_err(), RecipeError::RecipeNotFound(_)));
    }

    #[tokio::test]
    async fn test_resave_updates_instead_of_duplicating() {
        let service = service();
        let mut saved = service.save_recipe_command(tacos()).await.unwrap();

        saved.servings = Some(6);
        service.save_recipe_command(saved.clone()).await.unwrap();

        let all = service.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].servings, Some(6));
    }

    #[tokio::test]
    async fn test_save_rejects_repeated_ingredient_ids() {
        let service = service();
        let mut command = tacos();
        command.ingredients = vec![
            IngredientCommand {
                id: Some("dup".to_string()),
                description: "lime".to_string(),
                amount: 1.0,
                ..Default::default()
            },
            IngredientCommand {
                id: Some("dup".to_string()),
                description: "cilantro".to_string(),
                amount: 2.0,
                ..Default::default()
            },
        ];

        let result = service.save_recipe_command(command).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::DuplicateIngredientId { ref ingredient_id } if ingredient_id == "dup"
        ));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_rejects_non_finite_amount() {
        let service = service();
        let mut command = tacos();
        command.ingredients[0].amount = f64::NAN;

        let result = service.save_recipe_command(command).await;

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidAmount { .. }));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let service = service();
        let saved = service.save_recipe_command(tacos()).await.unwrap();
        let id = saved.id.unwrap();

        service.delete_by_id(&id).await.unwrap();

        assert!(service.find_all().await.unwrap().is_empty());
        assert!(service.find_by_id(&id).await.is_err());
    }
}
