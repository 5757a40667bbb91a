use std::sync::Arc;

use recipe_service::document_store::{DocumentRepository, InMemoryDocumentStore};
use recipe_service::domain::bootstrap;
use recipe_service::domain::recipe::{
    IngredientCommand, IngredientService, Recipe, RecipeCommand, RecipeError, RecipeService,
};
use recipe_service::domain::unit_of_measure::{
    UnitOfMeasure, UnitOfMeasureCommand, UnitOfMeasureService,
};
use recipe_service::metrics::Metrics;

struct Kitchen {
    recipes: Arc<InMemoryDocumentStore<Recipe>>,
    units: Arc<InMemoryDocumentStore<UnitOfMeasure>>,
    uoms: UnitOfMeasureService,
    recipe_service: RecipeService,
    ingredient_service: IngredientService,
}

async fn kitchen() -> Kitchen {
    let recipes = Arc::new(InMemoryDocumentStore::<Recipe>::new());
    let units = Arc::new(InMemoryDocumentStore::<UnitOfMeasure>::new());
    bootstrap::seed_units_of_measure(&*units).await.unwrap();

    Kitchen {
        recipes: recipes.clone(),
        units: units.clone(),
        uoms: UnitOfMeasureService::new(units.clone()),
        recipe_service: RecipeService::new(recipes.clone()),
        ingredient_service: IngredientService::new(recipes, units),
    }
}

async fn unit_id(kitchen: &Kitchen, description: &str) -> String {
    kitchen
        .uoms
        .find_by_description(description)
        .await
        .unwrap()
        .and_then(|u| u.id)
        .unwrap()
}

#[tokio::test]
async fn test_full_ingredient_lifecycle() {
    let kitchen = kitchen().await;
    let cup = unit_id(&kitchen, "Cup").await;
    let teaspoon = unit_id(&kitchen, "Teaspoon").await;

    let recipe = kitchen
        .recipe_service
        .save_recipe_command(RecipeCommand {
            description: "Bread".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let recipe_id = recipe.id.unwrap();

    // add
    let flour = kitchen
        .ingredient_service
        .save_ingredient_command(IngredientCommand {
            recipe_id: recipe_id.clone(),
            description: "Flour".to_string(),
            amount: 2.0,
            uom: Some(UnitOfMeasureCommand::reference(&cup)),
            ..Default::default()
        })
        .await
        .unwrap();
    let flour_id = flour.id.clone().unwrap();
    assert_eq!(flour.recipe_id, recipe_id);
    assert_eq!(flour.uom.as_ref().map(|u| u.description.as_str()), Some("Cup"));

    // a second, identical-looking ingredient gets its own id
    let twin = kitchen
        .ingredient_service
        .save_ingredient_command(IngredientCommand {
            id: None,
            ..flour.clone()
        })
        .await
        .unwrap();
    assert_ne!(twin.id, flour.id);

    // update in place
    let updated = kitchen
        .ingredient_service
        .save_ingredient_command(IngredientCommand {
            description: "Sugar".to_string(),
            amount: 1.0,
            uom: Some(UnitOfMeasureCommand::reference(&teaspoon)),
            ..flour.clone()
        })
        .await
        .unwrap();
    assert_eq!(updated.id.as_deref(), Some(flour_id.as_str()));

    let stored = kitchen.recipes.find_by_id(&recipe_id).await.unwrap().unwrap();
    assert_eq!(stored.ingredients.len(), 2);
    assert_eq!(stored.ingredients[0].description, "Sugar");
    assert_eq!(stored.ingredients[0].uom_id(), Some(teaspoon.as_str()));

    // find
    let found = kitchen
        .ingredient_service
        .find_by_recipe_id_and_ingredient_id(&recipe_id, &flour_id)
        .await
        .unwrap();
    assert_eq!(found, updated);

    // delete
    kitchen.ingredient_service.delete_by_id(&recipe_id, &flour_id).await.unwrap();
    let lookup = kitchen
        .ingredient_service
        .find_by_recipe_id_and_ingredient_id(&recipe_id, &flour_id)
        .await;
    assert!(matches!(lookup, Err(RecipeError::IngredientNotFound { .. })));

    let command = kitchen.recipe_service.find_command_by_id(&recipe_id).await.unwrap();
    assert_eq!(command.ingredients.len(), 1);
    assert_eq!(command.ingredients[0].id, twin.id);
}

#[tokio::test]
async fn test_seeded_recipe_is_editable() {
    let kitchen = kitchen().await;
    let seeded = bootstrap::seed_recipes(&*kitchen.recipes, &*kitchen.units)
        .await
        .unwrap()
        .unwrap();
    let recipe_id = seeded.id.clone().unwrap();
    let avocados = seeded.ingredients[0].id.clone().unwrap();

    let mut command = kitchen
        .ingredient_service
        .find_by_recipe_id_and_ingredient_id(&recipe_id, &avocados)
        .await
        .unwrap();
    command.amount = 3.0;
    kitchen.ingredient_service.save_ingredient_command(command).await.unwrap();

    let all = kitchen.recipe_service.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].ingredients.len(), 8);
    assert_eq!(all[0].ingredients[0].amount, 3.0);
}

#[tokio::test]
async fn test_operations_are_counted() {
    let recipes = Arc::new(InMemoryDocumentStore::<Recipe>::new());
    let units = Arc::new(InMemoryDocumentStore::<UnitOfMeasure>::new());
    let metrics = Arc::new(Metrics::new().unwrap());
    let service = IngredientService::new(recipes, units).with_metrics(metrics.clone());

    let result = service
        .save_ingredient_command(IngredientCommand {
            recipe_id: "missing".to_string(),
            description: "Salt".to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(RecipeError::RecipeNotFound(_))));

    let gathered = metrics.registry().gather();
    let ops = gathered.iter().find(|m| m.name() == "ingredient_operations_total").unwrap();
    assert_eq!(ops.metric.len(), 1);
    assert_eq!(ops.metric[0].counter.value, Some(1.0));
}
