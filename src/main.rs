use anyhow::Context;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recipe_service::config::AppConfig;
use recipe_service::document_store::{DocumentRepository, ScyllaDocumentStore};
use recipe_service::domain::bootstrap;
use recipe_service::domain::recipe::{
    IngredientCommand, IngredientService, Recipe, RecipeCommand, RecipeService,
};
use recipe_service::domain::unit_of_measure::{
    UnitOfMeasure, UnitOfMeasureCommand, UnitOfMeasureService,
};
use recipe_service::metrics::{self, Metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins over RECIPE_LOG_FILTER when both are set
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
        )
        .init();

    tracing::info!("🚀 Starting recipe service");

    // === 1. Connect to ScyllaDB ===
    tracing::info!(nodes = ?config.scylla_nodes, "Connecting to ScyllaDB...");
    let session: Session = SessionBuilder::new()
        .known_nodes(&config.scylla_nodes)
        .build()
        .await
        .context("connect to ScyllaDB")?;

    session
        .query_unpaged(
            format!(
                "CREATE KEYSPACE IF NOT EXISTS {} WITH REPLICATION = \
                 {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
                config.keyspace, config.replication_factor
            ),
            &[],
        )
        .await?;

    session.use_keyspace(&config.keyspace, false).await?;

    let session = Arc::new(session);

    // === 2. Collections ===
    let recipes = Arc::new(ScyllaDocumentStore::<Recipe>::new(session.clone()));
    let units = Arc::new(ScyllaDocumentStore::<UnitOfMeasure>::new(session.clone()));
    recipes.ensure_schema().await?;
    units.ensure_schema().await?;

    // === 3. Prometheus metrics ===
    let metrics = Arc::new(Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    let metrics_registry = Arc::new(metrics.registry().clone());
    let metrics_port = config.metrics_port;
    std::thread::spawn(move || {
        let system = actix_web::rt::System::new();
        if let Err(e) = system.block_on(metrics::start_metrics_server(metrics_registry, metrics_port)) {
            tracing::error!("Metrics server error: {}", e);
        }
    });

    // === 4. Seed data ===
    if config.seed_data {
        bootstrap::seed_units_of_measure(&*units).await?;
        bootstrap::seed_recipes(&*recipes, &*units).await?;
    }

    let uom_service = UnitOfMeasureService::new(units.clone());
    let recipe_service = RecipeService::new(recipes.clone()).with_metrics(metrics.clone());
    let ingredient_service = IngredientService::new(recipes.clone(), units.clone())
        .with_metrics(metrics.clone());

    tracing::info!(
        units = uom_service.count().await?,
        recipes = recipes.count().await?,
        "Stores ready"
    );

    // === 5. Demonstrate the ingredient lifecycle ===
    tracing::info!("📝 Demonstrating ingredient lifecycle");

    let cup = uom_service
        .find_by_description("Cup")
        .await?
        .and_then(|u| u.id);
    let teaspoon = uom_service
        .find_by_description("Teaspoon")
        .await?
        .and_then(|u| u.id);

    let recipe = recipe_service
        .save_recipe_command(RecipeCommand {
            description: "Weeknight Pancakes".to_string(),
            prep_time: Some(10),
            cook_time: Some(15),
            servings: Some(4),
            ..Default::default()
        })
        .await?;
    let recipe_id = recipe.id.clone().context("saved recipe has no id")?;
    tracing::info!("✅ Recipe created: {}", recipe_id);

    let flour = ingredient_service
        .save_ingredient_command(IngredientCommand {
            recipe_id: recipe_id.clone(),
            description: "Flour".to_string(),
            amount: 2.0,
            uom: cup.as_deref().map(UnitOfMeasureCommand::reference),
            ..Default::default()
        })
        .await?;
    let flour_id = flour.id.clone().context("saved ingredient has no id")?;
    tracing::info!("✅ Ingredient added: {} ({})", flour.description, flour_id);

    let updated = ingredient_service
        .save_ingredient_command(IngredientCommand {
            amount: 3.0,
            ..flour.clone()
        })
        .await?;
    tracing::info!("✅ Ingredient updated: {} -> {}", flour_id, updated.amount);

    ingredient_service
        .save_ingredient_command(IngredientCommand {
            recipe_id: recipe_id.clone(),
            description: "Baking powder".to_string(),
            amount: 2.0,
            uom: teaspoon.as_deref().map(UnitOfMeasureCommand::reference),
            ..Default::default()
        })
        .await?;

    let found = ingredient_service
        .find_by_recipe_id_and_ingredient_id(&recipe_id, &flour_id)
        .await?;
    tracing::info!("🔎 Found ingredient: {} x {}", found.amount, found.description);

    ingredient_service.delete_by_id(&recipe_id, &flour_id).await?;
    let remaining = recipe_service.find_by_id(&recipe_id).await?.ingredients.len();
    tracing::info!("✅ Ingredient deleted, {} remaining", remaining);

    recipe_service.delete_by_id(&recipe_id).await?;

    tracing::info!("🎉 Demo complete!");

    tracing::info!(port = metrics_port, "📊 Serving /metrics and /health, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("listen for shutdown signal")?;
    tracing::info!("Shutting down");

    Ok(())
}
