use anyhow::{Context, Result};

use crate::document_store::DocumentRepository;
use crate::domain::recipe::{Difficulty, Ingredient, Recipe};
use crate::domain::unit_of_measure::{find_by_description, UnitOfMeasure};

// ============================================================================
// Bootstrap Data
// ============================================================================
//
// Seeds the standard units of measure and one sample recipe. Safe to run on
// every start: units are matched by description, and the recipe is only
// written into an empty recipe collection.
//
// ============================================================================

pub const STANDARD_UNITS: [&str; 8] = [
    "Each",
    "Tablespoon",
    "Teaspoon",
    "Dash",
    "Pint",
    "Cup",
    "Pinch",
    "Ounce",
];

/// Ensure every standard unit exists; returns how many were created
pub async fn seed_units_of_measure(units: &dyn DocumentRepository<UnitOfMeasure>) -> Result<usize> {
    let mut created = 0;

    for description in STANDARD_UNITS {
        if find_by_description(units, description).await?.is_none() {
            units.save(UnitOfMeasure::new(description)).await?;
            created += 1;
        }
    }

    tracing::info!(created = created, "Units of measure seeded");
    Ok(created)
}

/// Write the sample recipe if there are no recipes yet
pub async fn seed_recipes(
    recipes: &dyn DocumentRepository<Recipe>,
    units: &dyn DocumentRepository<UnitOfMeasure>,
) -> Result<Option<Recipe>> {
    if recipes.count().await? > 0 {
        tracing::debug!("Recipes present, skipping sample recipe");
        return Ok(None);
    }

    let each = required_unit(units, "Each").await?;
    let tablespoon = required_unit(units, "Tablespoon").await?;
    let teaspoon = required_unit(units, "Teaspoon").await?;
    let dash = required_unit(units, "Dash").await?;

    let mut guacamole = Recipe::new("Perfect Guacamole");
    guacamole.prep_time = Some(10);
    guacamole.cook_time = Some(0);
    guacamole.servings = Some(4);
    guacamole.difficulty = Some(Difficulty::Easy);
    guacamole.source = Some("Simply Recipes".to_string());
    guacamole.url = Some("https://www.simplyrecipes.com/recipes/perfect_guacamole/".to_string());
    guacamole.directions = Some(
        "1 Cut avocado, remove flesh.\n\
         2 Mash with a fork.\n\
         3 Add salt, lime juice, and the rest.\n\
         4 Cover with plastic and chill to store."
            .to_string(),
    );
    guacamole.notes = Some("Be careful handling chiles if using.".to_string());

    for (description, amount, uom) in [
        ("ripe avocados", 2.0, &each),
        ("Kosher salt", 0.5, &teaspoon),
        ("fresh lime juice or lemon juice", 2.0, &tablespoon),
        ("minced red onion or thinly sliced green onion", 2.0, &tablespoon),
        ("serrano chiles, stems and seeds removed, minced", 2.0, &each),
        ("cilantro (leaves and tender stems), finely chopped", 2.0, &tablespoon),
        ("freshly grated black pepper", 1.0, &dash),
        ("ripe tomato, seeds and pulp removed, chopped", 0.5, &each),
    ] {
        guacamole.add_ingredient(Ingredient::new(description, amount, Some(uom.clone())));
    }

    let saved = recipes.save(guacamole).await?;
    tracing::info!(recipe_id = %saved.recipe_id(), "Sample recipe seeded");
    Ok(Some(saved))
}

async fn required_unit(
    units: &dyn DocumentRepository<UnitOfMeasure>,
    description: &str,
) -> Result<UnitOfMeasure> {
    find_by_description(units, description)
        .await?
        .with_context(|| format!("unit of measure {} missing, seed units first", description))
}
