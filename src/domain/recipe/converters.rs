use crate::domain::unit_of_measure::{UnitOfMeasure, UnitOfMeasureCommand};

use super::aggregate::Recipe;
use super::commands::{IngredientCommand, RecipeCommand};
use super::value_objects::Ingredient;

// ============================================================================
// Converters - field-for-field mappings between documents and commands
// ============================================================================
//
// An ingredient does not know its recipe, so `IngredientCommand::recipe_id`
// comes out empty here and is stamped by whoever knows the parent.
//

impl From<&Ingredient> for IngredientCommand {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id.clone(),
            recipe_id: String::new(),
            description: ingredient.description.clone(),
            amount: ingredient.amount,
            uom: ingredient.uom.as_ref().map(UnitOfMeasureCommand::from),
        }
    }
}

impl From<&IngredientCommand> for Ingredient {
    fn from(command: &IngredientCommand) -> Self {
        Self {
            id: command.ingredient_id().map(str::to_string),
            description: command.description.clone(),
            amount: command.amount,
            uom: command.uom.as_ref().map(UnitOfMeasure::from),
        }
    }
}

impl From<&Recipe> for RecipeCommand {
    fn from(recipe: &Recipe) -> Self {
        let recipe_id = recipe.recipe_id();
        Self {
            id: recipe.id.clone(),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            source: recipe.source.clone(),
            url: recipe.url.clone(),
            directions: recipe.directions.clone(),
            difficulty: recipe.difficulty,
            notes: recipe.notes.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| IngredientCommand::from(i).with_recipe_id(recipe_id))
                .collect(),
        }
    }
}

impl From<&RecipeCommand> for Recipe {
    fn from(command: &RecipeCommand) -> Self {
        Self {
            id: command.id.clone().filter(|id| !id.is_empty()),
            description: command.description.clone(),
            prep_time: command.prep_time,
            cook_time: command.cook_time,
            servings: command.servings,
            source: command.source.clone(),
            url: command.url.clone(),
            directions: command.directions.clone(),
            difficulty: command.difficulty,
            notes: command.notes.clone(),
            ingredients: command.ingredients.iter().map(Ingredient::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::Difficulty;

    fn ingredient() -> Ingredient {
        Ingredient {
            id: Some("i1".to_string()),
            description: "Flour".to_string(),
            amount: 2.0,
            uom: Some(UnitOfMeasure {
                id: Some("u1".to_string()),
                description: "Cup".to_string(),
            }),
        }
    }

    #[test]
    fn test_ingredient_to_command_leaves_recipe_id_empty() {
        let command = IngredientCommand::from(&ingredient());

        assert_eq!(command.id.as_deref(), Some("i1"));
        assert_eq!(command.recipe_id, "");
        assert_eq!(command.description, "Flour");
        assert_eq!(command.amount, 2.0);
        assert_eq!(command.uom_id(), Some("u1"));
    }

    #[test]
    fn test_command_to_ingredient() {
        let command = IngredientCommand {
            id: Some(String::new()),
            recipe_id: "R1".to_string(),
            description: "Sugar".to_string(),
            amount: 1.0,
            uom: Some(UnitOfMeasureCommand::reference("u2")),
        };

        let converted = Ingredient::from(&command);

        assert_eq!(converted.id, None);
        assert_eq!(converted.description, "Sugar");
        assert_eq!(converted.uom_id(), Some("u2"));
    }

    #[test]
    fn test_command_without_unit() {
        let command = IngredientCommand {
            description: "Water".to_string(),
            amount: 1.5,
            ..Default::default()
        };

        assert_eq!(Ingredient::from(&command).uom, None);
    }

    #[test]
    fn test_recipe_to_command_stamps_recipe_id_on_ingredients() {
        let mut recipe = Recipe::new("Bread");
        recipe.id = Some("R1".to_string());
        recipe.difficulty = Some(Difficulty::Moderate);
        recipe.add_ingredient(ingredient());

        let command = RecipeCommand::from(&recipe);

        assert_eq!(command.id.as_deref(), Some("R1"));
        assert_eq!(command.difficulty, Some(Difficulty::Moderate));
        assert_eq!(command.ingredients.len(), 1);
        assert_eq!(command.ingredients[0].recipe_id, "R1");
    }

    #[test]
    fn test_recipe_command_to_recipe() {
        let command = RecipeCommand {
            id: Some(String::new()),
            description: "Tacos".to_string(),
            servings: Some(4),
            ingredients: vec![IngredientCommand::from(&ingredient())],
            ..Default::default()
        };

        let recipe = Recipe::from(&command);

        assert_eq!(recipe.id, None);
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.ingredients, vec![ingredient()]);
    }
}
