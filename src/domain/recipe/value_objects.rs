use serde::{Deserialize, Serialize};

use crate::domain::unit_of_measure::UnitOfMeasure;

use super::errors::RecipeError;

// ============================================================================
// Recipe Value Objects
// ============================================================================

/// An ingredient embedded in exactly one recipe.
///
/// There is no back-reference to the owning recipe; the association is
/// containment only. `id` stays `None` until the recipe is first saved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub uom: Option<UnitOfMeasure>,
}

impl Ingredient {
    pub fn new(description: &str, amount: f64, uom: Option<UnitOfMeasure>) -> Self {
        Self {
            id: None,
            description: description.to_string(),
            amount,
            uom,
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn uom_id(&self) -> Option<&str> {
        self.uom.as_ref().and_then(|u| u.id.as_deref())
    }

    /// Field equality used to re-locate an ingredient whose id is unknown
    pub fn same_contents(&self, description: &str, amount: f64, uom_id: Option<&str>) -> bool {
        self.description == description && self.amount == amount && self.uom_id() == uom_id
    }
}

/// Amounts must be finite; NaN and infinities have no JSON number form
pub fn check_amount(description: &str, amount: f64) -> Result<(), RecipeError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(RecipeError::InvalidAmount {
            description: description.to_string(),
            amount,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Moderate,
    KindOfHard,
    Hard,
}

// ============================================================================
// Unit Tests
// ============================================================================
