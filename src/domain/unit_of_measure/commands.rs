use serde::{Deserialize, Serialize};

// ============================================================================
// Unit of Measure Commands - boundary shape
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasureCommand {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl UnitOfMeasureCommand {
    /// Reference to an existing unit by id only
    pub fn reference(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            description: String::new(),
        }
    }

    /// The unit id, with an empty string treated as absent
    pub fn unit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
