use serde::{Deserialize, Serialize};

use crate::document_store::Document;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct UnitOfMeasure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
}

impl UnitOfMeasure {
    pub fn new(description: &str) -> Self {
        Self {
            id: None,
            description: description.to_string(),
        }
    }
}

impl Document for UnitOfMeasure {
    fn collection() -> &'static str { "units_of_measure" }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
