use std::sync::Arc;
use anyhow::Result;

use crate::document_store::DocumentRepository;

use super::commands::UnitOfMeasureCommand;
use super::model::UnitOfMeasure;

// ============================================================================
// Unit of Measure Service
// ============================================================================

pub struct UnitOfMeasureService {
    units: Arc<dyn DocumentRepository<UnitOfMeasure>>,
}

impl UnitOfMeasureService {
    pub fn new(units: Arc<dyn DocumentRepository<UnitOfMeasure>>) -> Self {
        Self { units }
    }

    pub async fn list_all_uoms(&self) -> Result<Vec<UnitOfMeasureCommand>> {
        let units = self.units.find_all().await?;
        Ok(units.iter().map(UnitOfMeasureCommand::from).collect())
    }

    pub async fn find_by_description(&self, description: &str) -> Result<Option<UnitOfMeasure>> {
        find_by_description(self.units.as_ref(), description).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.units.count().await
    }
}

/// First unit whose description matches exactly.
///
/// The unit collection is small and stored as opaque JSON bodies, so this is
/// a scan rather than an indexed query.
pub async fn find_by_description(
    units: &dyn DocumentRepository<UnitOfMeasure>,
    description: &str,
) -> Result<Option<UnitOfMeasure>> {
    let all = units.find_all().await?;
    Ok(all.into_iter().find(|u| u.description == description))
}
