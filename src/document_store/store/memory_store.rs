use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document_store::core::{prepare_for_save, Document, DocumentRepository};

// ============================================================================
// In-Memory Document Store
// ============================================================================
//
// Keeps documents in insertion order so listings are deterministic. Used by
// the test suite and for running the services without a database.
//
// ============================================================================

pub struct InMemoryDocumentStore<D: Document> {
    documents: RwLock<Vec<D>>,
}

impl<D: Document> InMemoryDocumentStore<D> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl<D: Document> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for InMemoryDocumentStore<D> {
    async fn find_by_id(&self, id: &str) -> Result<Option<D>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id() == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<D>> {
        Ok(self.documents.read().await.clone())
    }

    async fn save(&self, document: D) -> Result<D> {
        let document = prepare_for_save(document);
        let mut documents = self.documents.write().await;

        match documents.iter_mut().find(|d| d.id() == document.id()) {
            Some(existing) => *existing = document.clone(),
            None => documents.push(document.clone()),
        }

        tracing::trace!(
            collection = D::collection(),
            id = ?document.id(),
            "Saved document in memory"
        );

        Ok(document)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.documents.write().await.retain(|d| d.id() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.documents.write().await.clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.documents.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit_of_measure::UnitOfMeasure;

    fn uom(description: &str) -> UnitOfMeasure {
        UnitOfMeasure::new(description)
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let store = InMemoryDocumentStore::<UnitOfMeasure>::new();

        let saved = store.save(uom("Cup")).await.unwrap();

        assert!(saved.id.is_some());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_replaces_in_place() {
        let store = InMemoryDocumentStore::<UnitOfMeasure>::new();
        let first = store.save(uom("Cup")).await.unwrap();
        store.save(uom("Pint")).await.unwrap();

        let mut renamed = first.clone();
        renamed.description = "Mug".to_string();
        store.save(renamed).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "Mug");
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].description, "Pint");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = InMemoryDocumentStore::<UnitOfMeasure>::new();
        assert!(store.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_one_and_all() {
        let store = InMemoryDocumentStore::<UnitOfMeasure>::new();
        let cup = store.save(uom("Cup")).await.unwrap();
        store.save(uom("Pint")).await.unwrap();
        store.save(uom("Dash")).await.unwrap();

        store.delete_by_id(cup.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        store.delete_all().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
