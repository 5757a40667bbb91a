use anyhow::Result;
use async_trait::async_trait;

use super::document::Document;

// ============================================================================
// Document Repository - Generic Store Contract
// ============================================================================
//
// Every collection is accessed through this one asynchronous contract, for
// reads and writes alike.
//
// Save contract:
// 1. The returned document is the persisted form
// 2. A document without an id gets one
// 3. Embedded sub-documents without ids get one, in their original order
// 4. Identifiers that were already assigned never change
//
// ============================================================================

#[async_trait]
pub trait DocumentRepository<D: Document>: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<D>>;

    async fn find_all(&self) -> Result<Vec<D>>;

    async fn save(&self, document: D) -> Result<D>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;

    async fn count(&self) -> Result<u64>;
}
