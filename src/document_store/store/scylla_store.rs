use scylla::client::session::Session;
use std::sync::Arc;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use std::marker::PhantomData;

use crate::document_store::core::{
    deserialize_document, prepare_for_save, serialize_document, Document, DocumentRepository,
};

// ============================================================================
// Generic Scylla Document Store
// ============================================================================
//
// This is a GENERIC store that works with ANY document type.
//
// Type Parameter:
// - `D`: The document type (must implement Document trait)
//
// Layout:
// - One table per collection, named after `D::collection()`
// - The whole document is stored as JSON in `body`, embedded collections
//   included, so a save is a single-row write
//
// ============================================================================

pub struct ScyllaDocumentStore<D: Document> {
    session: Arc<Session>,
    statements: Statements,
    _phantom: PhantomData<D>,
}

/// CQL text for one collection table.
#[derive(Debug, Clone)]
struct Statements {
    create_table: String,
    select_one: String,
    select_all: String,
    upsert: String,
    delete_one: String,
    truncate: String,
    count: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    id text PRIMARY KEY,
                    body text,
                    updated_at timestamp
                )"
            ),
            select_one: format!("SELECT body FROM {table} WHERE id = ?"),
            select_all: format!("SELECT body FROM {table}"),
            upsert: format!("INSERT INTO {table} (id, body, updated_at) VALUES (?, ?, ?)"),
            delete_one: format!("DELETE FROM {table} WHERE id = ?"),
            truncate: format!("TRUNCATE {table}"),
            count: format!("SELECT COUNT(*) FROM {table}"),
        }
    }
}

impl<D: Document> ScyllaDocumentStore<D> {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            statements: Statements::for_table(D::collection()),
            _phantom: PhantomData,
        }
    }

    /// Create the collection table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        self.session
            .query_unpaged(self.statements.create_table.as_str(), &[])
            .await
            .with_context(|| format!("create table {}", D::collection()))?;

        tracing::info!(collection = D::collection(), "Collection table ready");
        Ok(())
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for ScyllaDocumentStore<D> {
    async fn find_by_id(&self, id: &str) -> Result<Option<D>> {
        let result = self.session
            .query_unpaged(self.statements.select_one.as_str(), (id,))
            .await?;

        let rows_result = result
            .into_rows_result()
            .with_context(|| format!("read {} document {}", D::collection(), id))?;

        match rows_result.maybe_first_row::<(String,)>()? {
            Some((body,)) => {
                let document = deserialize_document(&body)
                    .with_context(|| format!("decode {} document {}", D::collection(), id))?;
                tracing::debug!(collection = D::collection(), id = %id, "Loaded document");
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<D>> {
        let bodies: Vec<(String,)> = self.session
            .query_iter(self.statements.select_all.as_str(), &[])
            .await?
            .rows_stream::<(String,)>()?
            .try_collect()
            .await?;

        let documents = bodies
            .iter()
            .map(|(body,)| deserialize_document(body))
            .collect::<Result<Vec<D>>>()?;

        tracing::debug!(
            collection = D::collection(),
            count = documents.len(),
            "Loaded all documents"
        );
        Ok(documents)
    }

    async fn save(&self, document: D) -> Result<D> {
        let document = prepare_for_save(document);
        let id = document
            .id()
            .map(str::to_string)
            .context("document has no id after preparation")?;
        let body = serialize_document(&document)?;

        self.session
            .query_unpaged(self.statements.upsert.as_str(), (id.clone(), body, Utc::now()))
            .await
            .with_context(|| format!("save {} document {}", D::collection(), id))?;

        tracing::info!(collection = D::collection(), id = %id, "✅ Saved document");
        Ok(document)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.session
            .query_unpaged(self.statements.delete_one.as_str(), (id,))
            .await?;

        tracing::info!(collection = D::collection(), id = %id, "Deleted document");
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.session
            .query_unpaged(self.statements.truncate.as_str(), &[])
            .await?;

        tracing::warn!(collection = D::collection(), "Truncated collection");
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let result = self.session
            .query_unpaged(self.statements.count.as_str(), &[])
            .await?;

        let rows_result = result
            .into_rows_result()
            .with_context(|| format!("count {} documents", D::collection()))?;

        let count = rows_result
            .maybe_first_row::<(i64,)>()?
            .map_or(0, |(count,)| count.max(0) as u64);
        Ok(count)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
