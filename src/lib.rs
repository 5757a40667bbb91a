pub mod config;
pub mod document_store;
pub mod domain;
pub mod metrics;
