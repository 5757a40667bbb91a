pub mod memory_store;
pub mod scylla_store;

pub use memory_store::InMemoryDocumentStore;
pub use scylla_store::ScyllaDocumentStore;
