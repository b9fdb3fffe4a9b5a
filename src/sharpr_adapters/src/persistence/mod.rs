pub mod hashmap_document_store;
pub mod postgres_document_store;
pub mod rest_document_store;

pub use hashmap_document_store::HashMapDocumentStore;
pub use postgres_document_store::{PostgresDocumentStore, configure_postgresql, get_postgres_pool};
pub use rest_document_store::RestDocumentStore;
