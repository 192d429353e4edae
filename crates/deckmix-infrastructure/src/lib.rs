pub mod config_service;
pub mod json_document_store;
pub mod memory_document_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_document_store::JsonDocumentStore;
pub use crate::memory_document_store::InMemoryDocumentStore;
pub use crate::paths::DeckmixPaths;
