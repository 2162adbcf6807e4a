//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_error_log_repository;
mod jsonl_error_log_repository;
mod shared_secret_token_verifier;
mod static_catalog_repository;

pub use in_memory_error_log_repository::InMemoryErrorLogRepository;
pub use jsonl_error_log_repository::JsonlErrorLogRepository;
pub use shared_secret_token_verifier::SharedSecretTokenVerifier;
pub use static_catalog_repository::StaticCatalogRepository;
