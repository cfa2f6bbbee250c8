//! Schema loader adapters.
//!
//! - `HttpSchemaLoader` - Fetches the schema with reqwest
//! - `StaticSchemaLoader` - Compiles an in-memory or on-disk schema

mod http_schema_loader;
mod static_schema_loader;

pub use http_schema_loader::{HttpSchemaLoader, DEFAULT_SCHEMA_TIMEOUT};
pub use static_schema_loader::StaticSchemaLoader;
