//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Tool tables embedded in the binary or read from a directory
//! - `delay` - Cosmetic "generating results" pause (tokio sleep, no-op)
//! - `share` - In-memory share sheet and clipboard
//! - `http` - Axum REST API

pub mod catalog;
pub mod delay;
pub mod http;
pub mod share;

pub use catalog::{DirectoryCatalog, EmbeddedCatalog};
pub use delay::{NoDelay, TokioDelay};
pub use share::InMemorySharePlatform;
