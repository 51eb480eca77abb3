//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ToolCatalog` - Source of the declarative tool tables
//! - `CosmeticDelay` - Perceived-latency pause before results
//! - `SharePlatform` - Native share sheet and clipboard

mod cosmetic_delay;
mod share_platform;
mod tool_catalog;

pub use cosmetic_delay::CosmeticDelay;
pub use share_platform::{ShareError, SharePlatform};
pub use tool_catalog::{CatalogError, ToolCatalog};
