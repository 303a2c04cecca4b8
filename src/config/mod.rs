//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors at once)
//!     → RouterConfig (validated, immutable)
//!     → settings.rs (ServerSettings: parsed durations, listen address)
//!     → HttpServer
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Durations stay strings in the schema and are parsed during validation
//! - Validation separates syntactic (serde) from semantic checks

pub mod duration;
pub mod loader;
pub mod schema;
pub mod settings;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouterConfig, ServerConfig};
pub use settings::ServerSettings;
pub use validation::{validate_config, ValidationError, ValidationErrors};
