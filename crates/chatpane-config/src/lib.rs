//! chatpane configuration system.
//!
//! TOML-based configuration for a chat widget: remote endpoint, model
//! selector choices, persona, and logging. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatpane_config::{load_default, validation};
//!
//! let config = load_default().expect("failed to load config");
//! validation::validate(&config).expect("invalid config");
//! println!("{}", config.endpoint.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChatpaneConfig, EndpointConfig, LogLevel, LoggingConfig, ModelsConfig, PayloadMode,
    PersonaConfig,
};
pub use toml_loader::{load_default, load_from_path};
