//! Configuration for title generation.
//!
//! Loading and precedence merging is handled by the `ortho_config` crate.
//! Precedence: environment variables override configuration files, which
//! override defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! language = "en"
//! include_inputs_in_title = false
//! humanize_titles = true
//! ```

mod loader;
mod types;


pub use loader::{env_var_names, load_config, load_config_from};
pub use types::GegebenConfig;
