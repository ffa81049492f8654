//! Configuration data types for gegeben.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::locale::Language;

/// Settings that shape generated step titles.
///
/// This structure is loaded from configuration files and environment
/// variables with layered precedence. The precedence order (lowest to
/// highest) is: defaults, configuration file, environment variables.
///
/// Configuration files are discovered in this order:
/// 1. Path specified via `GEGEBEN_CONFIG_PATH` environment variable
/// 2. `.gegeben.toml` in the current working directory
/// 3. `.gegeben.toml` in the home directory
/// 4. `~/.config/gegeben/config.toml` (XDG default)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig, SmartDefault)]
#[serde(default)]
#[ortho_config(
    prefix = "GEGEBEN",
    discovery(
        app_name = "gegeben",
        env_var = "GEGEBEN_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".gegeben.toml",
        config_cli_long = "config",
    )
)]
pub struct GegebenConfig {
    /// Language of the role words in front of generated titles.
    #[ortho_config(skip_cli)]
    pub language: Language,

    /// Append argument values to generated titles.
    #[default(true)]
    #[ortho_config(skip_cli)]
    pub include_inputs_in_title: bool,

    /// Humanise method names; when off, names are used verbatim.
    #[default(true)]
    #[ortho_config(skip_cli)]
    pub humanize_titles: bool,
}
