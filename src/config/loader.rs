//! Configuration loading with layered precedence.
//!
//! Layers, lowest to highest: defaults, configuration file, environment
//! variables. Layers are composed with `MergeComposer` directly so that
//! environment values are parsed with fail-fast validation and read through
//! [`mockable::Env`].
//!
//! # Environment Variable Handling
//!
//! Typed variables must hold a valid value or loading fails:
//! `GEGEBEN_LANGUAGE=fr` or `GEGEBEN_HUMANIZE_TITLES=maybe` are reported as
//! `ConfigError::InvalidValue` instead of silently falling back to defaults.

use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use ortho_config::discovery::ConfigDiscovery;
use ortho_config::serde_json::{self, Map, Value};
use ortho_config::{MergeComposer, toml};

use crate::config::GegebenConfig;
use crate::error::{ConfigError, Result};
use crate::locale::Language;

/// Variable naming an explicit configuration file.
const CONFIG_PATH_VAR: &str = "GEGEBEN_CONFIG_PATH";

/// The type of value expected from an environment variable.
#[derive(Clone, Copy)]
enum EnvVarType {
    /// Boolean value (`true`/`false`).
    Bool,
    /// Language code (`de`/`en`).
    Language,
}

/// Specification for a single environment variable mapping.
struct EnvVarSpec {
    /// The environment variable name.
    env_var: &'static str,
    /// The configuration field it sets.
    field: &'static str,
    /// The expected value type.
    var_type: EnvVarType,
}

const ENV_VAR_SPECS: &[EnvVarSpec] = &[
    EnvVarSpec {
        env_var: "GEGEBEN_LANGUAGE",
        field: "language",
        var_type: EnvVarType::Language,
    },
    EnvVarSpec {
        env_var: "GEGEBEN_INCLUDE_INPUTS_IN_TITLE",
        field: "include_inputs_in_title",
        var_type: EnvVarType::Bool,
    },
    EnvVarSpec {
        env_var: "GEGEBEN_HUMANIZE_TITLES",
        field: "humanize_titles",
        var_type: EnvVarType::Bool,
    },
];

/// Returns the environment variable names recognised by the loader.
///
/// Includes `GEGEBEN_CONFIG_PATH`, so tests can clear every variable the
/// loader might read.
#[must_use]
pub fn env_var_names() -> Vec<&'static str> {
    ENV_VAR_SPECS
        .iter()
        .map(|spec| spec.env_var)
        .chain(std::iter::once(CONFIG_PATH_VAR))
        .collect()
}

/// Load configuration from defaults, a discovered file and the environment.
///
/// The file is taken from `GEGEBEN_CONFIG_PATH` when set, otherwise from the
/// first existing discovery candidate (`.gegeben.toml`, then
/// `gegeben/config.toml` under the XDG configuration directory).
///
/// # Errors
///
/// Returns `ConfigError` when `GEGEBEN_CONFIG_PATH` names a missing file, a
/// file cannot be read or parsed, or an environment variable holds an invalid
/// value.
pub fn load_config<E: mockable::Env>(env: &E) -> Result<GegebenConfig> {
    let explicit = env
        .string(CONFIG_PATH_VAR)
        .filter(|value| !value.is_empty())
        .map(Utf8PathBuf::from);
    let path = explicit.or_else(discover_config_file);
    load_config_from(path.as_deref(), env)
}

/// Load configuration using `path` as the file layer.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` when `path` does not exist, and the
/// errors of [`load_config`] otherwise.
pub fn load_config_from<E: mockable::Env>(
    path: Option<&Utf8Path>,
    env: &E,
) -> Result<GegebenConfig> {
    let mut composer = MergeComposer::new();

    let defaults =
        serde_json::to_value(GegebenConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    if let Some(file) = path {
        if !file.exists() {
            return Err(ConfigError::FileNotFound {
                path: PathBuf::from(file.as_std_path()),
            }
            .into());
        }
        load_config_file(file, &mut composer)?;
    }

    let env_values = collect_env_vars(env)?;
    if !env_values.is_null() {
        composer.push_environment(env_values);
    }

    let config =
        GegebenConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;
    log::debug!("loaded configuration {config:?}");
    Ok(config)
}

fn discover_config_file() -> Option<Utf8PathBuf> {
    ConfigDiscovery::builder("gegeben")
        .config_file_name("config.toml")
        .dotfile_name(".gegeben.toml")
        .build()
        .candidates()
        .into_iter()
        .filter(|candidate| candidate.exists())
        .find_map(|candidate| Utf8PathBuf::try_from(candidate).ok())
}

/// Read a TOML file through `cap_std` and push it as the file layer.
fn load_config_file(path: &Utf8Path, composer: &mut MergeComposer) -> Result<()> {
    let current_dir = Utf8PathBuf::from(".");
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| current_dir.as_ref());
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ParseError {
            message: format!("failed to read {path}: {e}"),
        })?;

    let value = toml::from_str::<Value>(&content).map_err(|e| ConfigError::ParseError {
        message: format!("failed to parse {path}: {e}"),
    })?;

    composer.push_file(value, Some(path.to_owned()));
    Ok(())
}

/// Collect the recognised `GEGEBEN_*` variables into a JSON object.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for the first variable whose value does
/// not parse as its declared type.
fn collect_env_vars<E: mockable::Env>(env: &E) -> Result<Value> {
    let mut root = Map::new();

    for spec in ENV_VAR_SPECS {
        let Some(raw_value) = env.string(spec.env_var) else {
            continue;
        };
        let json_value = parse_env_value(spec, &raw_value)?;
        root.insert(spec.field.to_owned(), json_value);
    }

    if root.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(root))
    }
}

fn parse_env_value(spec: &EnvVarSpec, raw_value: &str) -> Result<Value> {
    let trimmed = raw_value.trim();
    let parsed = match spec.var_type {
        EnvVarType::Bool => trimmed
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| format!("expected bool (true/false), got '{raw_value}'")),
        EnvVarType::Language => trimmed
            .parse::<Language>()
            .map(|language| Value::String(language.code().to_owned()))
            .map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| {
        ConfigError::InvalidValue {
            field: spec.env_var.to_owned(),
            reason,
        }
        .into()
    })
}
