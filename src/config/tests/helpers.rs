//! Shared fixtures and helper functions for config tests.

use std::collections::HashMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use mockable::MockEnv;
use ortho_config::MergeComposer;
use rstest::fixture;
use tempfile::TempDir;

use crate::config::GegebenConfig;

/// Fixture providing a `GegebenConfig` parsed from a full TOML example.
#[fixture]
pub fn config_from_full_toml() -> GegebenConfig {
    let toml = r#"
        language = "en"
        include_inputs_in_title = false
        humanize_titles = false
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing a `GegebenConfig` parsed from a partial TOML example.
#[fixture]
pub fn config_from_partial_toml() -> GegebenConfig {
    toml::from_str("humanize_titles = false").expect("TOML parsing should succeed")
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> Result<MergeComposer, serde_json::Error> {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(GegebenConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `GegebenConfig`.
pub fn merge_config(
    composer: MergeComposer,
) -> Result<GegebenConfig, Arc<ortho_config::OrthoError>> {
    GegebenConfig::merge_from_layers(composer.layers())
}

/// Helper: Builds a `MockEnv` answering from `vars` and `None` otherwise.
pub fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let values: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .returning(move |key| values.get(key).cloned());
    env
}

/// Helper: Writes `contents` to `name` in a fresh temporary directory.
pub fn write_config_file(name: &str, contents: &str) -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let root = Utf8Path::from_path(dir.path())
        .expect("temp dir path should be UTF-8")
        .to_owned();
    let path = root.join(name);
    std::fs::write(&path, contents).expect("config file should be written");
    (dir, path)
}
