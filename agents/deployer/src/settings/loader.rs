use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::path::Path;

use config::{Config, Environment, File};
use eyre::{Context, Result};
use serde::de::DeserializeOwned;

/// Prefix of the environment variables overriding settings
pub(crate) const ENV_PREFIX: &str = "ITS";

/// Load a settings object from the config locations: every json file in
/// `config_dir`, then the files listed in `CONFIG_FILES`, then `ITS_*`
/// environment variables. Nested keys are separated by `__` in variable
/// names, e.g. `ITS_SIGNER__KEY`.
pub(crate) fn load_settings_object<T>(config_dir: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let config_file_paths: Vec<String> = env::var("CONFIG_FILES")
        .map(|s| s.split(',').map(|s| s.to_string()).collect())
        .unwrap_or_default();

    load_from_sources(config_dir, &config_file_paths, env::vars().collect())
}

pub(crate) fn load_from_sources<T>(
    config_dir: &Path,
    config_file_paths: &[String],
    env_vars: HashMap<String, String>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut base_config_sources = vec![];
    let mut builder = Config::builder();

    if config_dir.is_dir() {
        let mut entries = config_dir
            .read_dir()
            .with_context(|| format!("Failed to open config directory {config_dir:?}"))?
            .collect::<Result<Vec<_>, _>>()?;
        // Later files override earlier ones; keep that order stable.
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                base_config_sources.push(format!("{path:?}"));
                builder = builder.add_source(File::from(path));
            }
        }
    }

    let builder = config_file_paths.iter().fold(builder, |builder, path| {
        builder.add_source(File::with_name(path))
    });

    let config_deserializer = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(Some(env_vars)),
        )
        .build()?;

    match config_deserializer.try_deserialize::<T>() {
        Ok(cfg) => Ok(cfg),
        Err(err) => {
            let mut err = if let Some(source_err) = err.source() {
                let source = format!("Config error source: {source_err}");
                Err(err).context(source)
            } else {
                Err(err.into())
            };

            for cfg_path in base_config_sources.iter().chain(config_file_paths.iter()) {
                err = err.with_context(|| format!("Config loaded: {cfg_path}"));
            }
            err.context("Config deserialization error, please check the config reference")
        }
    }
}
