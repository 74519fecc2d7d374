//! Configuration loader using figment.
//!
//! # Configuration Priority (lowest to highest)
//!
//! 1. Built-in defaults
//! 2. Programmatic overrides passed to [`ConfigLoader::merge`]
//! 3. Config file: an explicit [`ConfigLoader::file`], or the first of
//!    `tessera.toml` / `config.toml` found on the search paths
//! 4. Environment variables (`TESSERA_*`)
//!
//! When no search path is given, the current directory and
//! `<user config dir>/tessera` are searched.
//!
//! # Environment Variable Mapping
//!
//! Environment variables use the `TESSERA_` prefix with `__` as the nesting
//! separator:
//!
//! - `TESSERA_BOT__TOKEN=xxx` → `bot.token = "xxx"`
//! - `TESSERA_BOT__RESPOND_TO_SELF=true` → `bot.respond_to_self = true`
//! - `TESSERA_LOGGING__LEVEL=debug` → `logging.level = "debug"`
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera_runtime::config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .file("./deploy/tessera.toml")
//!     .load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(feature = "toml-config")]
use figment::providers::{Format, Toml};
use figment::providers::{Env, Serialized};
use tracing::{debug, info, trace, warn};

use super::error::{ConfigError, ConfigResult};
use super::schema::TesseraConfig;
use super::validation::validate_config;

/// File names searched for on each search path, in order.
const CONFIG_FILE_NAMES: &[&str] = &["tessera.toml", "config.toml"];

/// Prefix of environment variables read by the loader.
const ENV_PREFIX: &str = "TESSERA_";

/// Layered configuration loader.
pub struct ConfigLoader {
    figment: Figment,
    search_paths: Vec<PathBuf>,
    config_file: Option<PathBuf>,
    load_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            search_paths: Vec::new(),
            config_file: None,
            load_env: true,
        }
    }

    /// Adds a directory to search for config files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Loads exactly this file instead of searching.
    ///
    /// Loading fails with [`ConfigError::FileNotFound`] if it is missing.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disables reading `TESSERA_*` environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Merges configuration values programmatically.
    pub fn merge(mut self, config: TesseraConfig) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(config));
        self
    }

    /// Loads and validates the configuration.
    pub fn load(self) -> ConfigResult<TesseraConfig> {
        let figment = self.build_figment()?;
        let config: TesseraConfig = figment.extract()?;
        validate_config(&config)?;

        debug!(
            logging_level = %config.logging.level,
            has_token = config.bot.token.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }

    fn build_figment(mut self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(TesseraConfig::default()));
        figment = figment.merge(std::mem::take(&mut self.figment));

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            info!(path = %path.display(), "Loading configuration file");
            figment = merge_config_file(figment, path)?;
        } else if let Some(path) = self.find_config_file() {
            info!(path = %path.display(), "Loading configuration file");
            figment = merge_config_file(figment, &path)?;
        } else {
            warn!("No configuration file found, using defaults");
        }

        if self.load_env {
            trace!("Loading environment variables with {ENV_PREFIX} prefix");
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        Ok(figment)
    }

    fn resolve_search_paths(&self) -> Vec<PathBuf> {
        if !self.search_paths.is_empty() {
            return self.search_paths.clone();
        }

        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd);
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("tessera"));
        }
        paths
    }

    fn find_config_file(&self) -> Option<PathBuf> {
        self.resolve_search_paths()
            .into_iter()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|path| path.is_file())
    }
}

fn merge_config_file(figment: Figment, path: &Path) -> ConfigResult<Figment> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        #[cfg(feature = "toml-config")]
        "toml" => Ok(figment.merge(Toml::file(path))),
        _ => Err(ConfigError::Parse(format!(
            "Unsupported or disabled configuration file format: .{ext}"
        ))),
    }
}

/// Loads configuration from the default locations.
pub fn load_config() -> ConfigResult<TesseraConfig> {
    ConfigLoader::new().load()
}

/// Loads configuration from `path`, with environment overrides.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<TesseraConfig> {
    ConfigLoader::new().file(path).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BotConfig, LogLevel, LogOutput};
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config, TesseraConfig::default());
            Ok(())
        });
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "tessera.toml",
                r#"
                [bot]
                token = "from-file"
                prefix = "t."

                [logging]
                level = "debug"
                [logging.filters]
                tessera_framework = "trace"
                "#,
            )?;
            jail.set_env("TESSERA_BOT__TOKEN", "from-env");
            jail.set_env("TESSERA_BOT__RESPOND_TO_SELF", "true");

            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.bot.token.as_deref(), Some("from-env"));
            assert_eq!(config.bot.prefix, "t.");
            assert!(config.bot.respond_to_self);
            assert!(config.bot.respond_to_others);
            assert_eq!(config.logging.level, LogLevel::Debug);
            assert_eq!(
                config.logging.filters.get("tessera_framework"),
                Some(&LogLevel::Trace)
            );
            Ok(())
        });
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_config_toml_is_fallback_name() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[bot]\nprefix = \"?\"\n")?;
            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .load()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.bot.prefix, "?");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = ConfigLoader::new()
            .file("/definitely/not/here/tessera.toml")
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_invalid_file_fails_validation() {
        Jail::expect_with(|jail| {
            jail.create_file("tessera.toml", "[logging]\noutput = \"file\"\n")?;
            let result = ConfigLoader::new()
                .file(jail.directory().join("tessera.toml"))
                .without_env()
                .load();
            assert!(matches!(result, Err(ConfigError::Validation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_merge_overrides_defaults() {
        Jail::expect_with(|jail| {
            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .merge(TesseraConfig {
                    bot: BotConfig {
                        prefix: "t.".into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.bot.prefix, "t.");
            assert_eq!(config.logging.output, LogOutput::Stdout);
            Ok(())
        });
    }
}
