//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PKGWIZ_<SECTION>__<KEY>`, e.g.
//!    `PKGWIZ_DEFAULTS__DOCKER_IMAGE=python:3.12-slim`
//! 3. `--config FILE` if given
//! 4. `.pkgwiz.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pkgwiz_adapters::templates::DEFAULT_DOCKER_IMAGE;

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".pkgwiz.toml";

const ENV_PREFIX: &str = "PKGWIZ";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new packages.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub docker_image: String,
    pub author: Option<String>,
    pub author_email: Option<String>,
    /// File ids overridden on every `new`, in addition to `--override`.
    pub overrides: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            docker_image: DEFAULT_DOCKER_IMAGE.into(),
            author: None,
            author_email: None,
            overrides: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the process environment.
    ///
    /// A missing user or local config file is not an error; a missing
    /// `--config` file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            config_file.map(PathBuf::as_path),
            Path::new(LOCAL_CONFIG_FILE),
            None,
        )
    }

    /// [`Self::load`] with explicit inputs. `env` replaces the process
    /// environment when given.
    pub fn load_from(
        config_file: Option<&Path>,
        local_file: &Path,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to seed default config")?,
            )
            .add_source(toml_file(&Self::config_path()).required(false))
            .add_source(toml_file(local_file).required(false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "using explicit config file");
            builder = builder.add_source(toml_file(path).required(true));
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("defaults.overrides")
            .source(env);

        builder
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pkgwiz.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "pkgwiz", "pkgwiz")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, the format every config file uses.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Config files are TOML whatever their extension.
fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn no_local() -> PathBuf {
        PathBuf::from("/nonexistent/pkgwiz/.pkgwiz.toml")
    }

    #[test]
    fn default_image_is_python_slim() {
        assert_eq!(AppConfig::default().defaults.docker_image, "python:3.9-slim");
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = AppConfig::load_from(None, &no_local(), env(&[])).unwrap();
        assert_eq!(cfg.defaults, Defaults::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_layer_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[defaults]\nauthor = \"Ada\"\noverrides = [\"gitignore\"]\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(path.as_path()), &no_local(), env(&[])).unwrap();

        assert_eq!(cfg.defaults.author.as_deref(), Some("Ada"));
        assert_eq!(cfg.defaults.overrides, vec!["gitignore"]);
        assert_eq!(cfg.defaults.docker_image, DEFAULT_DOCKER_IMAGE);
    }

    #[test]
    fn environment_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&local, "[defaults]\ndocker_image = \"python:3.11\"\n").unwrap();

        let cfg = AppConfig::load_from(
            None,
            &local,
            env(&[
                ("PKGWIZ_DEFAULTS__DOCKER_IMAGE", "python:3.12-slim"),
                ("PKGWIZ_DEFAULTS__OVERRIDES", "setup,license"),
                ("PKGWIZ_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.defaults.docker_image, "python:3.12-slim");
        assert_eq!(cfg.defaults.overrides, vec!["setup", "license"]);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_file_without_extension_is_read_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("myconf");
        fs::write(&path, "[defaults]\ndocker_image = \"python:3.13\"\n").unwrap();

        let cfg = AppConfig::load_from(Some(path.as_path()), &no_local(), env(&[])).unwrap();
        assert_eq!(cfg.defaults.docker_image, "python:3.13");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_from(
            Some(Path::new("/nonexistent/pkgwiz.toml")),
            &no_local(),
            env(&[]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn serialised_defaults_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load_from(Some(path.as_path()), &no_local(), env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }
}
