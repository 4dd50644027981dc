//! `pkgwiz init`: create a default configuration file.
//!
//! The file goes through the same write-or-skip rule as generated package
//! files: an existing config is kept unless `--force` is given.

use std::path::{Path, PathBuf};

use pkgwiz_adapters::LocalFilesystem;
use pkgwiz_core::{
    application::{FileMaterializer, ports::Filesystem},
    domain::{FileId, WriteAction, WriteOutcome},
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create a default pkgwiz configuration file.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };
    output.info(&format!("Initialising configuration at {}", path.display()))?;

    let outcome = write_default_config(&LocalFilesystem::new(), &path, args.force)?;

    match outcome.action {
        WriteAction::Created => {
            output.success(&format!("Configuration created at {}", path.display()))?
        }
        WriteAction::Overwritten => {
            output.success(&format!("Configuration replaced at {}", path.display()))?
        }
        WriteAction::Skipped => output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?,
    }

    Ok(())
}

/// Serialise [`AppConfig::default`] to `path`, creating its parent.
fn write_default_config(
    filesystem: &dyn Filesystem,
    path: &Path,
    force: bool,
) -> CliResult<WriteOutcome> {
    let toml = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        filesystem.create_dir_all(parent)?;
    }

    let outcome =
        FileMaterializer::new(filesystem).materialize(&FileId::from("config"), path, &toml, force)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgwiz_adapters::MemoryFilesystem;

    fn config_path() -> PathBuf {
        PathBuf::from("/home/ada/.config/pkgwiz/config.toml")
    }

    #[test]
    fn creates_parent_and_file() {
        let memfs = MemoryFilesystem::new();

        let outcome = write_default_config(&memfs, &config_path(), false).unwrap();

        assert_eq!(outcome.action, WriteAction::Created);
        assert!(memfs.is_dir(Path::new("/home/ada/.config/pkgwiz")));
        let written = memfs.read_file(&config_path()).unwrap();
        assert!(written.contains("[defaults]"));
        assert!(written.contains("python:3.9-slim"));
    }

    #[test]
    fn existing_config_is_kept_without_force() {
        let memfs = MemoryFilesystem::new();
        memfs.insert_file(config_path(), "[defaults]\nauthor = \"Ada\"\n");

        let outcome = write_default_config(&memfs, &config_path(), false).unwrap();

        assert_eq!(outcome.action, WriteAction::Skipped);
        assert_eq!(
            memfs.read_file(&config_path()).unwrap(),
            "[defaults]\nauthor = \"Ada\"\n"
        );
    }

    #[test]
    fn force_replaces_existing_config() {
        let memfs = MemoryFilesystem::new();
        memfs.insert_file(config_path(), "stale");

        let outcome = write_default_config(&memfs, &config_path(), true).unwrap();

        assert_eq!(outcome.action, WriteAction::Overwritten);
        assert_ne!(memfs.read_file(&config_path()).unwrap(), "stale");
    }
}
