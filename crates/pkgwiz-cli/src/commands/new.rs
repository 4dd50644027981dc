//! Implementation of the `pkgwiz new` command.
//!
//! Responsibility: merge CLI arguments with config, build the template
//! registry, hand it to the core scaffold service, and display outcomes.
//! The write-or-skip decision itself lives in `pkgwiz-core`.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use pkgwiz_adapters::{LocalFilesystem, PackageOptions, python_package_registry};
use pkgwiz_core::{
    application::ScaffoldService,
    domain::{OverrideSet, ScaffoldReport, TemplateRegistry, WriteAction},
    error::WizardError,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pkgwiz new` command.
///
/// 1. Resolve options (flags over config over defaults)
/// 2. Build the registry; this validates the package and module names
/// 3. Build and validate the override set
/// 4. Preview (`--dry-run`) or materialize
/// 5. Print one line per file, then a summary
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = package_options(&args, &config);
    let registry = python_package_registry(&options).map_err(WizardError::from)?;
    let overrides = resolve_overrides(&args, &config, &registry)?;
    let root = package_root(&args);

    debug!(
        root = %root.display(),
        image = %options.docker_image,
        modules = options.modules.len(),
        overrides = overrides.len(),
        "Options resolved"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let report = service.preview(&registry, &root, &overrides);
        if !output.is_json() {
            output.info(&format!("Dry run: nothing is written to {}", root.display()))?;
        }
        output.report(&report)?;
        return summarise(&report, &output, true);
    }

    if !output.is_json() {
        output.header(&format!("Generating '{}' in {}", args.name, root.display()))?;
    }

    match service.materialize_all(&registry, &root, &overrides) {
        Ok(report) => {
            output.report(&report)?;
            info!(package = %args.name, files = report.len(), "Package ready");
            summarise(&report, &output, false)?;
            if !global.quiet && !output.is_json() && report.created_count() > 0 {
                output.print("")?;
                output.print("Next steps:")?;
                output.print(&format!("  cd {}", root.display()))?;
                output.print("  pip install -e .[dev]")?;
                output.print("  pkgwiz publish-help   # when you are ready to release")?;
            }
            Ok(())
        }
        Err(failure) => {
            // Whatever was written before the error is reported too.
            output.report(&failure.completed)?;
            Err(CliError::Scaffold(failure))
        }
    }
}

/// Merge flags, config and built-in defaults into template options.
fn package_options(args: &NewArgs, config: &AppConfig) -> PackageOptions {
    let defaults = &config.defaults;
    let mut options = PackageOptions::new(&args.name)
        .with_docker_image(
            args.image
                .clone()
                .unwrap_or_else(|| defaults.docker_image.clone()),
        );

    if let Some(author) = args.author.clone().or_else(|| defaults.author.clone()) {
        options.author = author;
    }
    if let Some(email) = args.email.clone().or_else(|| defaults.author_email.clone()) {
        options.author_email = email;
    }

    for module in &args.modules {
        if !options.modules.contains(module) {
            options = options.with_module(module);
        }
    }

    options
}

/// `--force` selects every id; otherwise `--override` plus
/// `defaults.overrides`. Unknown ids are rejected before anything is
/// written.
fn resolve_overrides(
    args: &NewArgs,
    config: &AppConfig,
    registry: &TemplateRegistry,
) -> CliResult<OverrideSet> {
    let overrides: OverrideSet = if args.force {
        registry.ids().cloned().collect()
    } else {
        args.overrides
            .iter()
            .chain(&config.defaults.overrides)
            .map(String::as_str)
            .collect()
    };

    registry
        .check_overrides(&overrides)
        .map_err(WizardError::from)?;

    Ok(overrides)
}

fn package_root(args: &NewArgs) -> PathBuf {
    args.output.join(&args.name)
}

fn summarise(report: &ScaffoldReport, output: &OutputManager, dry_run: bool) -> CliResult<()> {
    if output.is_json() {
        return Ok(());
    }
    let overwritten = report
        .iter()
        .filter(|o| o.action == WriteAction::Overwritten)
        .count();
    let fresh = report.created_count() - overwritten;
    let skipped = report.skipped_count();

    let line = if dry_run {
        format!("{fresh} to create, {overwritten} to overwrite, {skipped} to skip")
    } else {
        format!("{fresh} created, {overwritten} overwritten, {skipped} skipped")
    };
    output.success(&line)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pkgwiz_core::domain::{DomainError, FileId};

    use crate::cli::{Cli, Commands};

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["pkgwiz", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.defaults.docker_image = "python:3.11".into();
        config.defaults.author = Some("Config Author".into());

        let options = package_options(
            &new_args(&["pkg", "--image", "python:3.12", "--email", "me@example.org"]),
            &config,
        );

        assert_eq!(options.docker_image, "python:3.12");
        assert_eq!(options.author, "Config Author");
        assert_eq!(options.author_email, "me@example.org");
    }

    #[test]
    fn repeated_modules_are_deduplicated() {
        let options = package_options(
            &new_args(&["pkg", "-m", "io", "-m", "core", "-m", "io"]),
            &AppConfig::default(),
        );
        assert_eq!(options.modules, vec!["io", "core"]);
    }

    #[test]
    fn config_overrides_merge_with_flags() {
        let mut config = AppConfig::default();
        config.defaults.overrides = vec!["license".into()];
        let args = new_args(&["pkg", "--override", "gitignore"]);
        let registry = python_package_registry(&package_options(&args, &config)).unwrap();

        let overrides = resolve_overrides(&args, &config, &registry).unwrap();

        assert!(overrides.contains(&FileId::from("gitignore")));
        assert!(overrides.contains(&FileId::from("license")));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn force_overrides_every_file() {
        let args = new_args(&["pkg", "--force", "-m", "io"]);
        let config = AppConfig::default();
        let registry = python_package_registry(&package_options(&args, &config)).unwrap();

        let overrides = resolve_overrides(&args, &config, &registry).unwrap();

        assert_eq!(overrides.len(), registry.len());
        assert!(overrides.contains(&FileId::from("module-init:io")));
    }

    #[test]
    fn unknown_override_is_rejected() {
        let args = new_args(&["pkg", "--override", "README.md"]);
        let config = AppConfig::default();
        let registry = python_package_registry(&package_options(&args, &config)).unwrap();

        let err = resolve_overrides(&args, &config, &registry).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(WizardError::Domain(DomainError::UnknownFileId { .. }))
        ));
    }

    #[test]
    fn root_is_output_joined_with_name() {
        let args = new_args(&["data-tools", "--output", "/tmp/work"]);
        assert_eq!(package_root(&args), PathBuf::from("/tmp/work/data-tools"));
    }
}
