//! Implementation of the `pkgwiz list` command.

use serde::Serialize;

use pkgwiz_adapters::{PackageOptions, python_package_registry};
use pkgwiz_core::{domain::TemplateRegistry, error::WizardError};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

/// Name the listing is rendered for; paths show `package/` as the import dir.
const SAMPLE_PACKAGE: &str = "package";

/// One row of `pkgwiz list`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ListedFile {
    id: String,
    path: String,
    executable: bool,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let registry =
        python_package_registry(&PackageOptions::new(SAMPLE_PACKAGE)).map_err(WizardError::from)?;
    let files = listed_files(&registry);

    match args.format {
        ListFormat::Table => {
            output.header("Generated files:")?;
            let width = files.iter().map(|f| f.id.len()).max().unwrap_or(0);
            for file in &files {
                let marker = if file.executable { "  (executable)" } else { "" };
                output.print(&format!("  {:<width$}  {}{marker}", file.id, file.path))?;
            }
            output.print("")?;
            output.print("  module-init:<NAME> is added once per --module NAME")?;
        }
        ListFormat::List => {
            for file in &files {
                output.print(&file.id)?;
            }
        }
        ListFormat::Json => output.json(&files)?,
    }

    Ok(())
}

fn listed_files(registry: &TemplateRegistry) -> Vec<ListedFile> {
    registry
        .entries()
        .iter()
        .map(|entry| ListedFile {
            id: entry.id().to_string(),
            path: entry.relative_path().to_string(),
            executable: entry.permissions().executable_flag(),
        })
        .collect()
}
