//! Built-in Python package template set.
//!
//! [`python_package_registry`] renders every file body for one package and
//! returns the registry the scaffold service consumes. The registry is built
//! once per run; nothing here touches the filesystem.

mod content;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Datelike;
use pkgwiz_core::domain::{
    DomainError, DomainValidator, Permissions, RenderContext, TemplateEntry, TemplateRegistry,
    module_name,
};
use tracing::{debug, instrument};

/// Base image used when the caller does not pick one.
pub const DEFAULT_DOCKER_IMAGE: &str = "python:3.9-slim";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";

/// Prefix of the ids generated for `--module` stubs.
pub const MODULE_INIT_PREFIX: &str = "module-init:";

/// Everything that varies between two generated packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    pub package_name: String,
    pub docker_image: String,
    pub modules: Vec<String>,
    pub author: String,
    pub author_email: String,
    pub year: i32,
}

impl PackageOptions {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            docker_image: DEFAULT_DOCKER_IMAGE.to_string(),
            modules: Vec::new(),
            author: DEFAULT_AUTHOR.to_string(),
            author_email: DEFAULT_AUTHOR_EMAIL.to_string(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_docker_image(mut self, image: impl Into<String>) -> Self {
        self.docker_image = image.into();
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.push(module.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = author.into();
        self.author_email = email.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn render_context(&self) -> RenderContext {
        RenderContext::new(&self.package_name)
            .with_variable("DOCKER_IMAGE", &self.docker_image)
            .with_variable("AUTHOR", &self.author)
            .with_variable("AUTHOR_EMAIL", &self.author_email)
            .with_variable("YEAR", self.year.to_string())
    }
}

/// Build the registry for a Python package.
///
/// Paths are relative to the package root. The import package directory is
/// the package name with hyphens replaced by underscores.
///
/// # Errors
///
/// - `InvalidPackageName` if the package or a sub-module name is not a
///   usable Python identifier.
/// - `InvalidPackageName` if two sub-modules differ only in `-` versus `_`.
/// - `DuplicateTemplateId` if the same sub-module is requested twice.
#[instrument(skip_all, fields(package = %options.package_name, modules = options.modules.len()))]
pub fn python_package_registry(
    options: &PackageOptions,
) -> Result<TemplateRegistry, DomainError> {
    DomainValidator::validate_package_name(&options.package_name)?;
    let mut import_names: HashMap<String, &str> = HashMap::new();
    for module in &options.modules {
        DomainValidator::validate_package_name(module)?;
        if let Some(other) = import_names.insert(module_name(module), module.as_str()) {
            if other != module.as_str() {
                return Err(DomainError::InvalidPackageName {
                    name: module.clone(),
                    reason: format!("imports as the same directory as '{other}'"),
                });
            }
        }
    }

    let ctx = options.render_context();
    let module_dir = PathBuf::from(module_name(&options.package_name));

    let entry =
        |id: &str, path: PathBuf, body: &str| TemplateEntry::new(id, path, ctx.render(body));

    let mut builder = TemplateRegistry::builder()
        .directory(module_dir.clone())
        .directory("tests")
        .directory(".devcontainer")
        .directory(".github/workflows")
        .entry(entry("gitignore", ".gitignore".into(), content::GITIGNORE)?)
        .entry(entry("readme", "README.md".into(), content::README)?)
        .entry(entry("requirements", "requirements.txt".into(), content::REQUIREMENTS)?)
        .entry(entry(
            "dev-requirements",
            "dev_requirements.txt".into(),
            content::DEV_REQUIREMENTS,
        )?)
        .entry(entry("setup", "setup.py".into(), content::SETUP_PY)?)
        .entry(entry("license", "LICENSE".into(), content::LICENSE)?)
        .entry(entry(
            "package-init",
            module_dir.join("__init__.py"),
            content::PACKAGE_INIT,
        )?)
        .entry(entry("tests-init", "tests/__init__.py".into(), content::TESTS_INIT)?)
        .entry(entry(
            "devcontainer-json",
            ".devcontainer/devcontainer.json".into(),
            content::DEVCONTAINER_JSON,
        )?)
        .entry(entry(
            "dockerfile",
            ".devcontainer/Dockerfile".into(),
            content::DOCKERFILE,
        )?)
        .entry(entry(
            "devcontainer-env",
            ".devcontainer/devcontainer.env".into(),
            content::DEVCONTAINER_ENV,
        )?)
        .entry(
            entry(
                "post-create",
                ".devcontainer/post-create.sh".into(),
                content::POST_CREATE_SH,
            )?
            .with_permissions(Permissions::executable()),
        )
        .entry(entry(
            "publish-workflow",
            ".github/workflows/publish.yml".into(),
            content::PUBLISH_WORKFLOW,
        )?)
        .entry(entry(
            "pre-commit-config",
            ".pre-commit-config.yaml".into(),
            content::PRE_COMMIT_CONFIG,
        )?);

    for module in &options.modules {
        let dir = module_dir.join(module_name(module));
        let body = ctx
            .clone()
            .with_variable("SUBMODULE", module.as_str())
            .render(content::SUBMODULE_INIT);
        builder = builder.directory(dir.clone()).entry(TemplateEntry::new(
            format!("{MODULE_INIT_PREFIX}{module}"),
            dir.join("__init__.py"),
            body,
        )?);
    }

    let registry = builder.build()?;
    debug!(entries = registry.len(), "python package registry built");
    Ok(registry)
}
