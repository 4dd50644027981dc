use crate::domain::{
    entities::{OverrideSet, TemplateRegistry},
    error::DomainError,
};

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `name` can become a Python import package.
    ///
    /// Hyphens are accepted and mapped to underscores (see [`module_name`]);
    /// everything else must already be a valid identifier.
    pub fn validate_package_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidPackageName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }

        let module = module_name(name);
        let mut chars = module.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return Err(invalid("name must start with a letter or underscore")),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(
                "only ASCII letters, digits, '-' and '_' are allowed",
            ));
        }

        Ok(())
    }

    pub fn validate_overrides(
        registry: &TemplateRegistry,
        overrides: &OverrideSet,
    ) -> Result<(), DomainError> {
        registry.check_overrides(overrides)
    }
}

/// Import name for a distribution name: `data-tools` becomes `data_tools`.
pub fn module_name(package_name: &str) -> String {
    package_name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["pkg", "my_package", "data-tools", "_private", "utils2"] {
            assert!(
                DomainValidator::validate_package_name(name).is_ok(),
                "{name} should be valid"
            );
        }
    }

    #[test]
    fn invalid_names_fail() {
        for name in ["", ".hidden", "a/b", "2fast", "has space", "naïve", "a.b"] {
            assert!(
                DomainValidator::validate_package_name(name).is_err(),
                "{name} should be invalid"
            );
        }
    }

    #[test]
    fn module_name_replaces_hyphens() {
        assert_eq!(module_name("data-tools"), "data_tools");
        assert_eq!(module_name("plain"), "plain");
    }
}
