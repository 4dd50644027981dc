use std::collections::HashMap;

use crate::domain::validation::module_name;

/// Context for literal placeholder substitution.
///
/// Immutable after creation; [`RenderContext::with_variable`] returns a new
/// instance.
///
/// ## Built-in Variables
///
/// | Variable       | Example        | Source     |
/// |----------------|----------------|------------|
/// | `PACKAGE_NAME` | "data-tools"   | User input |
/// | `MODULE_NAME`  | "data_tools"   | Computed   |
///
/// Anything else (`DOCKER_IMAGE`, `AUTHOR`, `YEAR`, ...) is supplied by the
/// caller.
#[derive(Debug, Clone)]
pub struct RenderContext {
    package_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(package_name: impl Into<String>) -> Self {
        let name = package_name.into();
        let mut vars = HashMap::new();

        vars.insert("PACKAGE_NAME".to_string(), name.clone());
        vars.insert("MODULE_NAME".to_string(), module_name(&name));

        Self {
            package_name: name,
            variables: vars,
        }
    }

    /// Add a variable, consuming self. Later values replace earlier ones,
    /// including built-ins.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder with its value.
    ///
    /// Unknown placeholders are left as-is. Only the exact `{{KEY}}` form is
    /// recognised, so `${{ secrets.X }}` in workflow files passes through.
    /// The template is scanned once: substituted values are never expanded
    /// again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let value = after
                .find("}}")
                .and_then(|end| self.variables.get(&after[..end]).map(|v| (end, v)));

            match value {
                Some((end, value)) => {
                    result.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    result.push_str("{{");
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }
}
