//! Placeholder substitution for template text.
//!
//! Tokens look like `{{name}}` and come from a closed set of names. Anything
//! else between the delimiters, including spaced Jinja expressions such as
//! `{{ title }}`, is copied through as literal text.

use {
    crate::{metadata::Metadata, utils, Result},
    heck::{ToSnakeCase, ToUpperCamelCase},
    std::fmt,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A recognized placeholder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    PackageName,
    ClassName,
    Author,
    Email,
    Description,
    Version,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::ProjectName,
        Placeholder::PackageName,
        Placeholder::ClassName,
        Placeholder::Author,
        Placeholder::Email,
        Placeholder::Description,
        Placeholder::Version,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::ProjectName => "project_name",
            Placeholder::PackageName => "package_name",
            Placeholder::ClassName => "class_name",
            Placeholder::Author => "author",
            Placeholder::Email => "email",
            Placeholder::Description => "description",
            Placeholder::Version => "version",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The token as it appears in template text, e.g. `{{version}}`.
    pub fn token(self) -> String {
        format!("{OPEN}{}{CLOSE}", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full variable set available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    pub project_name: String,
    pub package_name: String,
    pub class_name: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub version: String,
}

impl Variables {
    /// Validates `project_name` and derives the package and class names from it.
    ///
    /// # Errors
    /// Returns `InvalidProjectName` if the name is not filesystem and identifier safe.
    pub fn derive(project_name: &str, metadata: &Metadata) -> Result<Self> {
        utils::validate_project_name(project_name)?;

        let package_name = project_name.to_snake_case();
        utils::validate_package_name(project_name, &package_name)?;

        Ok(Self {
            project_name: project_name.to_string(),
            class_name: package_name.to_upper_camel_case(),
            package_name,
            author: metadata.author.clone(),
            email: metadata.email.clone(),
            description: metadata.description.clone(),
            version: metadata.version.clone(),
        })
    }

    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::ProjectName => &self.project_name,
            Placeholder::PackageName => &self.package_name,
            Placeholder::ClassName => &self.class_name,
            Placeholder::Author => &self.author,
            Placeholder::Email => &self.email,
            Placeholder::Description => &self.description,
            Placeholder::Version => &self.version,
        }
    }
}

/// Replaces every recognized placeholder in `text` in a single pass.
///
/// Substituted values are never scanned again, so a value containing
/// `{{author}}` ends up in the output verbatim.
pub fn render(text: &str, variables: &Variables) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let replaced = after_open.find(CLOSE).and_then(|end| {
            Placeholder::from_name(&after_open[..end]).map(|p| (p, end))
        });

        match replaced {
            Some((placeholder, end)) => {
                out.push_str(variables.get(placeholder));
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // Step one brace so `{{{version}}` still finds the token.
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the recognized placeholders still present in `text`.
pub fn unresolved(text: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| text.contains(&p.token()))
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_variables() -> Variables {
    Variables {
        project_name: "my-proj".to_string(),
        package_name: "my_proj".to_string(),
        class_name: "MyProj".to_string(),
        author: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        description: "A sample project".to_string(),
        version: "2.5.0".to_string(),
    }
}
