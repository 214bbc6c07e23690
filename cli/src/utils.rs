//! Shared validation helpers.

use crate::{Error, Result};

const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Validates a project name for filesystem safety and Python naming conventions.
///
/// # Errors
/// Returns an error if the name is empty, starts with a digit or hyphen,
/// contains path traversal attempts or any character outside `[A-Za-z0-9_-]`.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name cannot be empty"));
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::invalid_name(name, "name cannot start with a digit"));
    }

    if name.starts_with('-') {
        return Err(Error::invalid_name(name, "name cannot start with a hyphen"));
    }

    // Security: prevent path traversal
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(Error::invalid_name(
            name,
            "name cannot contain path separators or relative paths",
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::invalid_name(
            name,
            "name can only contain alphanumeric characters, hyphens, and underscores",
        ));
    }

    Ok(())
}

/// Checks that the normalized package name is a usable Python identifier.
///
/// # Errors
/// Returns an error if the package name is empty, not an identifier, or a keyword.
pub fn validate_package_name(project_name: &str, package_name: &str) -> Result<()> {
    let is_identifier = package_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && package_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !is_identifier {
        return Err(Error::invalid_name(
            project_name,
            format!("'{package_name}' is not a valid Python package name"),
        ));
    }

    if PYTHON_KEYWORDS.contains(&package_name) {
        return Err(Error::invalid_name(
            project_name,
            format!("'{package_name}' is a Python keyword"),
        ));
    }

    Ok(())
}

/// Checks that a slash-separated relative path stays inside its root.
///
/// Returns the reason the path is rejected, if any.
pub fn check_relative_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path cannot be empty");
    }
    if path.starts_with('/') || path.starts_with('\\') || path.contains(':') {
        return Some("path must be relative");
    }
    if path.split(|c: char| c == '/' || c == '\\').any(|segment| segment == "..") {
        return Some("path cannot contain '..' segments");
    }
    if path.split('/').any(str::is_empty) {
        return Some("path cannot contain empty segments");
    }
    None
}
