//! Project metadata supplied by the caller.

use {
    crate::constants::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_EMAIL, DEFAULT_VERSION},
    serde::{Deserialize, Serialize},
};

/// Author and release information injected into generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub author: String,
    pub email: String,
    pub description: String,
    /// Usually a dotted numeric string. Not format-checked.
    pub version: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Metadata {
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
