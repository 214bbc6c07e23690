//! Template descriptors and the file-spec model.

use {
    crate::{features::FeatureFlags, placeholder::Variables, Result},
    serde::Serialize,
    std::fmt,
};

/// Computes file content from the variables and features of one generation.
pub type Generator = fn(&RenderContext<'_>) -> Result<String>;

/// Everything a generator or the substitution engine may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub variables: &'a Variables,
    pub features: &'a FeatureFlags,
}

/// Broad kind of project a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Web,
    Cli,
    DataScience,
    Library,
    Extension,
    Namespace,
    Plugin,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Cli => "cli",
            Category::DataScience => "data-science",
            Category::Library => "library",
            Category::Extension => "extension",
            Category::Namespace => "namespace",
            Category::Plugin => "plugin",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a file spec materializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Verbatim,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileKind::File => "file",
            FileKind::Directory => "dir",
            FileKind::Verbatim => "verbatim",
        })
    }
}

/// Where the bytes of a file spec come from.
#[derive(Clone, Copy)]
pub enum Content {
    Directory,
    /// Static text with placeholders.
    Text(&'static str),
    /// Copied byte for byte, never substituted.
    Verbatim(&'static [u8]),
    Generated(Generator),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Directory => f.write_str("Directory"),
            Content::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Content::Verbatim(bytes) => f.debug_tuple("Verbatim").field(&bytes.len()).finish(),
            Content::Generated(_) => f.write_str("Generated"),
        }
    }
}

/// One entry a template wants to create.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    /// Slash-separated path relative to the project root. May contain placeholders.
    pub path: &'static str,
    /// Feature that must be on for this entry to be included.
    pub guard: Option<&'static str>,
    pub content: Content,
}

impl FileSpec {
    pub fn text(path: &'static str, text: &'static str) -> Self {
        Self {
            path,
            guard: None,
            content: Content::Text(text),
        }
    }

    pub fn dir(path: &'static str) -> Self {
        Self {
            path,
            guard: None,
            content: Content::Directory,
        }
    }

    pub fn verbatim(path: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            path,
            guard: None,
            content: Content::Verbatim(bytes),
        }
    }

    pub fn generated(path: &'static str, generator: Generator) -> Self {
        Self {
            path,
            guard: None,
            content: Content::Generated(generator),
        }
    }

    /// Only include this entry when `feature` is on.
    pub fn when(mut self, feature: &'static str) -> Self {
        self.guard = Some(feature);
        self
    }

    pub fn kind(&self) -> FileKind {
        match self.content {
            Content::Directory => FileKind::Directory,
            Content::Verbatim(_) => FileKind::Verbatim,
            Content::Text(_) | Content::Generated(_) => FileKind::File,
        }
    }

    pub fn is_included(&self, features: &FeatureFlags) -> bool {
        self.guard.map_or(true, |feature| features.is_enabled(feature))
    }
}

/// A named blueprint: metadata plus the ordered file specs it expands to.
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub features: Vec<&'static str>,
    pub files: Vec<FileSpec>,
}

impl TemplateDescriptor {
    pub fn supports(&self, feature: &str) -> bool {
        self.features.contains(&feature)
    }

    /// Discovery view used by `list`.
    pub fn info(&self) -> TemplateInfo {
        TemplateInfo {
            name: self.name,
            description: self.description,
            kind: self.category,
            features: self.features.clone(),
        }
    }
}

/// Name, description, type and features of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: Category,
    pub features: Vec<&'static str>,
}
