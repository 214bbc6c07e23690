//! Feature-aware expansion of a template into a concrete, rendered tree.

use {
    crate::{
        descriptor::{Content, FileSpec, RenderContext, TemplateDescriptor},
        features::FeatureFlags,
        placeholder, utils, Error, Result,
    },
    std::{collections::HashSet, path::PathBuf},
};

/// Bytes to write for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Directory,
    File(Vec<u8>),
}

/// One rendered entry, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Slash-separated, placeholders already substituted.
    pub path: String,
    pub payload: Payload,
}

impl ResolvedEntry {
    /// The path as a platform path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        self.path.split('/').collect()
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.payload, Payload::Directory)
    }
}

/// Ordered entries ready for the materializer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTree {
    pub entries: Vec<ResolvedEntry>,
}

impl ResolvedTree {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Files only, skipping directory markers.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().filter_map(|entry| match &entry.payload {
            Payload::File(bytes) => Some((entry.path.as_str(), bytes.as_slice())),
            Payload::Directory => None,
        })
    }
}

impl<'a> IntoIterator for &'a ResolvedTree {
    type Item = &'a ResolvedEntry;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Selects the specs whose guard holds, in declared order.
pub fn resolve<'a>(
    descriptor: &'a TemplateDescriptor,
    features: &FeatureFlags,
) -> Vec<&'a FileSpec> {
    descriptor
        .files
        .iter()
        .filter(|spec| spec.is_included(features))
        .collect()
}

/// Renders every selected spec before anything touches the disk.
///
/// # Errors
/// Returns `InvalidFileSpec` if a rendered path leaves the project root or is
/// produced by two specs, and `Render` if a generator fails.
pub fn render_tree(
    template: &str,
    specs: &[&FileSpec],
    ctx: &RenderContext<'_>,
) -> Result<ResolvedTree> {
    let invalid = |path: String, reason: &str| Error::InvalidFileSpec {
        template: template.to_string(),
        path,
        reason: reason.to_string(),
    };

    let mut entries = Vec::with_capacity(specs.len());
    let mut seen = HashSet::with_capacity(specs.len());

    for spec in specs {
        let path = placeholder::render(spec.path, ctx.variables);
        if let Some(reason) = utils::check_relative_path(&path) {
            return Err(invalid(path, reason));
        }
        // Names like `tests` can fold a package path onto a fixed one.
        if !seen.insert(path.clone()) {
            return Err(invalid(path, "rendered path collides with another entry"));
        }

        let payload = match spec.content {
            Content::Directory => Payload::Directory,
            Content::Text(text) => {
                Payload::File(placeholder::render(text, ctx.variables).into_bytes())
            }
            Content::Verbatim(bytes) => Payload::File(bytes.to_vec()),
            Content::Generated(generator) => {
                let text = generator(ctx).map_err(|e| Error::render(&path, e.to_string()))?;
                Payload::File(text.into_bytes())
            }
        };

        entries.push(ResolvedEntry { path, payload });
    }

    Ok(ResolvedTree { entries })
}
