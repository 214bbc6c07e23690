//! The template catalog.

use {
    crate::{
        descriptor::{TemplateDescriptor, TemplateInfo},
        templates, utils, Error, Result,
    },
    std::collections::{BTreeMap, HashSet},
};

/// Registry of template descriptors keyed by identifier.
///
/// Built once through [`Catalog::builtin`] (or by registering descriptors by
/// hand) and read-only afterwards, so it can be shared freely across threads.
#[derive(Debug, Default)]
pub struct Catalog {
    templates: BTreeMap<&'static str, TemplateDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog holding every built-in template.
    ///
    /// # Errors
    /// Returns an error if two built-in templates share an id or declare an
    /// invalid file spec.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for descriptor in templates::builtin() {
            catalog.register(descriptor)?;
        }
        Ok(catalog)
    }

    /// Adds a descriptor after checking its file specs.
    ///
    /// # Errors
    /// Returns `DuplicateTemplate` if the id is taken, or `InvalidFileSpec` if a
    /// path escapes the project root, appears twice, or is guarded by a
    /// feature the template does not declare.
    pub fn register(&mut self, descriptor: TemplateDescriptor) -> Result<()> {
        if self.templates.contains_key(descriptor.id) {
            return Err(Error::DuplicateTemplate(descriptor.id.to_string()));
        }

        check_file_specs(&descriptor)?;

        self.templates.insert(descriptor.id, descriptor);
        Ok(())
    }

    /// Looks a template up by exact, case-sensitive id.
    ///
    /// # Errors
    /// Returns `UnknownTemplate` if no template has that id.
    pub fn get(&self, id: &str) -> Result<&TemplateDescriptor> {
        self.templates
            .get(id)
            .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
    }

    pub fn list(&self) -> BTreeMap<&'static str, TemplateInfo> {
        self.templates
            .iter()
            .map(|(id, descriptor)| (*id, descriptor.info()))
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn check_file_specs(descriptor: &TemplateDescriptor) -> Result<()> {
    let invalid = |path: &str, reason: &str| Error::InvalidFileSpec {
        template: descriptor.id.to_string(),
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let mut seen = HashSet::new();
    for spec in &descriptor.files {
        if let Some(reason) = utils::check_relative_path(spec.path) {
            return Err(invalid(spec.path, reason));
        }

        if !seen.insert(spec.path) {
            return Err(invalid(spec.path, "path is declared more than once"));
        }

        if let Some(guard) = spec.guard {
            if !descriptor.supports(guard) {
                return Err(invalid(
                    spec.path,
                    &format!("guard '{guard}' is not a declared feature"),
                ));
            }
        }
    }

    Ok(())
}
