//! Template inspection command.

use crate::{catalog::Catalog, output, Result};

/// Prints a template's features and the files each one controls.
///
/// # Errors
/// Returns `UnknownTemplate` if `template` is not in the catalog.
pub fn run(template: &str) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let descriptor = catalog.get(template)?;

    output::header(format_args!("{} ({})", descriptor.name, descriptor.id));
    output::row("type", descriptor.category.as_str(), None);
    output::row("about", descriptor.description, None);

    output::header("Features:");
    for feature in &descriptor.features {
        let files = descriptor
            .files
            .iter()
            .filter(|spec| spec.guard == Some(*feature))
            .count();
        output::row(feature, format_args!("{files} entries"), None);
    }

    output::header("Files:");
    for spec in &descriptor.files {
        let guard = spec.guard.map(|feature| format!("[{feature}]"));
        output::row(&spec.kind().to_string(), spec.path, guard.as_deref());
    }

    Ok(())
}
