//! Template listing command.

use crate::{catalog::Catalog, output, Result};

/// Prints every template with its type and description, or the whole
/// listing as JSON.
///
/// # Errors
/// Returns an error if the catalog cannot be built or serialized.
pub fn run(json: bool) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let listing = catalog.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    output::header("Available templates:");
    for (id, info) in &listing {
        println!("  {id:<22} {:<13} {}", info.kind.as_str(), info.description);
    }
    println!("\nRun 'pygen show <TEMPLATE>' to see a template's features.");

    Ok(())
}
