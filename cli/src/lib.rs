//! pygen library interface.
//!
//! Generates Python project skeletons from a catalog of built-in templates.
//! [`ProjectGenerator`] is the entry point for programmatic use; the `pygen`
//! binary wraps it with argument parsing, `pygen.toml` support and console
//! output.
//!
//! ```no_run
//! use pygen_cli::{FeatureFlags, GenerateRequest, ProjectGenerator};
//!
//! let generator = ProjectGenerator::new()?;
//! let request = GenerateRequest::new("my-tool")
//!     .template("cli-tool")
//!     .features(FeatureFlags::enabled(["cli", "tests"]));
//! let outcome = generator.generate(&request);
//! assert!(outcome.success());
//! # Ok::<(), pygen_cli::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod features;
pub mod generator;
pub mod materialize;
pub mod metadata;
pub mod output;
pub mod placeholder;
pub mod resolve;
pub mod templates;

mod constants;
mod utils;

pub use {
    catalog::Catalog,
    cli::run,
    error::{Error, Result},
    features::FeatureFlags,
    generator::{GenerateRequest, GeneratedProject, Outcome, Plan, ProjectGenerator},
    metadata::Metadata,
};
