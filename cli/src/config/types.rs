//! Configuration type definitions.

use {
    crate::{
        constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE},
        features::FeatureFlags,
        metadata::Metadata,
    },
    serde::Deserialize,
    std::path::PathBuf,
};

/// Main configuration structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Feature values applied before any command-line flag.
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Fallbacks for `generate` options left off the command line.
#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
