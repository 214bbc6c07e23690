//! Application-wide constants.

pub const CONFIG_FILE: &str = "pygen.toml";
pub const DEFAULT_TEMPLATE: &str = "minimal-python";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_EMAIL: &str = "you@example.com";
pub const DEFAULT_DESCRIPTION: &str = "A Python project";
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Features the `generate` command turns on before applying config and flags.
pub const DEFAULT_FEATURES: [&str; 5] = ["tests", "pypi_packaging", "readme", "license", "gitignore"];
