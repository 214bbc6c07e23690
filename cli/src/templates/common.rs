//! Files and generators shared by every template.

use crate::{
    descriptor::{FileSpec, RenderContext},
    Result,
};

pub const README: &str = include_str!("../../templates/common/readme.md.template");
pub const LICENSE: &str = include_str!("../../templates/common/license.template");
pub const CHANGELOG: &str = include_str!("../../templates/common/changelog.md.template");
pub const CONTRIBUTORS: &str = include_str!("../../templates/common/contributors.md.template");
pub const CODE_OF_CONDUCT: &str =
    include_str!("../../templates/common/code_of_conduct.md.template");
pub const SECURITY: &str = include_str!("../../templates/common/security.md.template");
pub const GITIGNORE: &str = include_str!("../../templates/common/gitignore.template");
pub const PRE_COMMIT: &str =
    include_str!("../../templates/common/pre-commit-config.yaml.template");
pub const CI_WORKFLOW: &str = include_str!("../../templates/common/ci.yml.template");
pub const MANIFEST_IN: &str = include_str!("../../templates/common/manifest.in.template");
pub const CLI_PY: &str = include_str!("../../templates/common/cli.py.template");
pub const MAIN_PY: &str = include_str!("../../templates/common/main.py.template");
pub const TEST_PACKAGE: &str = include_str!("../../templates/common/test_package.py.template");

/// Project-level features every template offers.
pub const PROJECT_FEATURES: [&str; 9] = [
    "readme",
    "license",
    "changelog",
    "gitignore",
    "contributors",
    "code_of_conduct",
    "security",
    "github_actions",
    "pre_commit",
];

/// Template-specific features followed by the shared project features.
pub fn features(specific: &[&'static str]) -> Vec<&'static str> {
    specific
        .iter()
        .copied()
        .chain(PROJECT_FEATURES)
        .collect()
}

/// Top-level documentation and tooling files, each behind its own feature.
pub fn project_files() -> Vec<FileSpec> {
    vec![
        FileSpec::text("README.md", README).when("readme"),
        FileSpec::text("LICENSE", LICENSE).when("license"),
        FileSpec::text("CHANGELOG.md", CHANGELOG).when("changelog"),
        FileSpec::text(".gitignore", GITIGNORE).when("gitignore"),
        FileSpec::text("CONTRIBUTORS.md", CONTRIBUTORS).when("contributors"),
        FileSpec::text("CODE_OF_CONDUCT.md", CODE_OF_CONDUCT).when("code_of_conduct"),
        FileSpec::text("SECURITY.md", SECURITY).when("security"),
        FileSpec::text(".pre-commit-config.yaml", PRE_COMMIT).when("pre_commit"),
        FileSpec::dir(".github/workflows").when("github_actions"),
        FileSpec::text(".github/workflows/ci.yml", CI_WORKFLOW).when("github_actions"),
    ]
}

/// The `tests/` package with a single test module.
pub fn test_files(module_path: &'static str, body: &'static str) -> Vec<FileSpec> {
    vec![
        FileSpec::dir("tests").when("tests"),
        FileSpec::text("tests/__init__.py", "").when("tests"),
        FileSpec::text(module_path, body).when("tests"),
    ]
}

/// Quotes `value` as a Python string literal.
pub fn py_str(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Escapes text for a `"""`-delimited docstring. Every quote is escaped so a
/// trailing `"` cannot merge with the closing delimiter.
fn docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `__version__`, `__author__` and `__email__` assignments.
///
/// # Errors
/// Returns an error if the version is empty.
pub fn version_block(ctx: &RenderContext<'_>) -> Result<String> {
    let vars = ctx.variables;
    let version = vars.version.trim();
    if version.is_empty() {
        return Err(anyhow::anyhow!("version must not be empty").into());
    }

    Ok(format!(
        "__version__ = {}\n__author__ = {}\n__email__ = {}\n",
        py_str(version)?,
        py_str(&vars.author)?,
        py_str(&vars.email)?,
    ))
}

/// Package initializer carrying the description and release metadata.
pub fn package_init(ctx: &RenderContext<'_>) -> Result<String> {
    Ok(format!(
        "\"\"\"{}\"\"\"\n\n{}",
        docstring(&ctx.variables.description),
        version_block(ctx)?
    ))
}
