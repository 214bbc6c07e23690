//! Click-based command-line tool template.

use {
    super::{
        common,
        pyproject::{self, PyProject},
    },
    crate::{
        descriptor::{Category, FileSpec, RenderContext, TemplateDescriptor},
        Result,
    },
};

pub const CLI_PY: &str = include_str!("../../templates/cli_tool/cli.py.template");
pub const HELLO_PY: &str = include_str!("../../templates/cli_tool/hello.py.template");
pub const MAIN_PY: &str = include_str!("../../templates/cli_tool/main.py.template");
pub const TEST_CLI: &str = include_str!("../../templates/cli_tool/test_cli.py.template");

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::generated("src/{{package_name}}/__init__.py", common::package_init),
        FileSpec::text("src/{{package_name}}/cli.py", CLI_PY).when("cli"),
        FileSpec::text("src/{{package_name}}/__main__.py", MAIN_PY).when("cli"),
        FileSpec::dir("src/{{package_name}}/commands").when("cli"),
        FileSpec::text("src/{{package_name}}/commands/__init__.py", "").when("cli"),
        FileSpec::text("src/{{package_name}}/commands/hello.py", HELLO_PY).when("cli"),
    ];
    files.extend(common::test_files("tests/test_cli.py", TEST_CLI));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "cli-tool",
        name: "CLI Tool",
        description: "A command-line application built on click",
        category: Category::Cli,
        features: common::features(&["cli", "tests", "pypi_packaging"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            dependencies: &["click>=8.1"],
            console_script: true,
            ..PyProject::DEFAULT
        },
    )
}
