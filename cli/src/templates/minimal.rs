//! Minimal Python package template.

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

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::generated("src/{{package_name}}/__init__.py", common::package_init),
        FileSpec::text("src/{{package_name}}/py.typed", "").when("type_hints"),
        FileSpec::text("src/{{package_name}}/cli.py", common::CLI_PY).when("cli"),
        FileSpec::text("src/{{package_name}}/__main__.py", common::MAIN_PY).when("cli"),
    ];
    files.extend(common::test_files(
        "tests/test_{{package_name}}.py",
        common::TEST_PACKAGE,
    ));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.push(FileSpec::text("MANIFEST.in", common::MANIFEST_IN).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "minimal-python",
        name: "Minimal Python Package",
        description: "A src-layout package with optional CLI, tests and packaging",
        category: Category::Library,
        features: common::features(&["cli", "tests", "pypi_packaging", "type_hints"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            console_script: true,
            ..PyProject::DEFAULT
        },
    )
}
