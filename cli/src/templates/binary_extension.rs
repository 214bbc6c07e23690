//! C extension module template.

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

pub const SPEEDUPS_C: &str = include_str!("../../templates/binary_extension/speedups.c.template");
pub const EXT_INIT: &str = include_str!("../../templates/binary_extension/ext_init.py.template");
pub const SETUP_PY: &str = include_str!("../../templates/binary_extension/setup.py.template");
pub const TEST_SPEEDUPS: &str =
    include_str!("../../templates/binary_extension/test_speedups.py.template");

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::generated("src/{{package_name}}/__init__.py", common::package_init),
        FileSpec::dir("src/{{package_name}}/ext"),
        FileSpec::text("src/{{package_name}}/ext/__init__.py", EXT_INIT),
        FileSpec::text("src/{{package_name}}/ext/_speedups.c", SPEEDUPS_C),
    ];
    files.extend(common::test_files("tests/test_speedups.py", TEST_SPEEDUPS));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.push(FileSpec::text("setup.py", SETUP_PY).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "binary-extension",
        name: "Binary Extension",
        description: "A package with a compiled C extension module",
        category: Category::Extension,
        features: common::features(&["tests", "pypi_packaging"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(ctx, &PyProject::DEFAULT)
}
