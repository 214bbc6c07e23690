//! Namespace package template.

use {
    super::{
        common,
        pyproject::{self, Layout, PyProject},
    },
    crate::{
        descriptor::{Category, FileSpec, RenderContext, TemplateDescriptor},
        Result,
    },
};

pub const GREETING_PY: &str = include_str!("../../templates/namespace/greeting.py.template");
pub const TEST_CORE: &str = include_str!("../../templates/namespace/test_core.py.template");

pub fn descriptor() -> TemplateDescriptor {
    // The namespace directory itself has no __init__.py.
    let mut files = vec![
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::dir("src/{{package_name}}/core"),
        FileSpec::generated("src/{{package_name}}/core/__init__.py", common::package_init),
        FileSpec::text("src/{{package_name}}/core/greeting.py", GREETING_PY),
    ];
    files.extend(common::test_files("tests/test_core.py", TEST_CORE));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "namespace-package",
        name: "Namespace Package",
        description: "A PEP 420 namespace package with a core subpackage",
        category: Category::Namespace,
        features: common::features(&["tests", "pypi_packaging"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            layout: Layout::Namespace,
            ..PyProject::DEFAULT
        },
    )
}
