//! Plugin framework template.

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

pub const BASE_PY: &str = include_str!("../../templates/plugin/base.py.template");
pub const REGISTRY_PY: &str = include_str!("../../templates/plugin/registry.py.template");
pub const HELLO_PY: &str = include_str!("../../templates/plugin/hello.py.template");
pub const TEST_REGISTRY: &str = include_str!("../../templates/plugin/test_registry.py.template");

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::generated("src/{{package_name}}/__init__.py", common::package_init),
        FileSpec::text("src/{{package_name}}/base.py", BASE_PY),
        FileSpec::text("src/{{package_name}}/registry.py", REGISTRY_PY),
        FileSpec::dir("src/{{package_name}}/plugins"),
        FileSpec::text("src/{{package_name}}/plugins/__init__.py", ""),
        FileSpec::text("src/{{package_name}}/plugins/hello.py", HELLO_PY),
    ];
    files.extend(common::test_files("tests/test_registry.py", TEST_REGISTRY));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "plugin-framework",
        name: "Plugin Framework",
        description: "A host package that discovers plugins through entry points",
        category: Category::Plugin,
        features: common::features(&["tests", "pypi_packaging"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            plugin: Some(("hello", "plugins.hello:HelloPlugin")),
            ..PyProject::DEFAULT
        },
    )
}
