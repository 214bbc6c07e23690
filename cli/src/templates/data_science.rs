//! Data analysis project template.

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

pub const DATA_PY: &str = include_str!("../../templates/data_science/data.py.template");
pub const FEATURES_PY: &str = include_str!("../../templates/data_science/features.py.template");
pub const REQUIREMENTS: &str =
    include_str!("../../templates/data_science/requirements.txt.template");
pub const TEST_FEATURES: &str =
    include_str!("../../templates/data_science/test_features.py.template");
pub const EXPLORATION_NOTEBOOK: &[u8] =
    include_bytes!("../../templates/data_science/exploration.ipynb");

const NOTEBOOK_DEPENDENCIES: &[&str] = &["jupyterlab>=4.0", "ipykernel>=6.29"];

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("data/raw"),
        FileSpec::text("data/raw/.gitkeep", ""),
        FileSpec::dir("data/processed"),
        FileSpec::text("data/processed/.gitkeep", ""),
        FileSpec::dir("notebooks").when("notebooks"),
        FileSpec::verbatim("notebooks/01_exploration.ipynb", EXPLORATION_NOTEBOOK)
            .when("notebooks"),
        FileSpec::dir("src/{{package_name}}"),
        FileSpec::generated("src/{{package_name}}/__init__.py", common::package_init),
        FileSpec::text("src/{{package_name}}/data.py", DATA_PY),
        FileSpec::text("src/{{package_name}}/features.py", FEATURES_PY),
        FileSpec::text("requirements.txt", REQUIREMENTS),
    ];
    files.extend(common::test_files("tests/test_features.py", TEST_FEATURES));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "data-science-project",
        name: "Data Science Project",
        description: "Data directories, notebooks and an analysis package",
        category: Category::DataScience,
        features: common::features(&["notebooks", "tests", "pypi_packaging"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            dependencies: &["numpy>=1.26", "pandas>=2.2", "matplotlib>=3.8"],
            extra: Some(("notebooks", NOTEBOOK_DEPENDENCIES)),
            ..PyProject::DEFAULT
        },
    )
}
