//! FastAPI web service template.

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

pub const MAIN_PY: &str = include_str!("../../templates/fastapi/main.py.template");
pub const HEALTH_PY: &str = include_str!("../../templates/fastapi/health.py.template");
pub const MODELS_PY: &str = include_str!("../../templates/fastapi/models.py.template");
pub const REQUIREMENTS: &str = include_str!("../../templates/fastapi/requirements.txt.template");
pub const TEST_API: &str = include_str!("../../templates/fastapi/test_api.py.template");
pub const DOCKERFILE: &str = include_str!("../../templates/fastapi/dockerfile.template");

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("{{package_name}}"),
        FileSpec::generated("{{package_name}}/__init__.py", common::package_init),
        FileSpec::text("{{package_name}}/main.py", MAIN_PY).when("web_framework"),
        FileSpec::text("{{package_name}}/models.py", MODELS_PY).when("web_framework"),
        FileSpec::dir("{{package_name}}/routers").when("web_framework"),
        FileSpec::text("{{package_name}}/routers/__init__.py", "").when("web_framework"),
        FileSpec::text("{{package_name}}/routers/health.py", HEALTH_PY).when("web_framework"),
        FileSpec::text("requirements.txt", REQUIREMENTS),
    ];
    files.extend(common::test_files("tests/test_api.py", TEST_API));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.push(FileSpec::text("Dockerfile", DOCKERFILE).when("docker"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "fastapi-web-api",
        name: "FastAPI Web API",
        description: "A FastAPI service with routers, pydantic models and a health check",
        category: Category::Web,
        features: common::features(&["web_framework", "tests", "pypi_packaging", "docker"]),
        files,
    }
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            layout: Layout::Flat,
            dependencies: &["fastapi>=0.110", "uvicorn[standard]>=0.29"],
            test_dependencies: &["pytest>=8.0", "httpx>=0.27"],
            ..PyProject::DEFAULT
        },
    )
}
