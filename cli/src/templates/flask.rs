//! Flask web application template.

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

pub const CONFIG_PY: &str = include_str!("../../templates/flask/config.py.template");
pub const ROUTES_PY: &str = include_str!("../../templates/flask/routes.py.template");
pub const BASE_HTML: &str = include_str!("../../templates/flask/base.html.template");
pub const INDEX_HTML: &str = include_str!("../../templates/flask/index.html.template");
pub const STYLE_CSS: &str = include_str!("../../templates/flask/style.css.template");
pub const FAVICON: &[u8] = include_bytes!("../../templates/flask/favicon.ico");
pub const RUN_PY: &str = include_str!("../../templates/flask/run.py.template");
pub const REQUIREMENTS: &str = include_str!("../../templates/flask/requirements.txt.template");
pub const TEST_APP: &str = include_str!("../../templates/flask/test_app.py.template");
pub const DOCKERFILE: &str = include_str!("../../templates/flask/dockerfile.template");

pub fn descriptor() -> TemplateDescriptor {
    let mut files = vec![
        FileSpec::dir("{{package_name}}"),
        FileSpec::generated("{{package_name}}/__init__.py", app_init),
        FileSpec::text("{{package_name}}/config.py", CONFIG_PY).when("web_framework"),
        FileSpec::text("{{package_name}}/routes.py", ROUTES_PY).when("web_framework"),
        FileSpec::dir("{{package_name}}/templates").when("web_framework"),
        FileSpec::text("{{package_name}}/templates/base.html", BASE_HTML).when("web_framework"),
        FileSpec::text("{{package_name}}/templates/index.html", INDEX_HTML)
            .when("web_framework"),
        FileSpec::dir("{{package_name}}/static").when("web_framework"),
        FileSpec::text("{{package_name}}/static/style.css", STYLE_CSS).when("web_framework"),
        FileSpec::verbatim("{{package_name}}/static/favicon.ico", FAVICON).when("web_framework"),
        FileSpec::text("run.py", RUN_PY).when("web_framework"),
        FileSpec::text("requirements.txt", REQUIREMENTS),
    ];
    files.extend(common::test_files("tests/test_app.py", TEST_APP));
    files.push(FileSpec::generated("pyproject.toml", pyproject_toml).when("pypi_packaging"));
    files.push(FileSpec::text("Dockerfile", DOCKERFILE).when("docker"));
    files.extend(common::project_files());

    TemplateDescriptor {
        id: "flask-web-app",
        name: "Flask Web Application",
        description: "A Flask app with an application factory, templates and static assets",
        category: Category::Web,
        features: common::features(&["web_framework", "tests", "pypi_packaging", "docker"]),
        files,
    }
}

/// Package initializer that doubles as the application factory when the
/// framework scaffolding is on.
fn app_init(ctx: &RenderContext<'_>) -> Result<String> {
    let mut body = common::package_init(ctx)?;
    if !ctx.features.is_enabled("web_framework") {
        return Ok(body);
    }

    let vars = ctx.variables;
    body.push_str(&format!(
        r#"
from flask import Flask


def create_app(config_object: str = "{package}.config.{class}Config") -> Flask:
    app = Flask(__name__)
    app.config.from_object(config_object)

    from {package}.routes import bp

    app.register_blueprint(bp)
    return app
"#,
        package = vars.package_name,
        class = vars.class_name,
    ));
    Ok(body)
}

fn pyproject_toml(ctx: &RenderContext<'_>) -> Result<String> {
    pyproject::render(
        ctx,
        &PyProject {
            layout: Layout::Flat,
            dependencies: &["flask>=3.0"],
            ..PyProject::DEFAULT
        },
    )
}
