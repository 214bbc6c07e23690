//! Library-level tests for project generation.

use {
    assert_fs::{prelude::*, TempDir},
    predicates::prelude::*,
    pygen_cli::{
        placeholder, templates, Error, FeatureFlags, GenerateRequest, Metadata, ProjectGenerator,
    },
    std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
    },
    walkdir::WalkDir,
};

fn metadata() -> Metadata {
    Metadata::default()
        .with_author("Jane Doe")
        .with_email("jane@example.com")
        .with_description("A test project for feature flags")
        .with_version("2.5.0")
}

fn generate(temp: &TempDir, name: &str, template: &str, features: FeatureFlags) -> PathBuf {
    let generator = ProjectGenerator::new().unwrap();
    let request = GenerateRequest::new(name)
        .output_dir(temp.path())
        .template(template)
        .features(features)
        .metadata(metadata());
    let outcome = generator.generate(&request);
    assert!(outcome.success(), "{template} failed: {:?}", outcome.error());
    temp.path().join(name)
}

fn all_features(template: &str) -> FeatureFlags {
    let generator = ProjectGenerator::new().unwrap();
    let descriptor = generator.catalog().get(template).unwrap();
    FeatureFlags::enabled(descriptor.features.iter().copied())
}

/// Every file under `root` keyed by its path relative to `root`.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(entry.path()).unwrap())
        })
        .collect()
}

fn template_ids() -> Vec<&'static str> {
    ProjectGenerator::new().unwrap().catalog().ids().collect()
}

#[test]
fn test_every_template_generates_with_defaults() {
    for template in template_ids() {
        let temp = TempDir::new().unwrap();
        let generator = ProjectGenerator::new().unwrap();
        let request = GenerateRequest::new("sample_project")
            .output_dir(temp.path())
            .template(template);

        assert!(generator.generate(&request).success(), "{template} failed");

        let files = snapshot(&temp.path().join("sample_project"));
        assert!(!files.is_empty(), "{template} created an empty project");
        let init = files
            .iter()
            .find(|(path, _)| path.ends_with("__init__.py") && path.components().count() > 1)
            .map(|(_, body)| String::from_utf8_lossy(body).into_owned());
        let init = init.unwrap_or_else(|| panic!("{template} has no package initializer"));
        assert!(init.contains("0.1.0"), "{template} initializer lacks the version");
    }
}

#[test]
fn test_no_placeholder_survives_in_any_template() {
    for template in template_ids() {
        let temp = TempDir::new().unwrap();
        let root = generate(&temp, "full-project", template, all_features(template));

        for (path, body) in snapshot(&root) {
            let Ok(text) = String::from_utf8(body) else {
                continue;
            };
            let left = placeholder::unresolved(&text);
            assert!(left.is_empty(), "{template}: {} still has {left:?}", path.display());
        }
    }
}

#[test]
fn test_each_minimal_feature_adds_its_files() {
    let cases = [
        ("cli", "src/flag_test_project/cli.py"),
        ("tests", "tests"),
        ("pypi_packaging", "pyproject.toml"),
        ("readme", "README.md"),
        ("license", "LICENSE"),
        ("changelog", "CHANGELOG.md"),
        ("gitignore", ".gitignore"),
        ("contributors", "CONTRIBUTORS.md"),
        ("code_of_conduct", "CODE_OF_CONDUCT.md"),
        ("security", "SECURITY.md"),
        ("github_actions", ".github/workflows/ci.yml"),
        ("pre_commit", ".pre-commit-config.yaml"),
        ("type_hints", "src/flag_test_project/py.typed"),
    ];

    for (feature, path) in cases {
        let on = TempDir::new().unwrap();
        generate(&on, "flag_test_project", "minimal-python", FeatureFlags::enabled([feature]));
        on.child("flag_test_project")
            .child(path)
            .assert(predicate::path::exists());

        let off = TempDir::new().unwrap();
        let features: FeatureFlags = [(feature, false)].into_iter().collect();
        generate(&off, "flag_test_project", "minimal-python", features);
        off.child("flag_test_project")
            .child(path)
            .assert(predicate::path::missing());

        let omitted = TempDir::new().unwrap();
        generate(&omitted, "flag_test_project", "minimal-python", FeatureFlags::new());
        omitted
            .child("flag_test_project")
            .child(path)
            .assert(predicate::path::missing());
    }
}

/// Template-specific features and one path each controls.
const TEMPLATE_FEATURES: &[(&str, &str, &str)] = &[
    ("minimal-python", "cli", "src/switch_project/__main__.py"),
    ("minimal-python", "tests", "tests/test_switch_project.py"),
    ("minimal-python", "pypi_packaging", "MANIFEST.in"),
    ("minimal-python", "type_hints", "src/switch_project/py.typed"),
    ("cli-tool", "cli", "src/switch_project/commands/hello.py"),
    ("cli-tool", "tests", "tests/test_cli.py"),
    ("cli-tool", "pypi_packaging", "pyproject.toml"),
    ("flask-web-app", "web_framework", "switch_project/config.py"),
    ("flask-web-app", "tests", "tests/test_app.py"),
    ("flask-web-app", "pypi_packaging", "pyproject.toml"),
    ("flask-web-app", "docker", "Dockerfile"),
    ("fastapi-web-api", "web_framework", "switch_project/routers/health.py"),
    ("fastapi-web-api", "tests", "tests/test_api.py"),
    ("fastapi-web-api", "pypi_packaging", "pyproject.toml"),
    ("fastapi-web-api", "docker", "Dockerfile"),
    ("data-science-project", "notebooks", "notebooks/01_exploration.ipynb"),
    ("data-science-project", "tests", "tests/test_features.py"),
    ("data-science-project", "pypi_packaging", "pyproject.toml"),
    ("binary-extension", "tests", "tests/test_speedups.py"),
    ("binary-extension", "pypi_packaging", "setup.py"),
    ("namespace-package", "tests", "tests/test_core.py"),
    ("namespace-package", "pypi_packaging", "pyproject.toml"),
    ("plugin-framework", "tests", "tests/test_registry.py"),
    ("plugin-framework", "pypi_packaging", "pyproject.toml"),
];

#[test]
fn test_template_features_table_is_complete() {
    let generator = ProjectGenerator::new().unwrap();
    for template in template_ids() {
        let descriptor = generator.catalog().get(template).unwrap();
        for feature in &descriptor.features {
            if templates::common::PROJECT_FEATURES.contains(feature) {
                continue;
            }
            assert!(
                TEMPLATE_FEATURES
                    .iter()
                    .any(|(t, f, _)| *t == template && f == feature),
                "{template} feature {feature} has no case"
            );
        }
    }
}

#[test]
fn test_each_template_feature_toggles_its_files() {
    for &(template, feature, path) in TEMPLATE_FEATURES {
        let on = TempDir::new().unwrap();
        generate(&on, "switch_project", template, FeatureFlags::enabled([feature]));
        assert!(
            on.path().join("switch_project").join(path).exists(),
            "{template}: {feature}=true should create {path}"
        );

        let off = TempDir::new().unwrap();
        let features: FeatureFlags = [(feature, false)].into_iter().collect();
        generate(&off, "switch_project", template, features);
        assert!(
            !off.path().join("switch_project").join(path).exists(),
            "{template}: {feature}=false should not create {path}"
        );

        let omitted = TempDir::new().unwrap();
        generate(&omitted, "switch_project", template, FeatureFlags::new());
        assert!(
            !omitted.path().join("switch_project").join(path).exists(),
            "{template}: omitting {feature} should not create {path}"
        );
    }
}

#[test]
fn test_package_name_colliding_with_tests_dir_is_rejected() {
    let generator = ProjectGenerator::new().unwrap();
    for template in ["flask-web-app", "fastapi-web-api"] {
        let temp = TempDir::new().unwrap();
        let request = GenerateRequest::new("tests")
            .output_dir(temp.path())
            .template(template)
            .features(FeatureFlags::enabled(["tests"]));

        let outcome = generator.generate(&request);

        assert!(!outcome.success(), "{template} should refuse the name 'tests'");
        assert!(matches!(outcome.error(), Some(Error::InvalidFileSpec { .. })));
        temp.child("tests").assert(predicate::path::missing());
    }
}

#[test]
fn test_package_name_tests_without_test_suite() {
    let temp = TempDir::new().unwrap();
    generate(&temp, "tests", "flask-web-app", FeatureFlags::new());
    temp.child("tests/tests/__init__.py")
        .assert(predicate::str::contains("__version__ = \"2.5.0\""));
}

#[test]
fn test_unrelated_features_combine() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "combo",
        "minimal-python",
        FeatureFlags::enabled(["readme", "security", "cli"]),
    );
    let project = temp.child("combo");
    project.child("README.md").assert(predicate::path::is_file());
    project.child("SECURITY.md").assert(predicate::path::is_file());
    project.child("src/combo/cli.py").assert(predicate::path::is_file());
    project.child("CHANGELOG.md").assert(predicate::path::missing());
}

#[test]
fn test_metadata_is_injected() {
    let temp = TempDir::new().unwrap();
    let root = generate(
        &temp,
        "meta_project",
        "minimal-python",
        FeatureFlags::enabled(["readme", "pypi_packaging"]),
    );

    temp.child("meta_project/src/meta_project/__init__.py")
        .assert(predicate::str::contains("2.5.0"))
        .assert(predicate::str::contains("A test project for feature flags"));

    let files = snapshot(&root);
    assert!(files
        .values()
        .any(|body| String::from_utf8_lossy(body).contains("Jane Doe")));
    temp.child("meta_project/pyproject.toml")
        .assert(predicate::str::contains("jane@example.com"));
}

#[test]
fn test_unknown_template_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let generator = ProjectGenerator::new().unwrap();
    let request = GenerateRequest::new("ghost")
        .output_dir(temp.path())
        .template("nonexistent-template");

    let outcome = generator.generate(&request);

    assert!(!outcome.success());
    assert!(matches!(outcome.error(), Some(Error::UnknownTemplate(_))));
    temp.child("ghost").assert(predicate::path::missing());
}

#[test]
fn test_invalid_names_are_rejected() {
    let generator = ProjectGenerator::new().unwrap();
    for name in ["", "1project", "-project", "a/b", "..", "my project", "class"] {
        let request = GenerateRequest::new(name);
        assert!(
            matches!(generator.plan(&request), Err(Error::InvalidProjectName { .. })),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let features = all_features("flask-web-app");
    let root = generate(&temp, "again", "flask-web-app", features.clone());
    let first = snapshot(&root);

    generate(&temp, "again", "flask-web-app", features);
    assert_eq!(first, snapshot(&root));
}

#[test]
fn test_regeneration_keeps_unrelated_files() {
    let temp = TempDir::new().unwrap();
    let root = generate(&temp, "merge", "minimal-python", FeatureFlags::enabled(["readme"]));
    fs::write(root.join("README.md"), "edited").unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    generate(&temp, "merge", "minimal-python", FeatureFlags::enabled(["readme"]));

    temp.child("merge/README.md")
        .assert(predicate::str::contains("# merge"));
    temp.child("merge/notes.txt").assert("keep me");
}

#[test]
fn test_cli_tool_has_cli_module() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "my_cli",
        "cli-tool",
        FeatureFlags::enabled(["cli", "tests", "readme", "gitignore"]),
    );
    temp.child("my_cli/src/my_cli/cli.py")
        .assert(predicate::path::is_file());
    temp.child("my_cli/tests/test_cli.py")
        .assert(predicate::str::contains("from my_cli.cli import"));
}

#[test]
fn test_flask_has_app_factory_and_assets() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "flask_app",
        "flask-web-app",
        FeatureFlags::enabled(["web_framework", "tests", "readme", "gitignore"]),
    );
    let app = temp.child("flask_app/flask_app");
    app.child("__init__.py")
        .assert(predicate::str::contains("def create_app"))
        .assert(predicate::str::contains("flask_app.config.FlaskAppConfig"));
    app.child("config.py").assert(predicate::path::is_file());
    app.child("templates").assert(predicate::path::is_dir());
    app.child("static").assert(predicate::path::is_dir());
    temp.child("flask_app/run.py").assert(predicate::path::is_file());

    let favicon = fs::read(app.child("static/favicon.ico").path()).unwrap();
    assert_eq!(favicon, templates::flask::FAVICON);
}

#[test]
fn test_flask_without_framework_is_a_bare_package() {
    let temp = TempDir::new().unwrap();
    generate(&temp, "plain", "flask-web-app", FeatureFlags::new());
    temp.child("plain/plain/__init__.py")
        .assert(predicate::str::contains("create_app").not());
    temp.child("plain/plain/routes.py")
        .assert(predicate::path::missing());
}

#[test]
fn test_fastapi_has_app_and_routes() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "api_app",
        "fastapi-web-api",
        FeatureFlags::enabled(["web_framework", "tests"]),
    );
    let app = temp.child("api_app/api_app");
    app.child("__init__.py").assert(predicate::path::is_file());
    app.child("main.py").assert(predicate::path::is_file());
    app.child("routers/health.py").assert(predicate::path::is_file());
}

#[test]
fn test_data_science_layout() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "ds_project",
        "data-science-project",
        FeatureFlags::enabled(["notebooks"]),
    );
    let project = temp.child("ds_project");
    project.child("data/raw").assert(predicate::path::is_dir());
    project.child("data/processed").assert(predicate::path::is_dir());
    project
        .child("notebooks/01_exploration.ipynb")
        .assert(predicate::path::is_file());
    project
        .child("src/ds_project/features.py")
        .assert(predicate::path::is_file());

    let notebook = fs::read(project.child("notebooks/01_exploration.ipynb").path()).unwrap();
    assert_eq!(notebook, templates::data_science::EXPLORATION_NOTEBOOK);
}

#[test]
fn test_binary_extension_has_ext_dir() {
    let temp = TempDir::new().unwrap();
    generate(&temp, "binext", "binary-extension", FeatureFlags::enabled(["pypi_packaging"]));
    let project = temp.child("binext");
    project.child("src/binext/ext").assert(predicate::path::is_dir());
    project
        .child("src/binext/ext/_speedups.c")
        .assert(predicate::path::is_file());
    project.child("setup.py").assert(predicate::path::is_file());
}

#[test]
fn test_namespace_package_has_no_top_level_init() {
    let temp = TempDir::new().unwrap();
    generate(&temp, "ns_pkg", "namespace-package", FeatureFlags::enabled(["tests"]));
    let project = temp.child("ns_pkg");
    project
        .child("src/ns_pkg/__init__.py")
        .assert(predicate::path::missing());
    project
        .child("src/ns_pkg/core/__init__.py")
        .assert(predicate::str::contains("__version__ = \"2.5.0\""));
}

#[test]
fn test_plugin_framework_registers_entry_point() {
    let temp = TempDir::new().unwrap();
    generate(
        &temp,
        "plug-host",
        "plugin-framework",
        FeatureFlags::enabled(["pypi_packaging"]),
    );
    let project = temp.child("plug-host");
    project
        .child("src/plug_host/plugins/hello.py")
        .assert(predicate::path::is_file());
    project
        .child("src/plug_host/base.py")
        .assert(predicate::str::contains("PlugHostPlugin"));
    project
        .child("pyproject.toml")
        .assert(predicate::str::contains("plug_host.plugins.hello:HelloPlugin"));
}
