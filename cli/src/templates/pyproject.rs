//! `pyproject.toml` generation shared by every template.

use {
    crate::{descriptor::RenderContext, Error, Result},
    serde::Serialize,
    std::collections::BTreeMap,
};

/// Where the importable package lives inside the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `src/<package>/`
    Src,
    /// `<package>/` at the project root.
    Flat,
    /// `src/<package>/` without an `__init__.py` at the top level.
    Namespace,
}

/// Per-template knobs for the generated manifest.
#[derive(Debug, Clone, Copy)]
pub struct PyProject {
    pub layout: Layout,
    pub dependencies: &'static [&'static str],
    pub test_dependencies: &'static [&'static str],
    /// Optional dependency group named after the feature that enables it.
    pub extra: Option<(&'static str, &'static [&'static str])>,
    /// Registers `<project_name> = <package>.cli:main` when `cli` is on.
    pub console_script: bool,
    /// Example plugin as `(name, target)`; the target is relative to the package.
    pub plugin: Option<(&'static str, &'static str)>,
}

impl PyProject {
    pub const DEFAULT: PyProject = PyProject {
        layout: Layout::Src,
        dependencies: &[],
        test_dependencies: &["pytest>=8.0"],
        extra: None,
        console_script: false,
        plugin: None,
    };
}

#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(rename = "build-system")]
    build_system: BuildSystem,
    project: Project<'a>,
    tool: Tool,
}

#[derive(Serialize)]
struct BuildSystem {
    requires: [&'static str; 2],
    #[serde(rename = "build-backend")]
    build_backend: &'static str,
}

#[derive(Serialize)]
struct Project<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    readme: Option<&'static str>,
    #[serde(rename = "requires-python")]
    requires_python: &'static str,
    dependencies: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<License>,
    authors: Vec<Author<'a>>,
    #[serde(
        rename = "optional-dependencies",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    optional_dependencies: BTreeMap<&'static str, &'static [&'static str]>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    scripts: BTreeMap<String, String>,
    #[serde(rename = "entry-points", skip_serializing_if = "BTreeMap::is_empty")]
    entry_points: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Serialize)]
struct License {
    file: &'static str,
}

#[derive(Serialize)]
struct Author<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct Tool {
    setuptools: Setuptools,
}

#[derive(Serialize)]
struct Setuptools {
    packages: Packages,
}

#[derive(Serialize)]
struct Packages {
    find: Find,
}

#[derive(Serialize)]
struct Find {
    #[serde(rename = "where", skip_serializing_if = "Vec::is_empty")]
    where_: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    include: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespaces: Option<bool>,
}

impl Find {
    fn for_layout(layout: Layout, package_name: &str) -> Self {
        match layout {
            Layout::Src => Find {
                where_: vec!["src"],
                include: Vec::new(),
                namespaces: None,
            },
            Layout::Flat => Find {
                where_: Vec::new(),
                include: vec![format!("{package_name}*")],
                namespaces: None,
            },
            Layout::Namespace => Find {
                where_: vec!["src"],
                include: Vec::new(),
                namespaces: Some(true),
            },
        }
    }
}

/// Builds the `pyproject.toml` body for one generation.
///
/// # Errors
/// Returns an error if the manifest cannot be serialized.
pub fn render(ctx: &RenderContext<'_>, project: &PyProject) -> Result<String> {
    let vars = ctx.variables;
    let features = ctx.features;

    let mut optional_dependencies = BTreeMap::new();
    if features.is_enabled("tests") {
        optional_dependencies.insert("test", project.test_dependencies);
    }
    if let Some((feature, dependencies)) = project.extra {
        if features.is_enabled(feature) {
            optional_dependencies.insert(feature, dependencies);
        }
    }

    let mut scripts = BTreeMap::new();
    if project.console_script && features.is_enabled("cli") {
        scripts.insert(
            vars.project_name.clone(),
            format!("{}.cli:main", vars.package_name),
        );
    }

    let mut entry_points = BTreeMap::new();
    if let Some((name, target)) = project.plugin {
        entry_points.insert(
            format!("{}.plugins", vars.package_name),
            BTreeMap::from([(name.to_string(), format!("{}.{target}", vars.package_name))]),
        );
    }

    let manifest = Manifest {
        build_system: BuildSystem {
            requires: ["setuptools>=68", "wheel"],
            build_backend: "setuptools.build_meta",
        },
        project: Project {
            name: &vars.project_name,
            version: &vars.version,
            description: &vars.description,
            readme: features.is_enabled("readme").then_some("README.md"),
            requires_python: ">=3.10",
            dependencies: project.dependencies,
            license: features
                .is_enabled("license")
                .then_some(License { file: "LICENSE" }),
            authors: vec![Author {
                name: &vars.author,
                email: &vars.email,
            }],
            optional_dependencies,
            scripts,
            entry_points,
        },
        tool: Tool {
            setuptools: Setuptools {
                packages: Packages {
                    find: Find::for_layout(project.layout, &vars.package_name),
                },
            },
        },
    };

    toml::to_string(&manifest).map_err(|e| Error::Other(e.into()))
}
