//! The project generator: the public entry point of the library.

use {
    crate::{
        catalog::Catalog,
        constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE},
        descriptor::RenderContext,
        features::FeatureFlags,
        materialize,
        metadata::Metadata,
        placeholder::Variables,
        resolve::{self, ResolvedTree},
        Error, Result,
    },
    std::path::PathBuf,
};

/// Inputs for one generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub project_name: String,
    /// The project is created at `output_dir/project_name`.
    pub output_dir: PathBuf,
    pub template_id: String,
    pub features: FeatureFlags,
    pub metadata: Metadata,
}

impl GenerateRequest {
    /// A request for `project_name` with the default template, the current
    /// directory, default metadata and every feature off.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            template_id: DEFAULT_TEMPLATE.to_string(),
            features: FeatureFlags::new(),
            metadata: Metadata::default(),
        }
    }

    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = template_id.into();
        self
    }

    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Where the project will be written.
    pub fn root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }
}

/// A fully rendered generation that has not touched the disk.
#[derive(Debug, Clone)]
pub struct Plan {
    pub template: &'static str,
    pub root: PathBuf,
    pub tree: ResolvedTree,
}

/// A project that was written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub template: &'static str,
    pub root: PathBuf,
    /// Every directory and file from the plan, in write order.
    pub written: Vec<PathBuf>,
}

/// Result of [`ProjectGenerator::generate`].
#[derive(Debug)]
pub enum Outcome {
    Generated(GeneratedProject),
    Failed(Error),
}

impl Outcome {
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Generated(_) => None,
            Outcome::Failed(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<GeneratedProject> {
        match self {
            Outcome::Generated(project) => Ok(project),
            Outcome::Failed(e) => Err(e),
        }
    }
}

impl From<Result<GeneratedProject>> for Outcome {
    fn from(result: Result<GeneratedProject>) -> Self {
        match result {
            Ok(project) => Outcome::Generated(project),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Turns requests into project trees using a read-only catalog.
///
/// Holds no per-request state; one generator can serve requests from many
/// threads as long as each targets its own directory.
#[derive(Debug)]
pub struct ProjectGenerator {
    catalog: Catalog,
}

impl ProjectGenerator {
    /// A generator over the built-in templates.
    ///
    /// # Errors
    /// Returns an error if a built-in template fails registration.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(Catalog::builtin()?))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates the request and renders every entry without writing anything.
    ///
    /// # Errors
    /// Returns `InvalidProjectName`, `UnknownTemplate`, `InvalidFileSpec` or
    /// `Render`.
    pub fn plan(&self, request: &GenerateRequest) -> Result<Plan> {
        let variables = Variables::derive(&request.project_name, &request.metadata)?;
        let descriptor = self.catalog.get(&request.template_id)?;

        let specs = resolve::resolve(descriptor, &request.features);
        let ctx = RenderContext {
            variables: &variables,
            features: &request.features,
        };
        let tree = resolve::render_tree(descriptor.id, &specs, &ctx)?;

        Ok(Plan {
            template: descriptor.id,
            root: request.root(),
            tree,
        })
    }

    /// Plans the request and writes the tree to `output_dir/project_name`.
    ///
    /// # Errors
    /// Everything [`plan`](Self::plan) returns, plus `Write` if the disk
    /// refuses a path. Files written before the failure are left in place.
    pub fn try_generate(&self, request: &GenerateRequest) -> Result<GeneratedProject> {
        let plan = self.plan(request)?;
        let written = materialize::write(&plan.root, &plan.tree)?;

        Ok(GeneratedProject {
            template: plan.template,
            root: plan.root,
            written,
        })
    }

    /// Like [`try_generate`](Self::try_generate) but reports the result as an
    /// [`Outcome`].
    pub fn generate(&self, request: &GenerateRequest) -> Outcome {
        self.try_generate(request).into()
    }
}
