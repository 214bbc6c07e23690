//! Project generation command.

use {
    crate::{
        catalog::Catalog,
        cli::GenerateArgs,
        config::Config,
        constants::DEFAULT_FEATURES,
        features::FeatureFlags,
        generator::{GenerateRequest, Plan, ProjectGenerator},
        output,
        resolve::Payload,
        Result,
    },
    anyhow::Context,
    indicatif::{ProgressBar, ProgressStyle},
    std::time::Duration,
};

/// Creates a new Python project, or prints the plan with `--dry-run`.
///
/// # Errors
/// Returns an error if the name or template is invalid, a template fails to
/// render, or the project cannot be written.
pub fn run(args: &GenerateArgs, config: Config, verbose: bool) -> Result<()> {
    let generator = ProjectGenerator::new()?;
    let request = build_request(args, config, generator.catalog())?;

    if args.dry_run {
        let plan = generator.plan(&request)?;
        print_plan(&plan);
        return Ok(());
    }

    output::info(format_args!(
        "Creating Python project '{}' with template '{}'...",
        request.project_name, request.template_id
    ));

    let spinner = if verbose {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Generating project files...");
        Some(spinner)
    };

    let result = generator.try_generate(&request);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let project = result?;

    if verbose {
        for path in &project.written {
            output::step(path.display());
        }
    }

    output::success(format_args!(
        "Successfully created '{}' at {}",
        request.project_name,
        project.root.display()
    ));
    output::header("Next steps:");
    output::command(format_args!("cd {}", project.root.display()));
    output::command("python -m venv .venv && . .venv/bin/activate");
    if request.features.is_enabled("pypi_packaging") {
        output::command("pip install -e .");
    }
    if request.features.is_enabled("tests") {
        output::command("pytest");
    }
    println!();

    Ok(())
}

/// Combines the config file and command-line options into one request.
///
/// Features start from the built-in defaults, then `[features]` from the
/// config, then `--all-features`, then each `--feature` in order.
pub(crate) fn build_request(
    args: &GenerateArgs,
    config: Config,
    catalog: &Catalog,
) -> Result<GenerateRequest> {
    let template_id = args.template.clone().unwrap_or(config.defaults.template);
    let descriptor = catalog.get(&template_id)?;

    let mut features = FeatureFlags::enabled(DEFAULT_FEATURES);
    features.merge(&config.features);
    if args.all_features {
        features.merge(&FeatureFlags::enabled(descriptor.features.iter().copied()));
    }
    for assignment in &args.features {
        if !descriptor.supports(&assignment.name) {
            output::warning(format_args!(
                "template '{template_id}' has no feature '{}'; ignoring it",
                assignment.name
            ));
        }
        features.set(assignment.name.clone(), assignment.value);
    }

    let mut metadata = config.metadata;
    if let Some(author) = &args.author {
        metadata.author = author.clone();
    }
    if let Some(email) = &args.email {
        metadata.email = email.clone();
    }
    if let Some(description) = &args.description {
        metadata.description = description.clone();
    }
    if let Some(version) = &args.project_version {
        metadata.version = version.clone();
    }

    Ok(GenerateRequest::new(args.name.clone())
        .template(template_id)
        .output_dir(args.output_dir.clone().unwrap_or(config.defaults.output_dir))
        .features(features)
        .metadata(metadata))
}

fn print_plan(plan: &Plan) {
    output::header(format_args!(
        "Would create {} from template '{}':",
        plan.root.display(),
        plan.template
    ));
    for entry in &plan.tree {
        match &entry.payload {
            Payload::Directory => output::step(format_args!("{}/", entry.path)),
            Payload::File(bytes) => {
                output::step(format_args!("{} ({} bytes)", entry.path, bytes.len()))
            }
        }
    }
    output::info(format_args!("{} entries, nothing written", plan.tree.len()));
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{features::FeatureAssignment, Error},
        std::path::Path,
    };

    fn args(name: &str) -> GenerateArgs {
        GenerateArgs {
            name: name.to_string(),
            ..GenerateArgs::default()
        }
    }

    fn assignment(name: &str, value: bool) -> FeatureAssignment {
        FeatureAssignment {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let catalog = Catalog::builtin().unwrap();
        let mut config = Config::default();
        config.defaults.template = "cli-tool".to_string();
        config.metadata.author = "Config Author".to_string();

        let request = build_request(&args("tool"), config, &catalog).unwrap();

        assert_eq!(request.template_id, "cli-tool");
        assert_eq!(request.output_dir, Path::new("."));
        assert_eq!(request.metadata.author, "Config Author");
        for feature in DEFAULT_FEATURES {
            assert!(request.features.is_enabled(feature), "{feature} should default on");
        }
    }

    #[test]
    fn test_command_line_overrides_config() {
        let catalog = Catalog::builtin().unwrap();
        let mut config = Config::default();
        config.metadata.author = "Config Author".to_string();
        config.features.set("cli", false).set("readme", false);

        let args = GenerateArgs {
            template: Some("minimal-python".to_string()),
            author: Some("Jane Doe".to_string()),
            project_version: Some("2.5.0".to_string()),
            features: vec![assignment("cli", true), assignment("tests", false)],
            ..args("lib")
        };
        let request = build_request(&args, config, &catalog).unwrap();

        assert_eq!(request.metadata.author, "Jane Doe");
        assert_eq!(request.metadata.version, "2.5.0");
        assert!(request.features.is_enabled("cli"));
        assert!(!request.features.is_enabled("tests"));
        assert!(!request.features.is_enabled("readme"));
    }

    #[test]
    fn test_all_features_then_explicit_assignments() {
        let catalog = Catalog::builtin().unwrap();
        let args = GenerateArgs {
            template: Some("flask-web-app".to_string()),
            all_features: true,
            features: vec![assignment("docker", false)],
            ..args("site")
        };
        let request = build_request(&args, Config::default(), &catalog).unwrap();

        assert!(request.features.is_enabled("web_framework"));
        assert!(request.features.is_enabled("security"));
        assert!(!request.features.is_enabled("docker"));
    }

    #[test]
    fn test_unknown_template_is_reported() {
        let catalog = Catalog::builtin().unwrap();
        let args = GenerateArgs {
            template: Some("django".to_string()),
            ..args("site")
        };
        assert!(matches!(
            build_request(&args, Config::default(), &catalog),
            Err(Error::UnknownTemplate(_))
        ));
    }
}
