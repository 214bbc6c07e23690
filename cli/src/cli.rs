//! CLI definition and command routing.

use {
    crate::{config, features::FeatureAssignment, Result},
    clap::{Args, Parser, Subcommand},
    std::path::PathBuf,
};

/// pygen CLI entry point.
#[derive(Parser)]
#[command(name = "pygen")]
#[command(about = "Generate Python project skeletons from built-in templates")]
#[command(version)]
pub struct Cli {
    /// Read settings from this file instead of ./pygen.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print every path as it is written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a new Python project
    Generate(GenerateArgs),
    /// List the available templates
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the features and files of one template
    Show {
        /// Template id, as printed by `pygen list`
        template: String,
    },
}

/// Options for `pygen generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Name of the project to create
    pub name: String,

    /// Directory to create the project in
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Template to use (see `pygen list`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Turn a feature on (NAME) or set it explicitly (NAME=true|false)
    #[arg(short = 'f', long = "feature", value_name = "FEATURE[=BOOL]")]
    pub features: Vec<FeatureAssignment>,

    /// Enable every feature the template supports
    #[arg(long)]
    pub all_features: bool,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Version written into the generated package
    #[arg(long, value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Print the files that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let config = config::load(cli.config.as_deref())?;
            crate::commands::generate::run(&args, config, cli.verbose)
        }
        Commands::List { json } => crate::commands::list::run(json),
        Commands::Show { template } => crate::commands::show::run(&template),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "pygen",
            "generate",
            "my-app",
            "-t",
            "cli-tool",
            "-f",
            "cli",
            "--feature",
            "tests=false",
            "--project-version",
            "1.2.3",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.name, "my-app");
        assert_eq!(args.template.as_deref(), Some("cli-tool"));
        assert_eq!(args.features.len(), 2);
        assert!(!args.features[1].value);
        assert_eq!(args.project_version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_bad_feature_value_is_rejected() {
        assert!(Cli::try_parse_from(["pygen", "generate", "x", "-f", "tests=maybe"]).is_err());
    }
}
