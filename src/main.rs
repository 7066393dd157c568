use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wirecheck::commands::{self, ColorMode, Options};

/// wirecheck - package wiring diagnostics for modular runtimes
///
/// Reads a snapshot of the module registry and reports who exports and who
/// imports a package, or which packages are exported by several modules.
///
/// Examples:
///   wirecheck packages org.example.api   # Exporters and importers of a package
///   wirecheck package-conflicts          # Packages exported more than once
#[derive(Parser, Debug)]
#[command(author, version = env!("WIRECHECK_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry snapshot file (defaults to <config dir>/wirecheck/registry.json)
    #[arg(
        long = "registry",
        short = 'r',
        env = "WIRECHECK_REGISTRY",
        value_name = "PATH",
        global = true
    )]
    pub registry: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Display the exporters and importers of a package
    Packages(PackagesArgs),

    /// Display packages exported by more than one module
    PackageConflicts,
}

#[derive(clap::Args, Debug)]
pub struct PackagesArgs {
    /// Package name to display (exact match)
    #[arg(value_name = "PACKAGE")]
    pub name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = wirecheck::runtime::RealRuntime;
    let options = Options {
        registry: cli.registry,
        color: cli.color,
    };

    match cli.command {
        Commands::Packages(args) => commands::packages(runtime, &args.name, &options)?,
        Commands::PackageConflicts => commands::package_conflicts(runtime, &options)?,
    }
    Ok(())
}
