//! notigen - entity notifier scaffolding generator
//!
//! Usage: `notigen Engineer` generates
//! `app/Packages/Notification/Class/EngineerDataModelBuilder.php` and
//! `app/Packages/Notification/Interface/EngineerNotifierInterface.php`,
//! and injects a `notify()` method into the entity when it lacks one.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use notigen_core::{
    init_tracing, CliOverrides, DiskStore, GenerationReport, Generator, NotigenConfig,
};

/// Command line interface for notigen
#[derive(Parser, Debug)]
#[command(name = "notigen")]
#[command(about = "Generates a data-carrier class, its notifier interface, and the entity's notify() method")]
#[command(version)]
struct Cli {
    /// Bare class name of the entity, e.g. `Engineer`
    class_name: String,

    /// Project root containing the entity tree
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Path to a configuration file (defaults to <root>/notigen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the entities directory
    #[arg(long)]
    entities_dir: Option<String>,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print_report(&report, cli.json);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationReport, String> {
    let overrides = CliOverrides {
        entities_dir: cli.entities_dir.clone(),
        ..Default::default()
    };

    let config = match &cli.config {
        Some(path) => NotigenConfig::load_from(path, Some(&overrides)),
        None => NotigenConfig::load(&cli.root, Some(&overrides)),
    }
    .map_err(|e| e.to_string())?;

    Generator::new(DiskStore::new(), &cli.root, config)
        .generate(&cli.class_name)
        .map_err(|e| e.to_string())
}

fn print_report(report: &GenerationReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("error: failed to serialize report: {e}"),
        }
        return;
    }

    println!(
        "Generated notifier scaffolding for {} ({} fields)",
        report.class_name, report.field_count
    );
    println!("  carrier    {}", report.carrier_path.display());
    println!("  interface  {}", report.interface_path.display());
    if report.notify_injected {
        println!("  notify()   injected into {}", report.entity_path.display());
    } else {
        println!(
            "  notify()   already present in {}, left untouched",
            report.entity_path.display()
        );
    }
}
