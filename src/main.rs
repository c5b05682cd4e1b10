//! `born-again-eval`: evaluates born-again trees against random forests.
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use born_again_eval::prelude::*;
use born_again_eval::tree_ensemble::read_ensemble;


/// Evaluates born-again trees against the random forests they come from.
#[derive(Parser, Debug)]
#[command(name = "born-again-eval", version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding `resources/datasets` and `resources/forests`
    #[arg(long)]
    source: Option<PathBuf>,

    /// Directory holding the born-again trees and receiving the reports
    #[arg(long)]
    output: Option<PathBuf>,

    /// Do not plot the depth sweeps
    #[arg(long)]
    no_plot: bool,

    /// Prune the loaded trees with the training sample
    #[arg(long)]
    pruning: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// What to run (both evaluations if omitted)
    #[command(subcommand)]
    command: Option<Command>,
}


#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the depth sweeps and write `.results.txt` files
    Test,
    /// Compare forests and born-again trees and write the workbooks
    Average,
    /// Run `test` then `average`
    All,
    /// Print statistics of a tree file
    Inspect {
        /// The tree file
        file: PathBuf,

        /// Write the `k`-th tree to this dot file
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Index of the tree written to the dot file
        #[arg(long, default_value_t = 0)]
        tree: usize,
    },
}


fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        _ if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // `RUST_LOG` overrides the command-line level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}


fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::new(),
    };
    if let Some(source) = &cli.source {
        config = config.source_path(source);
    }
    if let Some(output) = &cli.output {
        config = config.output_path(output);
    }
    if cli.no_plot {
        config = config.plot(false);
    }
    if cli.pruning {
        config = config.pruning(true);
    }

    let experiment = Experiment::new(config);
    match cli.command.unwrap_or(Command::All) {
        Command::Test => {
            experiment.run_test()?;
        },
        Command::Average => {
            experiment.run_average()?;
        },
        Command::All => {
            experiment.run_test()?;
            experiment.run_average()?;
        },
        Command::Inspect { file, dot, tree } => {
            inspect(&file, dot, tree)?;
        },
    }
    Ok(())
}


fn inspect(file: &Path, dot: Option<PathBuf>, k: usize) -> Result<()> {
    let ensemble = read_ensemble(file)?;
    let header = ensemble.header();

    println!("{}", file.display().to_string().bold());
    println!("  {:<12} {}", "Dataset".bold().green(), header.dataset_name);
    println!("  {:<12} {}", "Ensemble".bold().green(), header.ensemble);
    println!("  {:<12} {}", "Trees".bold().green(), header.n_trees);
    println!("  {:<12} {}", "Features".bold().green(), header.n_features);
    println!("  {:<12} {}", "Classes".bold().green(), header.n_classes);
    println!("  {:<12} {}", "Depth".bold().green(), ensemble.depth());
    println!("  {:<12} {}", "Leaves".bold().green(), ensemble.n_leaves());

    if let Some(dot) = dot {
        let tree = ensemble.trees()
            .get(k)
            .ok_or_else(|| Error::Incompatible(format!(
                "tree {k} does not exist, the file has {} trees",
                ensemble.trees().len(),
            )))?;
        tree.to_dot_file(&dot)?;
        info!(dot = %dot.display(), "wrote tree {k}");
    }
    Ok(())
}
