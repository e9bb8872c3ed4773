mod limits;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

use sl_core::timing::{Timer, TimingStats};
use sl_core::{Family, SlError, StarParams};
use sl_labeling::{Labeling, LabelingError, construct};
use sl_project::ProjectError;
use sl_results::{Report, ReportWriter, ResultsError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::limits::{LimitsConfig, StopReason, run_limits};

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] SlError),

    #[error(transparent)]
    Labeling(#[from] LabelingError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Results(#[from] ResultsError),

    #[error("{failed} of {total} batch runs failed")]
    BatchFailures { failed: usize, total: usize },
}

#[derive(Parser)]
#[command(name = "sl-cli")]
#[command(about = "Edge-irregular labelings of star-graph families", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct and label one graph, then write its report
    Build {
        /// Graph family: s_n_3, s_n_m or snowflake
        #[arg(short, long)]
        family: Family,
        /// Number of branches
        #[arg(short, long)]
        n: u32,
        /// Fan-out (s_n_m only)
        #[arg(short, long)]
        m: Option<u32>,
        /// Label bound; defaults to the family's bound
        #[arg(short, long)]
        k: Option<u32>,
        /// Output directory
        #[arg(short, long, default_value = "starlabel-out")]
        out: PathBuf,
        /// Skip the DOT diagram
        #[arg(long)]
        no_visualize: bool,
        /// Draw the diagram even for large graphs
        #[arg(long)]
        force_diagram: bool,
    },
    /// Run every construction listed in a batch YAML file
    Batch {
        /// Path to the batch YAML file
        batch_path: PathBuf,
        /// Override the output directory from the file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Grow n until construction fails or exceeds the time budget
    Limits {
        #[arg(short, long)]
        family: Family,
        /// First n to try
        #[arg(long, default_value_t = 3)]
        start: u32,
        /// Fan-out (s_n_m only)
        #[arg(short, long)]
        m: Option<u32>,
        /// Increment between attempts
        #[arg(long, default_value_t = 1)]
        step: u32,
        /// Per-construction time budget in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
        /// Largest n to try
        #[arg(long, default_value_t = 100_000)]
        max_n: u32,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            family,
            n,
            m,
            k,
            out,
            no_visualize,
            force_diagram,
        } => {
            let params = StarParams::new(family, n, m, k)?;
            cmd_build(&params, &out, !no_visualize, force_diagram)
        }
        Commands::Batch { batch_path, out } => cmd_batch(&batch_path, out.as_deref()),
        Commands::Limits {
            family,
            start,
            m,
            step,
            timeout_secs,
            max_n,
        } => cmd_limits(LimitsConfig {
            family,
            start,
            step,
            m,
            budget: Duration::from_secs(timeout_secs),
            max_n,
        }),
    }
}

/// Construct, time and report one labeling.
fn build_and_write(
    params: &StarParams,
    writer: &ReportWriter,
    stem: &str,
    visualize: bool,
    force_diagram: bool,
) -> CliResult<(Labeling, f64)> {
    let timer = Timer::start("construct");
    let labeling = construct(params)?;
    let elapsed = timer.stop_and_log();

    let report = Report::from_labeling(&labeling, Some(elapsed));
    let paths = if visualize {
        writer.write_with_diagram(stem, &report, &labeling, force_diagram)?
    } else {
        writer.write(stem, &report)?
    };
    info!(stem, text = %paths.text.display(), "report written");
    Ok((labeling, elapsed))
}

fn cmd_build(params: &StarParams, out: &Path, visualize: bool, force: bool) -> CliResult<()> {
    let writer = ReportWriter::new(out)?;
    let (labeling, elapsed) = build_and_write(params, &writer, "report", visualize, force)?;

    println!("{params}");
    println!(
        "  vertices: {}, edges: {}",
        labeling.graph().order(),
        labeling.graph().size()
    );
    println!(
        "  max label: {}, max weight: {}",
        labeling.max_label(),
        labeling.max_weight()
    );
    println!("  edge-irregular: {}", labeling.is_edge_irregular());
    if !labeling.collisions().is_empty() {
        println!("  weight collisions: {}", labeling.collisions().len());
    }
    println!("  complexity: {}", labeling.complexity());
    println!("  elapsed: {elapsed:.6} s");
    println!("  output: {}", writer.root_dir().display());
    Ok(())
}

fn cmd_batch(batch_path: &Path, out: Option<&Path>) -> CliResult<()> {
    let batch = sl_project::load_yaml(batch_path)?;
    let dir = out.unwrap_or(batch.output.dir.as_path());
    let writer = ReportWriter::new(dir)?;
    info!(name = %batch.name, runs = batch.runs.len(), "starting batch");

    let mut stats = TimingStats::new();
    let mut failed = 0;
    println!(
        "{:<16} {:>8} {:>10} {:>10} {:>10}",
        "run", "edges", "max label", "irregular", "seconds"
    );
    for run in &batch.runs {
        let outcome = run
            .params()
            .map_err(CliError::from)
            .and_then(|params| {
                build_and_write(&params, &writer, &run.id, batch.output.visualize, false)
            });
        match outcome {
            Ok((labeling, elapsed)) => {
                stats.record(elapsed);
                println!(
                    "{:<16} {:>8} {:>10} {:>10} {:>10.6}",
                    run.id,
                    labeling.graph().size(),
                    labeling.max_label(),
                    labeling.is_edge_irregular(),
                    elapsed
                );
            }
            Err(err) => {
                failed += 1;
                error!(run = %run.id, error = %err, "run failed");
                println!("{:<16} failed: {err}", run.id);
            }
        }
    }

    println!(
        "{} runs, {} ok, total {:.6} s, max {:.6} s",
        batch.runs.len(),
        stats.count(),
        stats.total_seconds(),
        stats.max_seconds()
    );
    if failed > 0 {
        return Err(CliError::BatchFailures {
            failed,
            total: batch.runs.len(),
        });
    }
    Ok(())
}

fn cmd_limits(config: LimitsConfig) -> CliResult<()> {
    let outcome = run_limits(&config)?;

    match outcome.largest {
        Some((n, seconds)) => println!(
            "{}: largest n = {n} ({seconds:.6} s) after {} attempts",
            config.family, outcome.attempts
        ),
        None => println!("{}: no successful construction", config.family),
    }
    match outcome.stop {
        StopReason::Failed { n, error } => println!("  stopped at n = {n}: {error}"),
        StopReason::TooSlow { n, seconds } => println!(
            "  stopped at n = {n}: {seconds:.3} s exceeds the {} s budget",
            config.budget.as_secs()
        ),
        StopReason::ReachedMax => println!("  reached max n = {}", config.max_n),
    }
    Ok(())
}
