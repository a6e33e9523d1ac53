//! Cluster 2D points read from a text file and plot the result.
//!
//! Usage: `cluster-points <CLUSTERS> <FILE> [-o clusters.svg] [--seed N]`
//!
//! The input file holds one point per line as two whitespace-separated
//! integers. The plot is written as SVG; `--centroids-npy` additionally saves
//! the centroid matrix for use from numpy.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use kmeans2d_rs::plot::{cluster_color, write_svg, PlotOptions};
use kmeans2d_rs::{
    centroids_to_array, io, run_kmeans, validate_cluster_count, EmptyClusterPolicy, KMeansConfig,
    KMeansError, KMeansResult,
};
use ndarray_npy::WriteNpyExt;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Lloyd's k-means clustering of 2D integer points
#[derive(Parser, Debug)]
#[command(name = "cluster-points")]
#[command(version)]
#[command(about = "Partition 2D points into K clusters with Lloyd's k-means and plot them")]
struct Cli {
    /// Number of clusters (1 <= K <= number of points)
    #[arg(allow_negative_numbers = true)]
    clusters: i64,

    /// Text file with one "x y" integer pair per line
    file: PathBuf,

    /// Where to write the SVG plot
    #[arg(short, long, default_value = "clusters.svg")]
    output: PathBuf,

    /// Seed for centroid initialization (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Hard stop on the number of iterations
    #[arg(long, default_value_t = 1_000)]
    max_iters: usize,

    /// Empty-cluster handling: keep or reseed
    #[arg(long, default_value = "keep")]
    empty_cluster: EmptyClusterPolicy,

    /// Also save the (K, 2) centroid matrix as a .npy file
    #[arg(long)]
    centroids_npy: Option<PathBuf>,

    /// Summary format printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.clusters <= 0 {
        return Err(KMeansError::NonPositiveK(cli.clusters).into());
    }
    let k = cli.clusters as usize;

    let points = io::read_points(&cli.file)
        .with_context(|| format!("Could not load points from {}", cli.file.display()))?;
    validate_cluster_count(k, points.len())?;

    let config = KMeansConfig {
        k,
        max_iters: cli.max_iters,
        seed: cli.seed,
        empty_cluster: cli.empty_cluster,
    };

    let result = run_kmeans(&points, &config)?;
    if !result.converged {
        warn!(
            iterations = result.n_iterations,
            "Result is the last state before the iteration limit"
        );
    }

    write_svg(
        &cli.output,
        &result.clusters,
        &result.centroids,
        &PlotOptions::default(),
    )
    .with_context(|| format!("Could not write plot to {}", cli.output.display()))?;

    if let Some(path) = &cli.centroids_npy {
        let writer = File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        centroids_to_array(&result.centroids).write_npy(writer)?;
        info!(path = %path.display(), "Saved centroids");
    }

    match cli.format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(())
}

fn print_text(result: &KMeansResult) {
    println!(
        "{} after {} iterations, inertia {:.4}",
        if result.converged {
            "Converged"
        } else {
            "Stopped"
        },
        result.n_iterations,
        result.inertia
    );
    for (i, (cluster, centroid)) in result.clusters.iter().zip(&result.centroids).enumerate() {
        println!(
            "  Cluster {} ({}): {} points, centroid {}",
            i,
            cluster_color(i),
            cluster.len(),
            centroid
        );
    }
}

fn print_json(result: &KMeansResult) -> anyhow::Result<()> {
    let mut summary = serde_json::to_value(result)?;
    if let Some(fields) = summary.as_object_mut() {
        fields.insert("k".to_string(), result.k().into());
        fields.insert("cluster_sizes".to_string(), result.cluster_sizes().into());
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
