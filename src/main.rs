mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use reeltag::extraction;
use reeltag::inspect::{Inspection, TrackReport, inspect_paths};
use reeltag::naming::expand_paths;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Inspect { paths, json } => run_inspect(paths, *json),
        Commands::Art { paths, output } => run_art(paths, output),
    }
}

fn collect(paths: &[PathBuf]) -> Result<Vec<Inspection>> {
    let files = expand_paths(paths).context("Failed to list input paths")?;
    if files.is_empty() {
        println!("\n[!] {}", style("No audio files found.").yellow());
        return Ok(Vec::new());
    }

    info!(count = files.len(), "inspecting files");

    let mut inspections = Vec::with_capacity(files.len());
    for result in inspect_paths(&files) {
        match result {
            Ok(inspection) => inspections.push(inspection),
            Err(e) => warn!("{e}"),
        }
    }
    Ok(inspections)
}

fn run_inspect(paths: &[PathBuf], json: bool) -> Result<()> {
    let inspections = collect(paths)?;

    if json {
        let reports: Vec<&TrackReport> = inspections.iter().map(|i| &i.report).collect();
        let out = serde_json::to_string_pretty(&reports).context("Failed to encode report")?;
        println!("{out}");
        return Ok(());
    }

    for inspection in &inspections {
        print_report(&inspection.report, inspection.path.as_deref());
    }
    Ok(())
}

fn print_report(report: &TrackReport, path: Option<&Path>) {
    println!();
    println!("{}", style(&report.track.title).cyan().bold());
    if report.track.has_artist() {
        println!("Artist:    {}", report.track.artist);
    }
    if let Some(path) = path {
        println!("Path:      {}", path.display());
    }
    println!("Size:      {} bytes", report.size_bytes);

    match report.bit_depth {
        Some(bits) => println!("Bit depth: {bits}"),
        None => println!("Bit depth: {}", style("N/A").dim()),
    }

    if let Some(fmt) = report.wav_format {
        println!(
            "Format:    {}, {} ch, {} Hz, {} bit",
            fmt.format_name(),
            fmt.channels,
            fmt.sample_rate,
            fmt.bits_per_sample
        );
        if report.bit_depth_mismatch() {
            println!(
                "[!] {}",
                style("fmt chunk is not at the canonical offset").yellow()
            );
        }
    }

    match &report.artwork {
        Some(art) => println!(
            "Artwork:   {} ({} bytes, sha256 {})",
            art.mime_type,
            art.size_bytes,
            &art.sha256[..16]
        ),
        None => println!("Artwork:   {}", style("none").dim()),
    }
}

fn run_art(paths: &[PathBuf], output: &Path) -> Result<()> {
    let inspections = collect(paths)?;
    if inspections.is_empty() {
        return Ok(());
    }

    let report = extraction::extract_all(&inspections, output)
        .with_context(|| format!("Failed to extract artwork to {:?}", output))?;

    println!();
    println!("{}", style("Extraction Complete!").green().bold());
    println!(
        "Artwork written:  {}",
        style(report.extracted.len()).green()
    );
    if report.without_art > 0 {
        println!("No artwork:       {}", report.without_art);
    }
    if report.failed > 0 {
        println!("Failed:           {}", style(report.failed).yellow());
    }
    println!("Output folder:    {:?}", output);

    Ok(())
}
