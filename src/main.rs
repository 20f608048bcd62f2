mod files;
mod listing;
mod parser;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "zillow_parser", about = "Turn saved Zillow listing captures into Markdown reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename raw captures after the address found in each document
    Rename {
        /// Folder of saved listing captures
        #[arg(default_value = "page_scrapes")]
        dir: PathBuf,
    },
    /// Parse renamed captures and write one Markdown report per file
    Format {
        /// Folder of saved listing captures
        #[arg(default_value = "page_scrapes")]
        dir: PathBuf,
        /// Output folder for reports (defaults to the capture folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write extracted data as JSON next to each report
        #[arg(long)]
        json: bool,
    },
    /// Rename + format in one pipeline
    Run {
        /// Folder of saved listing captures
        #[arg(default_value = "page_scrapes")]
        dir: PathBuf,
        /// Output folder for reports (defaults to the capture folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write extracted data as JSON next to each report
        #[arg(long)]
        json: bool,
    },
    /// Show capture/report counts for a folder
    Stats {
        /// Folder of saved listing captures
        #[arg(default_value = "page_scrapes")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rename { dir } => {
            let counts = pipeline::rename_captures(&dir)?;
            println!(
                "Renamed {} captures ({} without an address, {} errors).",
                counts.processed, counts.skipped, counts.failed
            );
            Ok(())
        }
        Commands::Format { dir, output, json } => {
            let out_dir = output.unwrap_or_else(|| dir.clone());
            let counts = pipeline::format_captures(&dir, &out_dir, json)?;
            if counts.processed + counts.failed == 0 {
                println!("No .zlw captures in {}. Run 'rename' first.", dir.display());
                return Ok(());
            }
            println!(
                "Wrote {} reports ({} errors) to {}",
                counts.processed,
                counts.failed,
                out_dir.display()
            );
            Ok(())
        }
        Commands::Run { dir, output, json } => {
            let out_dir = output.unwrap_or_else(|| dir.clone());

            // Phase 1: rename raw captures
            let renamed = pipeline::rename_captures(&dir)?;
            println!(
                "Renamed {} captures ({} without an address, {} errors).",
                renamed.processed, renamed.skipped, renamed.failed
            );

            // Phase 2: format everything renamed so far
            let formatted = pipeline::format_captures(&dir, &out_dir, json)?;
            if formatted.processed + formatted.failed == 0 {
                println!("Nothing to format in {}.", dir.display());
                return Ok(());
            }
            println!(
                "Wrote {} reports ({} errors) to {}",
                formatted.processed,
                formatted.failed,
                out_dir.display()
            );
            Ok(())
        }
        Commands::Stats { dir } => {
            let counts = pipeline::scan_counts(&dir)?;
            println!("Raw captures:     {}", counts.raw);
            println!("Renamed captures: {}", counts.captures);
            println!("Reports:          {}", counts.reports);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
