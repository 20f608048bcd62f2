use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::files;
use crate::parser;
use crate::report;

/// Extension that marks a capture as renamed and ready to format.
pub const CAPTURE_EXT: &str = "zlw";

#[derive(Debug, Default)]
pub struct PassCounts {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Rename pass: every extension-less file in the folder gets the
/// sanitized on-page address as its filename. Files that yield no address
/// are left in place; per-file errors never stop the batch.
pub fn rename_captures(dir: &Path) -> Result<PassCounts> {
    let mut counts = PassCounts::default();

    for path in list_files(dir)? {
        if files::has_extension(&path) {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                counts.failed += 1;
                continue;
            }
        };

        let sanitized = parser::capture_name(&content)
            .map(|name| files::sanitize_filename(&name))
            .unwrap_or_default();
        if sanitized.is_empty() {
            info!("No address found in {}, skipping rename", path.display());
            counts.skipped += 1;
            continue;
        }

        let target = path.with_file_name(format!("{}.{}", sanitized, CAPTURE_EXT));
        match fs::rename(&path, &target) {
            Ok(()) => {
                info!("Renamed {} -> {}", path.display(), target.display());
                counts.processed += 1;
            }
            Err(e) => {
                warn!("Failed to rename {}: {}", path.display(), e);
                counts.failed += 1;
            }
        }
    }

    Ok(counts)
}

/// Format pass: one Markdown report per `.zlw` capture, written to the
/// output folder. A capture that fails to read or write is logged and the
/// loop moves on.
pub fn format_captures(dir: &Path, out_dir: &Path, json: bool) -> Result<PassCounts> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output folder {}", out_dir.display()))?;

    let captures: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == CAPTURE_EXT))
        .collect();

    let pb = ProgressBar::new(captures.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut counts = PassCounts::default();
    for path in captures {
        match format_one(&path, out_dir, json) {
            Ok(()) => counts.processed += 1,
            Err(e) => {
                warn!("Failed to process {}: {:#}", path.display(), e);
                counts.failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(counts)
}

fn format_one(path: &Path, out_dir: &Path, json: bool) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("non-UTF-8 file name")?;

    let name = files::address_from_filename(file_name);
    let listing = parser::process_document(&name, &content);
    let lines = report::render_report(&listing);

    files::save_report(&lines, &out_dir.join(format!("{}.md", file_name)))?;
    if json {
        let dump = serde_json::to_string_pretty(&listing)?;
        let json_path = out_dir.join(format!("{}.json", file_name));
        fs::write(&json_path, dump)
            .with_context(|| format!("writing {}", json_path.display()))?;
    }

    info!("Wrote report for {}", file_name);
    Ok(())
}

#[derive(Debug, Default)]
pub struct DirCounts {
    pub raw: usize,
    pub captures: usize,
    pub reports: usize,
}

/// Counts for the `stats` command: raw (extension-less) captures, renamed
/// `.zlw` captures, and generated reports.
pub fn scan_counts(dir: &Path) -> Result<DirCounts> {
    let mut counts = DirCounts::default();
    for path in list_files(dir)? {
        if !files::has_extension(&path) {
            counts.raw += 1;
        } else if path.extension().is_some_and(|ext| ext == CAPTURE_EXT) {
            counts.captures += 1;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            counts.reports += 1;
        }
    }
    Ok(counts)
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading scrape folder {}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

// ── Tests ──
