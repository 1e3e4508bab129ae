//! Batch command - scan multiple OCR text dumps.

use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, error};

use bilscan_core::{BillScanResult, BillScanner};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "dumps/*.txt")
    #[arg(required = true)]
    input: String,

    /// Directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Reference date for due-date checks (default: today)
    #[arg(long)]
    today: Option<chrono::NaiveDate>,
}

/// Outcome of one scanned file.
struct BatchResult {
    path: PathBuf,
    result: Option<BillScanResult>,
    read_error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let today = super::reference_date(args.today);
    let scanner = BillScanner::with_config(config);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files matched: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        tokio::fs::create_dir_all(dir).await?;
    }

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        debug!("scanning {}", path.display());
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => results.push(BatchResult {
                result: Some(scanner.scan_text(&text, today)),
                read_error: None,
                path,
            }),
            Err(e) => {
                error!("failed to read {}: {}", path.display(), e);
                results.push(BatchResult {
                    result: None,
                    read_error: Some(e.to_string()),
                    path,
                });
            }
        }
    }

    let mut extracted = 0usize;
    let mut failed = 0usize;

    for item in &results {
        match (&item.result, &item.read_error) {
            (Some(result), _) if result.success => {
                extracted += 1;
                let fields = [
                    result.biller_name.is_some(),
                    result.amount.is_some(),
                    result.due_date.is_some(),
                ]
                .iter()
                .filter(|&&f| f)
                .count();
                println!(
                    "{} {} ({} fields, {} warnings)",
                    style("✓").green(),
                    item.path.display(),
                    fields,
                    result.warnings.len()
                );
            }
            (Some(result), _) => {
                failed += 1;
                println!(
                    "{} {} ({})",
                    style("✗").red(),
                    item.path.display(),
                    result.error.as_deref().unwrap_or("scan failed")
                );
            }
            (None, Some(e)) => {
                failed += 1;
                println!("{} {} ({})", style("✗").red(), item.path.display(), e);
            }
            (None, None) => unreachable!("batch result without outcome"),
        }

        if let (Some(dir), Some(result)) = (&args.output_dir, &item.result) {
            let name = item
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("result");
            let out = dir.join(format!("{name}.json"));
            tokio::fs::write(&out, serde_json::to_string_pretty(result)?).await?;
        }
    }

    println!();
    println!(
        "{} {} scanned, {} failed",
        style("ℹ").blue(),
        extracted,
        failed
    );

    Ok(())
}
