//! Scan command - extract fields from a single OCR text dump.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use bilscan_core::{BillScanResult, BillScanner};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input file containing recognized bill text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Reference date for due-date checks (default: today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = tokio::fs::read_to_string(&args.input).await?;
    info!("scanning {} ({} chars)", args.input.display(), text.chars().count());

    let scanner = BillScanner::with_config(config);
    let result = scanner.scan_text(&text, super::reference_date(args.today));

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn format_result(result: &BillScanResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_text(result: &BillScanResult) -> String {
    let mut output = String::new();

    if !result.success {
        output.push_str(&format!(
            "Scan failed: {}\n",
            result.error.as_deref().unwrap_or("unknown error")
        ));
        return output;
    }

    let missing = || "-".to_string();

    output.push_str(&format!(
        "Biller:   {}\n",
        result.biller_name.clone().unwrap_or_else(missing)
    ));
    if let Some(category) = result.category {
        output.push_str(&format!("Category: {}\n", category));
    }
    output.push_str(&format!(
        "Amount:   {} {}\n",
        result
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(missing),
        result.currency.clone().unwrap_or_default()
    ));
    output.push_str(&format!(
        "Due date: {}\n",
        result
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(missing)
    ));

    if !result.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }
    if let Some(error) = &result.error {
        output.push_str(&format!("\nNote: {}\n", error));
    }

    output
}
