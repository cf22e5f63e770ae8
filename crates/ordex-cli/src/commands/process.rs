//! Process command - extract line items from a single listing.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use ordex_core::summary::{
    parse_failures, render_failure, render_notification, render_rejection, render_summary,
    render_test_mode,
};
use ordex_core::{
    draft_orders, ExtractionResult, ItemMaster, OrderError, OrdexConfig, SalesOrderListingParser,
};

use super::{extract_file, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Item catalog file; drafts one order per order number
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the message that would be sent back to the sender
    #[arg(long)]
    notify: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per line item
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Reading {}...", args.input.display()));

    let parser = SalesOrderListingParser::from_config(&config);
    let result = extract_file(&args.input, &parser, &config)?;

    pb.finish_and_clear();

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !result.is_clean() {
        eprintln!("{}", style("Issues:").yellow());
        for diagnostic in &result.diagnostics {
            eprintln!("  - {}", diagnostic);
        }
    }

    let rejections = match &args.catalog {
        Some(catalog) => draft(&result, catalog, &config)?,
        None => Vec::new(),
    };

    if args.notify {
        notify(&result, &rejections, &config);
    }

    Ok(())
}

/// Draft orders against the catalog and report each group. Returns the rejected groups.
fn draft(
    result: &ExtractionResult,
    catalog: &Path,
    config: &OrdexConfig,
) -> anyhow::Result<Vec<OrderError>> {
    println!();

    if config.dispatch.test_mode {
        println!("{}", render_test_mode(result));
        return Ok(Vec::new());
    }

    let master = ItemMaster::from_file(catalog)?;
    debug!("Catalog has {} item codes", master.len());

    let mut rejections = Vec::new();
    for draft in draft_orders(result, &master) {
        match draft {
            Ok(order) => println!(
                "{} {} drafted: {} lines, delivery {}",
                style("✓").green(),
                order.order_ref,
                order.lines.len(),
                order.delivery_date.as_deref().unwrap_or("-")
            ),
            Err(e) => {
                println!("{} {}", style("✗").red(), e);
                rejections.push(e);
            }
        }
    }

    Ok(rejections)
}

/// Print the reply for the sender. Routing diagnostics stay with the operator.
fn notify(result: &ExtractionResult, rejections: &[OrderError], config: &OrdexConfig) {
    let failures = parse_failures(result);
    if !failures.is_empty() {
        println!("{}", render_failure(&failures));
    } else if config.dispatch.test_mode {
        debug!("Test mode, no notification sent");
    } else if !rejections.is_empty() {
        println!("{}", render_rejection(rejections));
    } else if config.dispatch.notify_on_success {
        println!(
            "{}",
            render_notification(&config.dispatch.success_template, result)
        );
    }
}

/// Render a result in the requested output format.
pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(render_summary(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "sequence",
        "order_ref",
        "item_code",
        "description",
        "destination_code",
        "routed_destination",
        "quantity",
        "delivery_date",
    ])?;

    for item in &result.items {
        wtr.write_record([
            &item.sequence.to_string(),
            &item.source_order_ref,
            &item.item_code,
            &item.description,
            &item.destination_code,
            item.routed_destination.as_deref().unwrap_or(""),
            &item.quantity.to_string(),
            item.delivery_date.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
