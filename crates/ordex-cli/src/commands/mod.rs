//! CLI subcommands and the input handling they share.

pub mod batch;
pub mod config;
pub mod process;
pub mod repair;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ordex_core::pdf::PdfExtractor;
use ordex_core::{
    resolve_destinations, ExtractionResult, ListingParser, OrdexConfig, RoutingTable,
    SalesOrderListingParser,
};

/// Page break in plain-text inputs.
const FORM_FEED: char = '\x0c';

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ordex")
        .join("config.json")
}

/// Resolve which configuration file applies: the explicit one, else the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the explicit config, else the default file if present, else defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<OrdexConfig> {
    if let Some(path) = explicit {
        return Ok(OrdexConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(OrdexConfig::from_file(&path)?)
    } else {
        Ok(OrdexConfig::default())
    }
}

/// True for the file types `read_pages` understands.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension(path).as_str(), "pdf" | "txt")
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Read per-page text from a PDF or a plain-text file.
pub fn read_pages(path: &Path) -> anyhow::Result<Vec<String>> {
    match extension(path).as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let pages = PdfExtractor::pages_from_bytes(&data)?;
            debug!("Read {} pages from {}", pages.len(), path.display());
            Ok(pages)
        }
        "txt" => {
            let text = fs::read_to_string(path)?;
            Ok(text.split(FORM_FEED).map(str::to_string).collect())
        }
        other => anyhow::bail!("Unsupported file format: {}", other),
    }
}

/// Extract one input file and route its destinations.
pub fn extract_file(
    path: &Path,
    parser: &SalesOrderListingParser,
    config: &OrdexConfig,
) -> anyhow::Result<ExtractionResult> {
    info!("Processing file: {}", path.display());

    let pages = read_pages(path)?;
    let mut result = parser.parse_pages(&pages);

    // Without a routing table every code would be reported as unmapped.
    if !config.routing.destinations.is_empty() {
        let router = RoutingTable::from_config(&config.routing);
        let unmapped = resolve_destinations(&mut result.items, &router);
        result.diagnostics.extend(unmapped);
    }

    Ok(result)
}
