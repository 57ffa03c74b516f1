mod context;
mod sinks;
mod walk;

use crate::config::ResolvedConfig;
use crate::constants::PROPERTY_ELEMENT;
use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::parser::load_document;
use crate::ui::create_progress_bar;
use crate::utils::{format_duration, mb_from_bytes, round_two_decimals};
use indicatif::ProgressBar;
use std::fs;
use std::time::Instant;
use tracing::info;

// Re-export public API
pub use context::ExportContext;
pub use sinks::{ExportStats, TableSinks};
pub use walk::export_document;

/// Converts the registry XML dump into the relational CSV tables.
///
/// # Workflow
///
/// 1. Loads `{base_dir}/{input_file}` fully into memory as an element tree
/// 2. Creates the output directory if it doesn't exist
/// 3. Opens one CSV file per table and writes the header rows
/// 4. Walks every Property depth-first, writing rows in document order
/// 5. Flushes and closes the tables
///
/// Existing table files in the output directory are overwritten, so running the
/// export twice on the same input leaves byte-identical output.
///
/// # Errors
///
/// Returns an error if:
/// - The input file cannot be read or is not well-formed XML
/// - The output directory or a table file cannot be created
/// - An element or attribute the registry schema guarantees is missing
///
/// On error, tables opened so far are closed with the rows already written.
pub fn run_export(config: &ResolvedConfig) -> AppResult<ExportStats> {
    let input_path = config.input_path();
    let output_dir = config.output_dir();
    let start = Instant::now();

    let input_bytes = fs::metadata(&input_path)
        .map_err(|e| {
            AppError::IoError(format!(
                "Failed to read input file {}: {e}",
                input_path.display()
            ))
        })?
        .len();
    let root = load_document(&input_path)?;
    let property_count = root.children_named(PROPERTY_ELEMENT).count();

    info!(
        input = %input_path.display(),
        size_mb = round_two_decimals(mb_from_bytes(input_bytes)),
        properties = property_count,
        elapsed = format_duration(start.elapsed()),
        "Document loaded"
    );

    fs::create_dir_all(&output_dir)
        .map_err(|e| AppError::IoError(format!("Failed to create output directory: {e}")))?;
    info!(output_dir = %output_dir.display(), "Writing tables");

    let progress = if config.progress {
        create_progress_bar(property_count as u64)?
    } else {
        ProgressBar::hidden()
    };

    let mut ctx = ExportContext::new(TableSinks::create(&output_dir)?).with_progress(progress);
    export_document(&root, &mut ctx)?;
    let (stats, _files) = ctx.finish()?;

    info!(
        custodians = stats.rows(Table::Custodian),
        properties = stats.rows(Table::Property),
        parcels = stats.rows(Table::Parcel),
        structures = stats.rows(Table::Structure),
        structure_photos = stats.rows(Table::StructurePhoto),
        tenants = stats.rows(Table::Tenant),
        contaminated_sites = stats.rows(Table::FederalContaminatedSite),
        property_photos = stats.rows(Table::PropertyPhoto),
        elapsed = format_duration(start.elapsed()),
        "Export completed"
    );

    Ok(stats)
}
