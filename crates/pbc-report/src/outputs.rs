//! Output directory layout for a classification run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pbc_model::MappingTable;
use tracing::info;

use crate::csv_export::{write_items_csv, write_mapping_csv};
use crate::error::{ReportError, Result};
use crate::json::MappingReport;

pub const MAPPING_FILE: &str = "mapping.csv";
pub const ITEMS_FILE: &str = "pbc_items.csv";
pub const REPORT_FILE: &str = "report.json";

/// Files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub mapping: PathBuf,
    pub items: PathBuf,
    pub report: PathBuf,
}

/// Writes the mapping CSV, the PBC item CSV and the JSON report into
/// `output_dir`, creating it if needed.
pub fn write_outputs(
    output_dir: &Path,
    table: &MappingTable,
    report: &MappingReport,
) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let paths = OutputPaths {
        mapping: output_dir.join(MAPPING_FILE),
        items: output_dir.join(ITEMS_FILE),
        report: output_dir.join(REPORT_FILE),
    };

    write_file(&paths.mapping, |w| write_mapping_csv(table, w))?;
    write_file(&paths.items, |w| write_items_csv(&report.items, w))?;
    write_file(&paths.report, |w| report.write_json(w))?;

    info!(
        dir = %output_dir.display(),
        ledgers = table.len(),
        items = report.items.len(),
        "wrote mapping outputs"
    );
    Ok(paths)
}

fn write_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    let io_error = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().map_err(io_error)
}
