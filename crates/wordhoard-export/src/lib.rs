mod writer;

pub use writer::{HEADERS, export_csv, export_file_name};

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use wordhoard_types::VocabularyRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `records` to a dated CSV file inside `dir`, returning its path
pub fn export_to_dir(records: &[VocabularyRecord], dir: &Path) -> Result<PathBuf, ExportError> {
    export_to_dir_on(records, dir, Utc::now().date_naive())
}

fn export_to_dir_on(
    records: &[VocabularyRecord],
    dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));

    let file = File::create(&path)?;
    export_csv(records, file)?;

    tracing::info!(path = %path.display(), rows = records.len(), "Exported vocabulary");
    Ok(path)
}
