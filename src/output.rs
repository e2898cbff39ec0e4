use crate::record::Record;
use anyhow::{Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::info;

/// Derives the output file name for a record: lowercased kind and name
/// joined by a dash, with any ':' replaced by '-'.
pub fn file_name(record: &Record) -> String {
    format!(
        "{}-{}.yaml",
        record.kind.to_lowercase(),
        record.name.to_lowercase()
    )
    .replace(':', "-")
}

/// Creates the output directory and any missing parents.
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| anyhow!("could not create output directory {}: {e}", dir.display()))
}

/// Writes each record to its derived path under `dir`.
///
/// No collision detection: records deriving the same name overwrite each
/// other, last one wins.
pub fn write_records(dir: &Path, records: &[Record]) -> Result<()> {
    for record in records {
        let name = file_name(record);
        info!("processing: {name}");
        overwrite_file(&dir.join(&name), &record.yaml)?;
    }
    Ok(())
}

/// Creates the target file, truncating any existing contents.
pub fn overwrite_file(path: &Path, payload: &str) -> Result<()> {
    fs::write(path, payload).map_err(|e| anyhow!("could not write {}: {e}", path.display()))
}
