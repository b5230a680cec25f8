use std::{collections::HashSet, fmt, io::Error, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::types::FeatureRecord;

#[derive(Debug)]
pub enum ExportError {
    IoError(Error),
    SerdeError(serde_json::Error),
    CsvError(csv::Error),
}

impl From<Error> for ExportError {
    fn from(err: Error) -> Self {
        ExportError::IoError(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerdeError(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "io error: {}", e),
            ExportError::SerdeError(e) => write!(f, "json error: {}", e),
            ExportError::CsvError(e) => write!(f, "csv error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// Writes `records` as one pretty-printed JSON array, replacing `path`.
pub async fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(records)?;
    write_file(path, json.into_bytes()).await
}

/// Writes one CSV row per record, replacing `path`.
///
/// The header is the union of all record keys in first-seen order. A record
/// without a given key gets an empty cell.
pub async fn write_csv(path: &Path, records: &[FeatureRecord]) -> Result<(), ExportError> {
    let columns = csv_columns(records);
    let mut writer = csv::Writer::from_writer(Vec::new());

    if !columns.is_empty() {
        writer.write_record(&columns)?;
        for record in records {
            writer.write_record(
                columns
                    .iter()
                    .map(|column| cell(record.get(column.as_str()))),
            )?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::IoError(e.into_error()))?;
    write_file(path, bytes).await
}

pub fn csv_columns(records: &[FeatureRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|record| record.keys())
        .filter(|key| seen.insert(key.as_str()))
        .cloned()
        .collect()
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

async fn write_file(path: &Path, contents: Vec<u8>) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, contents).await?;
    Ok(())
}
