use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

pub mod json;
pub mod table;
pub mod workbook;

use crate::model::reading::Reading;

pub const TREATMENT_COLUMN: &str = "Treatment";
pub const OD450_COLUMN: &str = "OD450";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputLayout {
    /// `Treatment` and `OD450` headers present -> long, else wide.
    Auto,
    /// One column per treatment, one OD reading per cell.
    Wide,
    /// One row per reading with `Treatment` and `OD450` columns.
    Long,
}

impl InputLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            InputLayout::Auto => "auto",
            InputLayout::Wide => "wide",
            InputLayout::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
    /// First worksheet of an xlsx, xlsm, xls or ods file.
    Workbook,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error(
        "unsupported input format: {0} (use .csv, .tsv, .txt or .json, optionally gzipped, or .xlsx, .xlsm, .xls, .ods)"
    )]
    UnsupportedFormat(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("input has no readings: {0}")]
    EmptyInput(String),
}

#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub readings: Vec<Reading>,
    /// Layout actually used, never `Auto`.
    pub layout: InputLayout,
    pub format: InputFormat,
}

pub fn detect_format(path: &Path) -> Result<InputFormat, InputError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let (name, gzipped) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match (ext, gzipped) {
        ("csv", _) => Ok(InputFormat::Csv),
        ("tsv" | "txt", _) => Ok(InputFormat::Tsv),
        ("json", _) => Ok(InputFormat::Json),
        ("xlsx" | "xlsm" | "xls" | "ods", false) => Ok(InputFormat::Workbook),
        _ => Err(InputError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_readings(path: &Path, layout: InputLayout) -> Result<LoadedTable, InputError> {
    let format = detect_format(path)?;
    let (readings, layout) = match format {
        InputFormat::Csv => table::read_table(open_maybe_gz(path)?, b',', layout)?,
        InputFormat::Tsv => table::read_table(open_maybe_gz(path)?, b'\t', layout)?,
        InputFormat::Json => {
            if layout == InputLayout::Wide {
                tracing::warn!(path = %path.display(), "--layout wide ignored for JSON input");
            }
            (json::read_json(open_maybe_gz(path)?)?, InputLayout::Long)
        }
        InputFormat::Workbook => workbook::read_workbook(path, layout)?,
    };
    if readings.is_empty() {
        return Err(InputError::EmptyInput(path.display().to_string()));
    }
    tracing::info!(
        path = %path.display(),
        layout = layout.as_str(),
        rows = readings.len(),
        "loaded readings"
    );
    Ok(LoadedTable {
        readings,
        layout,
        format,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
