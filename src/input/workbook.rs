use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::StringRecord;

use crate::input::table::TableShape;
use crate::input::{InputError, InputLayout};
use crate::model::reading::Reading;

/// Reads the first worksheet of an xlsx/xlsm/xls/ods workbook. The first
/// non-empty row is the header; fully empty rows are skipped. Cells are
/// taken as trimmed text, the same as delimited input.
pub fn read_workbook(
    path: &Path,
    layout: InputLayout,
) -> Result<(Vec<Reading>, InputLayout), InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(InputError::EmptyInput(path.display().to_string()));
    };
    let range = range?;

    let mut rows = range
        .rows()
        .map(cells_to_record)
        .filter(|record| record.iter().any(|cell| !cell.is_empty()));
    let headers = rows.next().unwrap_or_default();
    let shape = TableShape::resolve(&headers, layout)?;

    let mut readings = Vec::new();
    for record in rows {
        shape.push_row(&headers, &record, &mut readings);
    }
    tracing::debug!(
        path = %path.display(),
        sheets = workbook.sheet_names().len(),
        "read first worksheet"
    );
    Ok((readings, shape.layout()))
}

fn cells_to_record(cells: &[Data]) -> StringRecord {
    cells.iter().map(cell_text).collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
