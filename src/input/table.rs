use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::input::{InputError, InputLayout, OD450_COLUMN, TREATMENT_COLUMN};
use crate::model::reading::{OdValue, Reading};

/// Reads a delimited table. Blank lines are skipped and every field is
/// trimmed. Returns the readings and the resolved layout.
pub fn read_table<R: Read>(
    reader: R,
    delimiter: u8,
    layout: InputLayout,
) -> Result<(Vec<Reading>, InputLayout), InputError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let shape = TableShape::resolve(&headers, layout)?;

    let mut readings = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        shape.push_row(&headers, &record, &mut readings);
    }
    Ok((readings, shape.layout()))
}

/// Resolved layout of a header row, shared by delimited and workbook input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    Long { t_idx: usize, od_idx: usize },
    Wide,
}

impl TableShape {
    pub fn resolve(headers: &StringRecord, layout: InputLayout) -> Result<Self, InputError> {
        match (layout, long_column_indices(headers)) {
            (InputLayout::Long, None) => {
                let missing = if headers.iter().any(|h| h == TREATMENT_COLUMN) {
                    OD450_COLUMN
                } else {
                    TREATMENT_COLUMN
                };
                Err(InputError::MissingColumn(missing.to_string()))
            }
            (InputLayout::Long | InputLayout::Auto, Some((t_idx, od_idx))) => {
                Ok(TableShape::Long { t_idx, od_idx })
            }
            (InputLayout::Auto, None) | (InputLayout::Wide, _) => Ok(TableShape::Wide),
        }
    }

    pub fn layout(self) -> InputLayout {
        match self {
            TableShape::Long { .. } => InputLayout::Long,
            TableShape::Wide => InputLayout::Wide,
        }
    }

    pub fn push_row(self, headers: &StringRecord, record: &StringRecord, out: &mut Vec<Reading>) {
        match self {
            TableShape::Long { t_idx, od_idx } => out.push(long_row(record, t_idx, od_idx)),
            TableShape::Wide => wide_row(headers, record, out),
        }
    }
}

fn long_column_indices(headers: &StringRecord) -> Option<(usize, usize)> {
    let t_idx = headers.iter().position(|h| h == TREATMENT_COLUMN)?;
    let od_idx = headers.iter().position(|h| h == OD450_COLUMN)?;
    Some((t_idx, od_idx))
}

/// Columns other than treatment and OD450 are ignored.
fn long_row(record: &StringRecord, t_idx: usize, od_idx: usize) -> Reading {
    let treatment = record.get(t_idx).unwrap_or("");
    let od = record.get(od_idx).unwrap_or("");
    Reading {
        treatment: treatment.to_string(),
        od450: OdValue::Text(od.to_string()),
    }
}

/// Header names are the treatments; each non-empty cell is one reading.
fn wide_row(headers: &StringRecord, record: &StringRecord, out: &mut Vec<Reading>) {
    for (col, group) in headers.iter().enumerate() {
        let Some(value) = record.get(col) else {
            break;
        };
        if value.is_empty() {
            continue;
        }
        out.push(Reading {
            treatment: group.to_string(),
            od450: OdValue::Text(value.to_string()),
        });
    }
}
