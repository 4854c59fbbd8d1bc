use std::io::Read;

use crate::input::InputError;
use crate::model::reading::Reading;

/// Expects a top-level array of `{"Treatment": ..., "OD450": ...}` records.
/// `OD450` may be a number, a string or `null`; extra keys are ignored.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Reading>, InputError> {
    let readings: Vec<Reading> = serde_json::from_reader(reader)?;
    Ok(readings)
}
