use serde::Deserialize;
use serde::de::IgnoredAny;

/// Raw OD450 cell as it came out of the table. Parsing is deferred so that
/// malformed cells can be dropped by the grouper instead of failing the load.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum OdValue {
    Number(f64),
    Text(String),
    /// Absent key or `null`.
    #[default]
    Missing,
    /// Booleans, arrays, objects.
    Other(IgnoredAny),
}

impl OdValue {
    pub fn parse(&self) -> Option<f64> {
        let v = match self {
            OdValue::Number(v) => *v,
            OdValue::Text(s) => s.trim().parse::<f64>().ok()?,
            OdValue::Missing | OdValue::Other(_) => return None,
        };
        if v.is_finite() { Some(v) } else { None }
    }
}

impl From<f64> for OdValue {
    fn from(value: f64) -> Self {
        OdValue::Number(value)
    }
}

impl From<&str> for OdValue {
    fn from(value: &str) -> Self {
        OdValue::Text(value.to_string())
    }
}

/// One well measurement. Only `Treatment` and `OD450` are read; any other
/// column of the record is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "OD450", default)]
    pub od450: OdValue,
}

impl Reading {
    pub fn new(treatment: impl Into<String>, od450: impl Into<OdValue>) -> Self {
        Self {
            treatment: treatment.into(),
            od450: od450.into(),
        }
    }
}
