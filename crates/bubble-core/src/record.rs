// File: crates/bubble-core/src/record.rs
// Summary: Record/Dataset model produced by ingest and read by every chart stage.

use std::collections::BTreeMap;
use std::ops::Deref;

/// A cell from a column outside the five the chart uses, typed from its text.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Field {
    /// Infer the natural type of a raw cell.
    pub fn auto(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Field::Empty;
        }
        match s {
            "true" => return Field::Bool(true),
            "false" => return Field::Bool(false),
            "NaN" => return Field::Number(f64::NAN),
            _ => {}
        }
        match s.parse::<f64>() {
            Ok(v) if !s.eq_ignore_ascii_case("inf") && !s.eq_ignore_ascii_case("infinity") => Field::Number(v),
            _ => Field::Text(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// One observational unit (a country).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub country: String,
    pub income: f64,
    pub life_expectancy: f64,
    pub population: f64,
    pub region: String,
    /// Columns beyond the required five, keyed by header name.
    pub extra: BTreeMap<String, Field>,
}

impl Record {
    pub fn new(
        country: impl Into<String>,
        income: f64,
        life_expectancy: f64,
        population: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            income,
            life_expectancy,
            population,
            region: region.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// Ordered, immutable sequence of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl Deref for Dataset {
    type Target = [Record];
    fn deref(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
