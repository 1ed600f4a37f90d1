// File: crates/bubble-core/src/ingest.rs
// Summary: CSV ingest; header lookup by name, numeric columns parsed to f64, the rest kept as text.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::record::{Dataset, Field, Record};

pub const COL_COUNTRY: &str = "Country";
pub const COL_INCOME: &str = "Income";
pub const COL_LIFE_EXPECTANCY: &str = "LifeExpectancy";
pub const COL_POPULATION: &str = "Population";
pub const COL_REGION: &str = "Region";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Load a dataset from a CSV file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening dataset");
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

/// Load a dataset from CSV text held in memory.
pub fn from_str(text: &str) -> Result<Dataset, IngestError> {
    from_reader(text.as_bytes())
}

/// Load a dataset from any CSV byte stream with a header row.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let idx = |name: &'static str| -> Result<usize, IngestError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(IngestError::MissingColumn(name))
    };
    let i_country = idx(COL_COUNTRY)?;
    let i_income = idx(COL_INCOME)?;
    let i_life = idx(COL_LIFE_EXPECTANCY)?;
    let i_pop = idx(COL_POPULATION)?;
    let i_region = idx(COL_REGION)?;
    let required = [i_country, i_income, i_life, i_pop, i_region];

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let text = |i: usize| rec.get(i).unwrap_or("").trim().to_string();
        let number = |i: usize, name: &str| -> f64 {
            let raw = rec.get(i).unwrap_or("").trim();
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    warn!(row, column = name, value = raw, "non-numeric value; using NaN");
                    f64::NAN
                }
            }
        };

        let mut record = Record::new(
            text(i_country),
            number(i_income, COL_INCOME),
            number(i_life, COL_LIFE_EXPECTANCY),
            number(i_pop, COL_POPULATION),
            text(i_region),
        );
        for (i, name) in headers.iter().enumerate() {
            if required.contains(&i) {
                continue;
            }
            record.extra.insert(name.clone(), Field::auto(rec.get(i).unwrap_or("")));
        }
        out.push(record);
    }

    debug!(rows = out.len(), columns = headers.len(), "dataset loaded");
    Ok(Dataset::new(out))
}
