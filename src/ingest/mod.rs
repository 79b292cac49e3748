//! CSV ingestion for appliance, curve, and historical usage data.
//!
//! The optimizer core takes plain data; this module is the file-format
//! collaborator that produces it. Records are validated on the way in so
//! that the core only ever sees well-formed inputs.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::{Appliance, BaselineCurve, MalformedCurve, PriceCurve};
use crate::forecast::UsagePoint;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record '{name}': {errors}")]
    InvalidRecord {
        name: String,
        errors: validator::ValidationErrors,
    },

    #[error("duplicate appliance name '{0}'")]
    DuplicateName(String),

    #[error(transparent)]
    Curve(#[from] MalformedCurve),
}

/// One row of the appliances CSV. `flexible` is a 0/1 flag in the data
/// files; `latest_end = 24` means "up to midnight".
#[derive(Debug, Deserialize, Validate)]
pub struct ApplianceRecord {
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub power_kw: f64,
    #[validate(range(min = 1, max = 24))]
    pub duration_hours: u8,
    pub flexible: u8,
    #[validate(range(max = 23))]
    pub earliest_start: u8,
    #[validate(range(max = 24))]
    pub latest_end: u8,
}

impl From<ApplianceRecord> for Appliance {
    fn from(record: ApplianceRecord) -> Self {
        Appliance {
            name: record.name,
            power_kw: record.power_kw,
            duration_hours: record.duration_hours,
            flexible: record.flexible != 0,
            earliest_start: record.earliest_start,
            latest_end: record.latest_end,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
struct HourlyKwhRecord {
    #[validate(range(max = 23))]
    hour: u8,
    kwh: f64,
}

#[derive(Debug, Deserialize, Validate)]
struct HourlyPriceRecord {
    #[validate(range(max = 23))]
    hour: u8,
    #[validate(range(min = 0.0))]
    price_per_kwh: f64,
}

#[derive(Debug, Deserialize)]
struct UsageRecord {
    #[serde(alias = "Date")]
    date: NaiveDate,
    hour: u8,
    kwh: f64,
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_appliances<R: Read>(reader: R) -> Result<Vec<Appliance>, IngestError> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    let mut reader = csv::Reader::from_reader(reader);
    for result in reader.deserialize() {
        let record: ApplianceRecord = result?;
        record
            .validate()
            .map_err(|errors| IngestError::InvalidRecord {
                name: record.name.clone(),
                errors,
            })?;
        if !seen.insert(record.name.clone()) {
            return Err(IngestError::DuplicateName(record.name));
        }
        out.push(record.into());
    }
    Ok(out)
}

pub fn load_appliances(path: &Path) -> Result<Vec<Appliance>, IngestError> {
    read_appliances(open(path)?)
}

pub fn read_baseline<R: Read>(reader: R) -> Result<BaselineCurve, IngestError> {
    let mut entries = Vec::new();
    let mut reader = csv::Reader::from_reader(reader);
    for result in reader.deserialize() {
        let record: HourlyKwhRecord = result?;
        record
            .validate()
            .map_err(|errors| IngestError::InvalidRecord {
                name: format!("baseline hour {}", record.hour),
                errors,
            })?;
        entries.push((record.hour, record.kwh));
    }
    Ok(BaselineCurve::from_hourly(entries)?)
}

pub fn load_baseline(path: &Path) -> Result<BaselineCurve, IngestError> {
    read_baseline(open(path)?)
}

pub fn read_prices<R: Read>(reader: R) -> Result<PriceCurve, IngestError> {
    let mut entries = Vec::new();
    let mut reader = csv::Reader::from_reader(reader);
    for result in reader.deserialize() {
        let record: HourlyPriceRecord = result?;
        record
            .validate()
            .map_err(|errors| IngestError::InvalidRecord {
                name: format!("price hour {}", record.hour),
                errors,
            })?;
        entries.push((record.hour, record.price_per_kwh));
    }
    Ok(PriceCurve::from_hourly(entries)?)
}

pub fn load_prices(path: &Path) -> Result<PriceCurve, IngestError> {
    read_prices(open(path)?)
}

pub fn read_history<R: Read>(reader: R) -> Result<Vec<UsagePoint>, IngestError> {
    let mut out = Vec::new();
    let mut reader = csv::Reader::from_reader(reader);
    for result in reader.deserialize() {
        let record: UsageRecord = result?;
        out.push(UsagePoint {
            date: record.date,
            hour: record.hour % 24,
            kwh: record.kwh,
        });
    }
    Ok(out)
}

pub fn load_history(path: &Path) -> Result<Vec<UsagePoint>, IngestError> {
    read_history(open(path)?)
}
