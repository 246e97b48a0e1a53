use crate::record::LaunchRecord;
use std::{io::Read, path::Path};
use thiserror::Error;

/// Columns the loader refuses to go without. Extra columns in the
/// source are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read launch records: {0}")]
    Csv(#[from] csv::Error),
    #[error("source is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("dataset contains no rows with a payload mass")]
pub struct EmptyDatasetError;

/// Global payload-mass bounds, computed once at load time over records
/// with a present mass. Seeds the default selector range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// The launch-records table, loaded once and read-only for the rest of
/// the process lifetime. Concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<LaunchRecord>,
    known_sites: Vec<String>,
    payload_bounds: Option<PayloadBounds>,
}

impl DatasetStore {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut known_sites: Vec<String> = Vec::new();
        for record in &records {
            if !known_sites.contains(&record.launch_site) {
                known_sites.push(record.launch_site.clone());
            }
        }

        let mut payload_bounds = None;
        for mass in records.iter().filter_map(|r| r.payload_mass_kg) {
            let bounds = payload_bounds.get_or_insert(PayloadBounds {
                min: mass,
                max: mass,
            });
            bounds.min = bounds.min.min(mass);
            bounds.max = bounds.max.max(mass);
        }

        Self {
            records,
            known_sites,
            payload_bounds,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Self::from_csv_reader(csv::Reader::from_reader(reader))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_csv_reader(csv::Reader::from_path(path)?)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, LoadError> {
        let headers = reader.headers()?;
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|header| header == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let records = reader
            .deserialize()
            .collect::<Result<Vec<LaunchRecord>, _>>()?;
        tracing::info!(rows = records.len(), "loaded launch records");
        Ok(Self::from_records(records))
    }

    /// Replaces the offered site set with a curated list. The list is
    /// not validated against the data; offering a site with no records
    /// is a caller concern and simply yields empty views.
    pub fn with_known_sites(mut self, sites: Vec<String>) -> Self {
        self.known_sites = sites;
        self
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Site identifiers the UI may offer as selector options, in
    /// first-seen order unless a curated set was supplied.
    pub fn known_sites(&self) -> &[String] {
        &self.known_sites
    }

    pub fn is_known_site(&self, site: &str) -> bool {
        self.known_sites.iter().any(|known| known == site)
    }

    pub fn payload_bounds(&self) -> Result<PayloadBounds, EmptyDatasetError> {
        self.payload_bounds.ok_or(EmptyDatasetError)
    }
}
