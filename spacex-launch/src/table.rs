//! The launch dataset, loaded once at startup and read-only afterwards.
//!
//! # CSV Format
//!
//! Headers are required. Only four columns are read; the rest are ignored:
//!
//! ```text
//! Launch Site,Payload Mass (kg),class,Booster Version Category
//! CCAFS LC-40,525.0,0,v1.0
//! ```

use crate::record::{LaunchRecord, Outcome};
use anyhow::{anyhow, bail, Context};
use std::collections::HashSet;
use std::path::Path;

/// Immutable, fixed-order table of launch records.
///
/// There are no mutation methods. Share it as `Arc<LaunchTable>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchTable {
    /// Read and validate the dataset at `path`.
    ///
    /// Any failure is fatal for the dashboard, so the error always names
    /// the file that could not be used.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let csv_data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read launch dataset {}", path.display()))?;
        let table = Self::from_csv_str(&csv_data)
            .with_context(|| format!("malformed launch dataset {}", path.display()))?;
        log::info!(
            "loaded {} launch records from {} (payload {} - {} kg)",
            table.len(),
            path.display(),
            table.min_payload,
            table.max_payload
        );
        Ok(table)
    }

    /// Parse the dataset from an in-memory CSV string.
    pub fn from_csv_str(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for (idx, result) in rdr.deserialize::<LaunchRecord>().enumerate() {
            // Header is line 1, so the first record sits on line 2.
            let line = idx + 2;
            let record = result.with_context(|| format!("invalid record on line {line}"))?;
            check_payload(&record).with_context(|| format!("invalid record on line {line}"))?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Build a table from records assembled in memory.
    ///
    /// Payloads are checked the same way as when parsing a file; the error
    /// names the zero-based index of the first bad record.
    pub fn from_records(records: Vec<LaunchRecord>) -> anyhow::Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            check_payload(record).with_context(|| format!("invalid record at index {idx}"))?;
        }
        let (min_payload, max_payload) = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
            .ok_or_else(|| anyhow!("dataset contains no launch records"))?;

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the dataset (kg).
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the dataset (kg).
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count()
    }
}

fn check_payload(record: &LaunchRecord) -> anyhow::Result<()> {
    let mass = record.payload_mass_kg;
    if !mass.is_finite() || mass < 0.0 {
        bail!("payload mass must be a non-negative number, got {mass}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";

    fn csv(rows: &str) -> String {
        format!("{HEADER}{rows}")
    }

    #[test]
    fn parses_rows_in_file_order() {
        let table = LaunchTable::from_csv_str(&csv(
            "CCAFS LC-40,0.0,0,v1.0\nVAFB SLC-4E,500,1,v1.1\nCCAFS LC-40,9600,1,FT\n",
        ))
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[1].launch_site, "VAFB SLC-4E");
        assert_eq!(table.records()[1].outcome, Outcome::Success);
        assert_eq!(table.sites(), vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(table.success_count(), 2);
        assert_eq!(table.min_payload(), 0.0);
        assert_eq!(table.max_payload(), 9600.0);
    }

    #[test]
    fn ignores_extra_columns() {
        let data = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
                    1,2,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT\n";
        let table = LaunchTable::from_csv_str(data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].booster_version_category, "FT");
        assert_eq!(table.records()[1].payload_mass_kg, 2490.0);
    }

    #[test]
    fn rejects_class_outside_zero_and_one() {
        let err = LaunchTable::from_csv_str(&csv("KSC LC-39A,100,2,FT\n")).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn rejects_negative_payload() {
        let err = LaunchTable::from_csv_str(&csv("KSC LC-39A,100,1,FT\nKSC LC-39A,-5,1,FT\n"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 3"), "{err:#}");
    }

    #[test]
    fn from_records_rejects_bad_payloads() {
        let ok = LaunchRecord::new("A", 100.0, Outcome::Success, "FT");
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let records = vec![ok.clone(), LaunchRecord::new("A", bad, Outcome::Failure, "FT")];
            let err = LaunchTable::from_records(records).unwrap_err();
            let msg = format!("{err:#}");
            assert!(msg.contains("index 1"), "{msg}");
            assert!(msg.contains("non-negative"), "{msg}");
        }
        assert!(LaunchTable::from_records(vec![ok]).is_ok());
    }

    #[test]
    fn rejects_non_numeric_payload() {
        assert!(LaunchTable::from_csv_str(&csv("KSC LC-39A,heavy,1,FT\n")).is_err());
    }

    #[test]
    fn rejects_missing_column() {
        let data = "Launch Site,class,Booster Version Category\nKSC LC-39A,1,FT\n";
        assert!(LaunchTable::from_csv_str(data).is_err());
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = LaunchTable::from_csv_str(HEADER).unwrap_err();
        assert!(err.to_string().contains("no launch records"));
    }

    #[test]
    fn missing_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = LaunchTable::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("nope.csv"), "{err}");
    }

    #[test]
    fn malformed_file_error_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(csv("KSC LC-39A,100,7,FT\n").as_bytes()).unwrap();
        let err = LaunchTable::from_path(file.path()).unwrap_err();
        let name = file.path().display().to_string();
        assert!(err.to_string().contains(&name), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(csv("KSC LC-39A,100,1,FT\n").as_bytes()).unwrap();
        let table = LaunchTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
