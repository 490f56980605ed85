use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::debug;

use super::model::{FieldValue, Listing, ListingTable};
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Input resolver
// ---------------------------------------------------------------------------

/// Stock locations checked for the listings snapshot, in order.
pub const DATA_CANDIDATES: [&str; 2] = ["data/listings.csv", "data/listings.csv.gz"];

/// Return the first candidate path that exists on disk.
pub fn resolve_input(candidates: &[PathBuf]) -> Result<PathBuf, PipelineError> {
    candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .ok_or_else(|| PipelineError::MissingInput {
            tried: candidates.to_vec(),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse the resolved file as headered CSV, transparently decompressing when
/// the extension says gzip. Cell types are guessed per value; short records
/// are tolerated (the missing cells read back as `Null`).
pub fn load_table(path: &Path) -> Result<ListingTable> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = csv_reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut listings = Vec::new();
    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut fields = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(name) = columns.get(col_idx) else {
                // Extra trailing cell without a header; nothing to key it by.
                continue;
            };
            fields.insert(name.clone(), guess_field_type(value));
        }
        listings.push(Listing { fields });
    }

    debug!("parsed {} rows from {}", listings.len(), path.display());
    Ok(ListingTable::new(columns, listings))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

fn guess_field_type(s: &str) -> FieldValue {
    if s.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    if s == "true" || s == "false" {
        return FieldValue::Bool(s == "true");
    }
    FieldValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::tempdir;

    use super::*;

    const SAMPLE: &str = "id,neighbourhood_cleansed,price\n\
                          1,Jordaan,\"$1,100.00\"\n\
                          2,Oost,95.5\n\
                          3,Westerpark,\n";

    #[test]
    fn resolver_picks_first_existing_candidate() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        std::fs::write(&b, SAMPLE).unwrap();

        let resolved = resolve_input(&[a, b.clone()]).unwrap();
        assert_eq!(resolved, b);
    }

    #[test]
    fn resolver_fails_when_nothing_exists() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let err = resolve_input(&[missing]).unwrap_err();
        assert!(matches!(err, PipelineError::MissingInput { .. }));
    }

    #[test]
    fn plain_and_gzip_inputs_load_identically() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("listings.csv");
        std::fs::write(&plain, SAMPLE).unwrap();

        let gz = dir.path().join("listings.csv.gz");
        let mut enc = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        enc.write_all(SAMPLE.as_bytes()).unwrap();
        enc.finish().unwrap();

        let from_plain = load_table(&plain).unwrap();
        let from_gz = load_table(&gz).unwrap();

        assert_eq!(from_plain.columns, from_gz.columns);
        assert_eq!(from_plain.len(), from_gz.len());
        for (a, b) in from_plain.listings.iter().zip(&from_gz.listings) {
            assert_eq!(a.fields, b.fields);
        }
    }

    #[test]
    fn cell_types_are_guessed_per_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("listings.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(
            table.columns,
            vec!["id", "neighbourhood_cleansed", "price"]
        );

        let prices: Vec<&FieldValue> = table.column("price").collect();
        assert_eq!(prices[0], &FieldValue::String("$1,100.00".into()));
        assert_eq!(prices[1], &FieldValue::Float(95.5));
        assert_eq!(prices[2], &FieldValue::Null);

        let ids: Vec<&FieldValue> = table.column("id").collect();
        assert_eq!(ids[0], &FieldValue::Integer(1));
    }
}
