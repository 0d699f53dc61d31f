//! CSV loading, column mapping and output writing.
//!
//! The collaborator side of the pipeline: reads a CSV with headers, feeds
//! one column through the split engine and writes every input column plus
//! a `<column>_split` column holding the segments as a JSON array.

use std::path::Path;

use csv::StringRecord;

use bulletsplit_core::{strip_markup, SplitEngine};

use crate::error::{Result, SplitError};

/// Read a CSV file into its header record and data records.
pub fn load_csv(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    tracing::debug!(rows = records.len(), "loaded CSV records");

    Ok((headers, records))
}

/// Find the index of `column` in the header record.
pub fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| SplitError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

/// Split one record's text column and append the segments as JSON.
///
/// Markup tokens are stripped before splitting, matching the upstream
/// export format. Returns the extended record and the segment count.
pub fn split_record(
    record: &StringRecord,
    index: usize,
    engine: &SplitEngine,
) -> Result<(StringRecord, usize)> {
    let raw = match record.get(index) {
        Some(field) => field,
        None => {
            tracing::warn!(index, "record has no value at the split column, treating as empty");
            ""
        }
    };
    let text = strip_markup(raw);
    let segments = engine.split(&text);

    let mut out = record.clone();
    out.push_field(&serde_json::to_string(&segments)?);
    Ok((out, segments.len()))
}

/// Write the output CSV: original headers plus the `<column>_split` column.
pub fn save_csv(
    path: &Path,
    headers: &StringRecord,
    column: &str,
    records: &[StringRecord],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut out_headers = headers.clone();
    out_headers.push_field(&format!("{column}_split"));
    writer.write_record(&out_headers)?;

    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file.flush().expect("flush");
        file
    }

    #[test]
    fn test_load_csv_headers_and_records() {
        let file = write_temp_csv("id,notes\n1,hello\n2,world\n");
        let (headers, records) = load_csv(file.path()).expect("load");

        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["id", "notes"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get(1), Some("world"));
    }

    #[test]
    fn test_column_index_found() {
        let headers = StringRecord::from(vec!["id", "condition"]);
        assert_eq!(column_index(&headers, "condition").expect("index"), 1);
    }

    #[test]
    fn test_column_index_missing() {
        let headers = StringRecord::from(vec!["id", "notes"]);
        let err = column_index(&headers, "condition").expect_err("missing");
        assert!(err.to_string().contains("id, notes"));
    }

    #[test]
    fn test_split_record_appends_json_segments() {
        let engine = SplitEngine::new();
        let record = StringRecord::from(vec!["7", "plan:<br>1. rest 2. fluids"]);

        let (out, count) = split_record(&record, 1, &engine).expect("split");

        assert_eq!(count, 3);
        assert_eq!(out.get(0), Some("7"));
        let segments: Vec<String> =
            serde_json::from_str(out.get(2).expect("segments field")).expect("json");
        assert_eq!(segments, vec!["plan: ", "1. rest ", "2. fluids"]);
    }

    #[test]
    fn test_split_record_without_bullets_keeps_whole_text() {
        let engine = SplitEngine::new();
        let record = StringRecord::from(vec!["stable, no changes"]);

        let (out, count) = split_record(&record, 0, &engine).expect("split");

        assert_eq!(count, 1);
        let segments: Vec<String> =
            serde_json::from_str(out.get(1).expect("segments field")).expect("json");
        assert_eq!(segments, vec!["stable, no changes"]);
    }

    #[test]
    fn test_split_record_short_record_treated_as_empty() {
        // A record with fewer fields than the header still gets a split
        // column: the missing value behaves like empty text.
        let engine = SplitEngine::new();
        let record = StringRecord::from(vec!["7"]);

        let (out, count) = split_record(&record, 3, &engine).expect("split");

        assert_eq!(count, 1);
        let segments: Vec<String> =
            serde_json::from_str(out.get(1).expect("segments field")).expect("json");
        assert_eq!(segments, vec![""]);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let engine = SplitEngine::new();
        let dir = tempfile::tempdir().expect("temp dir");
        let out_path = dir.path().join("out.csv");

        let headers = StringRecord::from(vec!["id", "condition"]);
        let record = StringRecord::from(vec!["1", "1. apple 2. banana 3. cherry "]);
        let (split, _) = split_record(&record, 1, &engine).expect("split");

        save_csv(&out_path, &headers, "condition", &[split]).expect("save");

        let (out_headers, out_records) = load_csv(&out_path).expect("reload");
        assert_eq!(
            out_headers.iter().collect::<Vec<_>>(),
            vec!["id", "condition", "condition_split"]
        );
        let segments: Vec<String> =
            serde_json::from_str(out_records[0].get(2).expect("field")).expect("json");
        assert_eq!(segments, vec!["1. apple ", "2. banana ", "3. cherry "]);
    }
}
