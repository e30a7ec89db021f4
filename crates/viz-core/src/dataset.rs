// File: crates/viz-core/src/dataset.rs
// Summary: In-memory CSV table with string-keyed records, numeric accessors and filtering.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::DataError;

/// One CSV row. Field lookup goes through the shared header list.
#[derive(Clone, Debug)]
pub struct Record {
    index: usize,
    headers: Arc<Vec<String>>,
    values: Vec<String>,
}

impl Record {
    /// Zero-based data row index (header excluded).
    pub fn index(&self) -> usize { self.index }

    pub fn get(&self, field: &str) -> Option<&str> {
        let i = self.headers.iter().position(|h| h == field)?;
        self.values.get(i).map(String::as_str)
    }

    fn require(&self, field: &str) -> Result<&str, DataError> {
        self.get(field).ok_or_else(|| DataError::MissingField { row: self.index, field: field.to_string() })
    }

    /// Text value, empty string when the field is absent.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Parse a plain decimal number.
    pub fn number(&self, field: &str) -> Result<f64, DataError> {
        let raw = self.require(field)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(field, raw))
    }

    /// Parse a leading decimal integer; a fractional tail is dropped ("1994.0" -> 1994).
    pub fn integer(&self, field: &str) -> Result<i64, DataError> {
        let raw = self.require(field)?;
        let bytes = raw.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
            end = 1;
        }
        let digits_from = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_from {
            return Err(self.invalid(field, raw));
        }
        raw[..end].parse::<i64>().map_err(|_| self.invalid(field, raw))
    }

    fn invalid(&self, field: &str, raw: &str) -> DataError {
        DataError::InvalidNumber { row: self.index, field: field.to_string(), value: raw.to_string() }
    }
}

/// Ordered table loaded once from CSV.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;
        let table = Self::from_csv(rdr)?;
        debug!(path = %path.as_ref().display(), rows = table.len(), "loaded csv");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self, DataError> {
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let shared = Arc::new(headers.clone());
        let mut rows = Vec::new();
        for (index, rec) in rdr.records().enumerate() {
            let rec = rec?;
            rows.push(Record {
                index,
                headers: Arc::clone(&shared),
                values: rec.iter().map(str::to_string).collect(),
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn has_column(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }

    /// Fail on the first absent column.
    pub fn require(&self, fields: &[&str]) -> Result<(), DataError> {
        match fields.iter().find(|f| !self.has_column(f)) {
            Some(f) => Err(DataError::MissingColumn(f.to_string())),
            None => Ok(()),
        }
    }

    pub fn column(&self, field: &str) -> Result<Vec<f64>, DataError> {
        self.rows.iter().map(|r| r.number(field)).collect()
    }

    pub fn filter_eq(&self, field: &str, value: &str) -> Vec<&Record> {
        self.rows.iter().filter(|r| r.get(field) == Some(value)).collect()
    }

    /// Distinct values of `field` in first-appearance order.
    pub fn unique(&self, field: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter_map(|r| r.get(field))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> Table {
        Table::from_reader(src.as_bytes()).expect("parse")
    }

    #[test]
    fn integer_drops_fraction_and_rejects_text() {
        let t = table("Year,Name\n1994.0,a\n  2001 ,b\nabc,c\n");
        assert_eq!(t.rows[0].integer("Year").unwrap(), 1994);
        assert_eq!(t.rows[1].integer("Year").unwrap(), 2001);
        assert!(matches!(t.rows[2].integer("Year"), Err(DataError::InvalidNumber { row: 2, .. })));
    }

    #[test]
    fn unique_keeps_first_appearance_order() {
        let t = table("location,v\nUSA,1\nAUS,2\nUSA,3\nJPN,4\n");
        assert_eq!(t.unique("location"), vec!["USA", "AUS", "JPN"]);
        assert_eq!(t.filter_eq("location", "USA").len(), 2);
    }

    #[test]
    fn missing_field_is_reported() {
        let t = table("a\n1\n");
        assert!(matches!(t.rows[0].number("b"), Err(DataError::MissingField { .. })));
        assert!(matches!(t.require(&["a", "b"]), Err(DataError::MissingColumn(c)) if c == "b"));
    }
}
