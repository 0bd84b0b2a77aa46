// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Delimited-text row source
//!
//! The first line names the columns. Columns are matched by name, in any
//! order; unknown columns are ignored. A column that is missing from the
//! header leaves the field absent, an empty cell leaves it empty.

use log::{debug, warn};
use onto2ids_model::{columns, IdsError, Result, Row, RowSource};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads ontology rows from CSV (or any single-byte delimited) text
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvRowSource<File> {
    /// Open a file separated by `delimiter`
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        Ok(Self::with_delimiter(File::open(path)?, delimiter))
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Comma-separated input
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, b',')
    }

    pub fn with_delimiter(reader: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self { reader }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn rows(&mut self) -> Result<Vec<Row>> {
        let headers = self.reader.headers().map_err(from_csv)?.clone();
        let layout = ColumnLayout::from_headers(headers.iter());

        let mut rows = Vec::new();
        for record in self.reader.records() {
            let record = record.map_err(from_csv)?;
            let line = record.position().map_or(0, |p| p.line());
            rows.push(layout.row(&record, line));
        }
        debug!("read {} rows", rows.len());
        Ok(rows)
    }
}

fn from_csv(err: csv::Error) -> IdsError {
    match err.position() {
        Some(pos) => IdsError::invalid_row(pos.line(), err.to_string()),
        None => IdsError::csv(err.to_string()),
    }
}

/// Strip a byte-order mark, surrounding whitespace and a SPARQL `?` prefix
fn normalize_header(header: &str) -> &str {
    let header = header.trim_start_matches('\u{feff}').trim();
    header.strip_prefix('?').unwrap_or(header)
}

/// Record index of each known column
#[derive(Debug, Default)]
struct ColumnLayout {
    positions: [Option<usize>; columns::ALL.len()],
}

impl ColumnLayout {
    fn from_headers<'h>(headers: impl Iterator<Item = &'h str>) -> Self {
        let mut layout = ColumnLayout::default();
        for (idx, header) in headers.enumerate() {
            let name = normalize_header(header);
            match columns::ALL.iter().position(|c| *c == name) {
                Some(col) if layout.positions[col].is_none() => layout.positions[col] = Some(idx),
                Some(_) => warn!("duplicate column {name:?} ignored"),
                None => debug!("ignoring unknown column {name:?}"),
            }
        }
        layout
    }

    fn cell<'r>(&self, record: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        let col = columns::ALL.iter().position(|c| *c == column)?;
        self.positions[col].and_then(|idx| record.get(idx))
    }

    fn text(&self, record: &csv::StringRecord, column: &str) -> Option<String> {
        self.cell(record, column).map(str::to_string)
    }

    fn count(&self, record: &csv::StringRecord, column: &str, line: u64) -> Option<u32> {
        let cell = self.cell(record, column)?.trim();
        if cell.is_empty() {
            return None;
        }
        if let Ok(n) = cell.parse::<u32>() {
            return Some(n);
        }
        // Numeric exports such as "1.0" or "1e0" count by their whole part
        match cell.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => {
                debug!("line {line}: {column} {cell:?} read as {}", n.trunc());
                Some(n.trunc() as u32)
            }
            _ => {
                warn!(
                    "line {line}: {column} {cell:?} is not a count; treating it as absent, \
                     which makes a min-only property optional"
                );
                None
            }
        }
    }

    fn row(&self, record: &csv::StringRecord, line: u64) -> Row {
        Row {
            class_label: self.text(record, columns::CLASS_LABEL),
            class_uri: self.text(record, columns::CLASS_URI),
            ifc_class_label: self.text(record, columns::IFC_CLASS_LABEL),
            property_label: self.text(record, columns::PROPERTY_LABEL),
            property_uri: self.text(record, columns::PROPERTY_URI),
            datatype: self.text(record, columns::DATATYPE),
            enum_values: self.text(record, columns::ENUM_VALUES),
            cardinality_min: self.count(record, columns::CARDINALITY_MIN, line),
            cardinality_max: self.count(record, columns::CARDINALITY_MAX, line),
        }
    }
}

/// Read all rows from comma-separated text
pub fn read_rows(input: &str) -> Result<Vec<Row>> {
    CsvRowSource::new(input.as_bytes()).rows()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLE: &str = "\
ontoClassPrefLabel,ontoClassURI,ifcClassLabel,ontoPropertyPrefLabel,ontoPropertyURI,ontoPropertyDatatype,ontoPropertyEnumValues,ontoPropertyCardinalityMin,ontoPropertyCardinalityMax
Wall,http://o/ns#Wall,IfcWall,Height,http://o/ns#height,IFCLENGTHMEASURE,,1,
Wall,http://o/ns#Wall,IfcWall,Finish,http://o/ns#finish,IFCLABEL,Matt|Gloss,0,1
Door,http://o/ns#Door,,,,,,,
";

    #[test]
    fn test_read_table() {
        let rows = read_rows(TABLE).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].class_uri.as_deref(), Some("http://o/ns#Wall"));
        assert_eq!(rows[0].datatype(), "IFCLENGTHMEASURE");
        assert_eq!(rows[0].cardinality_min, Some(1));
        assert_eq!(rows[0].cardinality_max, None);

        assert_eq!(rows[1].enum_values(), Some(vec!["Matt", "Gloss"]));
        assert_eq!(rows[1].cardinality_max, Some(1));

        // Present but empty
        assert_eq!(rows[2].property_label.as_deref(), Some(""));
        assert!(!rows[2].has_property());
    }

    #[test]
    fn test_sparql_headers_and_column_order() {
        let input = "?ontoClassURI\t?ontoClassPrefLabel\t?extra\nhttp://o/A\tA\tx\n";
        let rows = CsvRowSource::with_delimiter(input.as_bytes(), b'\t')
            .rows()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class_uri.as_deref(), Some("http://o/A"));
        assert_eq!(rows[0].class_label(), Some("A"));
        // Missing column stays absent
        assert_eq!(rows[0].property_label, None);
    }

    #[test]
    fn test_missing_class_column() {
        let rows = read_rows("ontoClassPrefLabel\nA\n").unwrap();
        assert_eq!(rows[0].class_uri, None);
    }

    #[test]
    fn test_lenient_counts() {
        let input = "\u{feff}ontoClassURI,ontoPropertyCardinalityMin,ontoPropertyCardinalityMax\nhttp://o/A, 2 ,*\n";
        let rows = read_rows(input).unwrap();
        assert_eq!(rows[0].class_uri.as_deref(), Some("http://o/A"));
        assert_eq!(rows[0].cardinality_min, Some(2));
        assert_eq!(rows[0].cardinality_max, None);
    }

    #[test]
    fn test_decimal_counts_use_whole_part() {
        let input = "ontoClassURI,ontoPropertyCardinalityMin,ontoPropertyCardinalityMax\n\
                     http://o/A,1.0,0.0\n\
                     http://o/B,2.7,-1\n";
        let rows = read_rows(input).unwrap();
        assert_eq!(rows[0].cardinality_min, Some(1));
        assert_eq!(rows[0].cardinality_max, Some(0));
        assert_eq!(rows[0].cardinality().status().to_string(), "prohibited");
        assert_eq!(rows[1].cardinality_min, Some(2));
        assert_eq!(rows[1].cardinality_max, None);
        assert_eq!(rows[1].cardinality().status().to_string(), "required");
    }

    #[test]
    fn test_from_path_with_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ontoClassURI;ontoClassPrefLabel\nhttp://o/A;A\n")
            .unwrap();
        let rows = CsvRowSource::from_path(file.path(), b';')
            .unwrap()
            .rows()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class_label(), Some("A"));

        let missing = CsvRowSource::from_path(file.path().with_extension("missing"), b',');
        assert!(matches!(missing, Err(IdsError::Io(_))));
    }

    #[test]
    fn test_short_records_are_accepted() {
        let rows = read_rows("ontoClassURI,ontoPropertyPrefLabel\nhttp://o/A\n").unwrap();
        assert_eq!(rows[0].property_label, None);
    }
}
