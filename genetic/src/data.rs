// Author: Dylan Turner <dylan.turner@tutanota.com>
//! Convert CSV rows into feature/target records for training

use std::{
    fs::File, io::Read, path::Path
};
use csv::{
    ErrorKind, ReaderBuilder, Trim
};
use ndarray::Array1;
use crate::error::{
    Error, Result
};

/// One row of a data set: every column but the last are features, the last is the target
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub features: Array1<f64>,
    pub target: f64
}

impl Record {
    /// Split a parsed row. Needs at least one feature
    pub fn from_row(mut row: Vec<f64>) -> Result<Self> {
        if row.len() < 2 {
            return Err(Error::DataFormat(format!(
                "expected at least one feature and a target, got {} field(s)", row.len()
            )));
        }
        if let Some(i) = row.iter().position(|v| !v.is_finite()) {
            return Err(Error::DataFormat(format!(
                "field {} is {}, only finite numbers can be trained on", i + 1, row[i]
            )));
        }
        let target = row.pop().unwrap_or_default();
        Ok(Self {
            features: Array1::from(row),
            target
        })
    }
}

/// Every record in a file. Features all have the same width
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub records: Vec<Record>
}

impl DataSet {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if let Some(first) = records.first() {
            let width = first.features.len();
            if let Some((i, bad)) = records.iter().enumerate().find(|(_, r)| r.features.len() != width) {
                return Err(Error::DataFormat(format!(
                    "record {} has {} features, expected {}", i, bad.features.len(), width
                )));
            }
        }
        Ok(Self {
            records
        })
    }

    /// Read in the rows of the table, skipping the header
    pub fn from_file<P: AsRef<Path>>(fname: P) -> Result<Self> {
        let fname = fname.as_ref();
        let file = File::open(fname)?;
        Self::from_reader(file).map_err(|err| match err {
            Error::DataFormat(msg) => Error::DataFormat(format!("{}: {}", fname.display(), msg)),
            err => err
        })
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(rdr);

        let mut records = Vec::new();
        for result in reader.deserialize::<Vec<f64>>() {
            let row = result.map_err(|err| match err.into_kind() {
                ErrorKind::Io(err) => Error::Io(err),
                kind => Error::DataFormat(describe(kind))
            })?;
            records.push(Record::from_row(row)?);
        }

        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feature width, None for an empty set
    pub fn num_features(&self) -> Option<usize> {
        self.records.first().map(|record| record.features.len())
    }

    /// Empty data sets can't be scored, refuse them up front
    pub fn require_records(&self, name: &str) -> Result<()> {
        if self.is_empty() {
            Err(Error::Precondition(format!("{} data set has no records", name)))
        } else {
            Ok(())
        }
    }
}

// Keep line numbers in the message, csv's own Display is very generic for these
fn describe(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::UnequalLengths { pos, expected_len, len } => format!(
            "line {}: expected {} fields, found {}",
            pos.map(|p| p.line()).unwrap_or_default(), expected_len, len
        ),
        ErrorKind::Deserialize { pos, err } => format!(
            "line {}: {}",
            pos.map(|p| p.line()).unwrap_or_default(), err
        ),
        ErrorKind::Utf8 { pos, err } => format!(
            "line {}: {}",
            pos.map(|p| p.line()).unwrap_or_default(), err
        ),
        kind => format!("{:?}", kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reads_rows_after_header() {
        let csv = "x1,x2,y\n0,1,2\n1.5, -2 ,3.25\n";
        let data = DataSet::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.num_features(), Some(2));
        assert_eq!(data.records[0].features, array![ 0.0, 1.0 ]);
        assert_eq!(data.records[0].target, 2.0);
        assert_eq!(data.records[1].features, array![ 1.5, -2.0 ]);
        assert_eq!(data.records[1].target, 3.25);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = "x,y\n\n1,3\n\n2,5\n";
        let data = DataSet::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn header_only_is_empty() {
        let data = DataSet::from_reader("x,y\n".as_bytes()).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.num_features(), None);
        assert!(matches!(data.require_records("train"), Err(Error::Precondition(_))));

        let data = DataSet::from_reader("".as_bytes()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn ragged_row_is_format_error() {
        let csv = "x1,x2,y\n1,2,3\n1,2\n";
        assert!(matches!(DataSet::from_reader(csv.as_bytes()), Err(Error::DataFormat(_))));
    }

    #[test]
    fn non_numeric_is_format_error() {
        let csv = "x,y\n1,abc\n";
        assert!(matches!(DataSet::from_reader(csv.as_bytes()), Err(Error::DataFormat(_))));
    }

    #[test]
    fn non_finite_values_are_format_error() {
        for csv in [ "x,y\n1,nan\n", "x,y\ninf,2\n", "x,y\n1,2\n-inf,NaN\n" ] {
            assert!(
                matches!(DataSet::from_reader(csv.as_bytes()), Err(Error::DataFormat(_))),
                "accepted {:?}", csv
            );
        }
        assert!(matches!(Record::from_row(vec![ f64::NAN, 1.0 ]), Err(Error::DataFormat(_))));
    }

    #[test]
    fn target_only_rows_are_format_error() {
        let csv = "y\n1\n2\n";
        assert!(matches!(DataSet::from_reader(csv.as_bytes()), Err(Error::DataFormat(_))));
    }

    #[test]
    fn mixed_widths_are_rejected() {
        let records = vec![
            Record::from_row(vec![ 1.0, 2.0 ]).unwrap(),
            Record::from_row(vec![ 1.0, 2.0, 3.0 ]).unwrap()
        ];
        assert!(matches!(DataSet::new(records), Err(Error::DataFormat(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("genetic_regressor_surely_missing.csv");
        assert!(matches!(DataSet::from_file(path), Err(Error::Io(_))));
    }
}
