//! This module provides utilities for loading matrices from files.
//!
//! Matrices are stored as headerless CSV: one matrix row per record, one entry per field.
//! Lines starting with `#` are comments and blank fields are not allowed. Surrounding
//! whitespace of each field is ignored.

use crate::matrix::from_rows;
use faer::Mat;
use std::{io, path::Path};
use thiserror::Error;

/// Represents all possible errors that can occur during data loading and parsing.
#[derive(Error, Debug)]
pub enum DataLoaderError {
    /// Wraps a standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Wraps an error raised by the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Occurs when a field cannot be parsed into a float.
    #[error("Parse error: Failed to parse float from '{value}' at row {row}, column {col}")]
    ParseFloat {
        value: String,
        row: usize,
        col: usize,
    },
    /// Occurs when the records do not form a rectangular matrix.
    #[error("Format error: {0}")]
    Shape(#[from] crate::error::NullSpaceError),
    /// Occurs when the file contains no records.
    #[error("Format error: The file does not contain any matrix rows.")]
    Empty,
}

/// Parses matrix rows from any CSV source.
///
/// # Returns
/// The parsed rows in file order, without any shape validation.
pub fn read_rows(reader: impl io::Read) -> Result<Vec<Vec<f64>>, DataLoaderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let values = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field
                    .parse::<f64>()
                    .map_err(|_| DataLoaderError::ParseFloat {
                        value: field.to_string(),
                        row,
                        col,
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(values);
    }
    Ok(rows)
}

/// Loads a dense matrix from a CSV file.
///
/// This is the main entry point of the module.
///
/// # Arguments
/// * `path`: Path to the CSV file.
///
/// # Returns
/// The matrix, with one row per CSV record. Ragged records are reported as a
/// [`DataLoaderError::Shape`] error.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Mat<f64>, DataLoaderError> {
    let file = std::fs::File::open(path)?;
    let rows = read_rows(io::BufReader::new(file))?;
    if rows.is_empty() {
        return Err(DataLoaderError::Empty);
    }
    Ok(from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn test_read_rows_with_comments_and_whitespace() {
        let input = "# rank one\n1, 2, 3\n2, 4, 6\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]]);

        let a = from_rows(&rows).unwrap();
        let expected: Mat<f64> = mat![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]];
        assert_eq!(a, expected);
    }

    #[test]
    fn test_read_rows_reports_bad_field() {
        let input = "1,2\n3,x\n";
        let err = read_rows(input.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: Failed to parse float from 'x' at row 1, column 1"
        );
    }

    #[test]
    fn test_ragged_rows_are_a_shape_error() {
        let rows = read_rows("1,2\n3\n".as_bytes()).unwrap();
        let err = DataLoaderError::from(from_rows(&rows).unwrap_err());
        assert!(matches!(err, DataLoaderError::Shape(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_matrix("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DataLoaderError::Io(_)));
    }
}
