//! Dense matrix helpers shared by the null-space and eigenvector routines.
//!
//! Matrices are plain [`faer::Mat<f64>`] values and vectors are `n x 1` matrices. Since a
//! `Mat` is rectangular by construction, the only place where malformed (ragged) input can
//! appear is when a matrix is assembled from nested rows, which [`from_rows`] validates.

use crate::error::{NullSpaceError, NullSpaceErrorKind};
use faer::{Mat, MatRef};

/// Builds a dense matrix from a slice of rows.
///
/// Every row must have the same length as the first one. An empty slice yields a `0 x 0`
/// matrix.
///
/// # Errors
/// Returns a `RaggedRows` error naming the first row whose length differs.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Mat<f64>, NullSpaceError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    if let Some((row, actual)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != ncols)
    {
        return Err(NullSpaceErrorKind::RaggedRows {
            row,
            expected: ncols,
            actual,
        }
        .into());
    }

    Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

/// Returns `A - λI` for a square matrix `A`.
pub fn shifted_identity(a: MatRef<'_, f64>, lambda: f64) -> Result<Mat<f64>, NullSpaceError> {
    ensure_square(a)?;
    Ok(Mat::from_fn(a.nrows(), a.ncols(), |i, j| {
        if i == j { a[(i, j)] - lambda } else { a[(i, j)] }
    }))
}

/// Returns `true` if every entry of `v` is exactly zero.
///
/// This is the check a caller performs on the sentinel returned by
/// [`crate::find_null_space`] before normalizing.
pub fn is_zero_vector(v: MatRef<'_, f64>) -> bool {
    (0..v.nrows()).all(|i| (0..v.ncols()).all(|j| v[(i, j)] == 0.0))
}

/// Computes the matrix-vector product `A * v`, checking that the shapes agree.
pub fn apply(a: MatRef<'_, f64>, v: MatRef<'_, f64>) -> Result<Mat<f64>, NullSpaceError> {
    if a.ncols() != v.nrows() {
        return Err(NullSpaceErrorKind::DimensionMismatch {
            matrix_cols: a.ncols(),
            vector_rows: v.nrows(),
        }
        .into());
    }
    Ok(a * v)
}

pub(crate) fn ensure_square(a: MatRef<'_, f64>) -> Result<(), NullSpaceError> {
    if a.nrows() != a.ncols() {
        return Err(NullSpaceErrorKind::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        }
        .into());
    }
    Ok(())
}

/// Rejects NaN and infinite entries, which the decomposition cannot handle meaningfully.
pub(crate) fn ensure_finite(a: MatRef<'_, f64>) -> Result<(), NullSpaceError> {
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            if !a[(i, j)].is_finite() {
                return Err(NullSpaceErrorKind::NonFinite { row: i, col: j }.into());
            }
        }
    }
    Ok(())
}
