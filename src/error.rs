//! This module defines the custom error types for the library.
//!
//! All failure conditions of the null-space routines, the eigenvector recovery protocol
//! and the determinant helpers are centralized into a single enum: [`NullSpaceError`].
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with minimal
//! boilerplate. Note that [`faer::linalg::svd::SvdError`] and [`faer::linalg::evd::EvdError`]
//! do not implement the standard [`std::error::Error`] trait, so we wrap them manually.
use thiserror::Error;

/// Represents all possible errors raised by the null-space and eigenvector routines.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct NullSpaceError(#[from] NullSpaceErrorKind);

impl NullSpaceError {
    /// Returns `true` if the error signals that no null space was found at the requested
    /// tolerance, i.e. the shifted matrix had full numerical rank.
    pub fn is_no_null_space(&self) -> bool {
        matches!(self.0, NullSpaceErrorKind::NoNullSpace { .. })
    }
}

/// Private enum containing the distinct kinds of errors.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum NullSpaceErrorKind {
    /// A nested-row matrix literal had rows of inconsistent length.
    #[error("Ragged matrix: row {row} has {actual} entries, expected {expected}.")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The input matrix contains a NaN or infinite entry.
    #[error("Non-finite entry at ({row}, {col}).")]
    NonFinite { row: usize, col: usize },

    /// The tolerance must be a finite, non-negative number.
    #[error("Invalid tolerance: {0}. Expected a finite, non-negative value.")]
    InvalidTolerance(f64),

    /// A square matrix was required.
    #[error("Matrix must be square, got {nrows}x{ncols}.")]
    NotSquare { nrows: usize, ncols: usize },

    /// A symmetric matrix was required.
    #[error("Matrix is not symmetric: max |a_ij - a_ji| = {gap:e}.")]
    NotSymmetric { gap: f64 },

    /// The operands of a product have incompatible shapes.
    #[error(
        "Dimension mismatch: matrix has {matrix_cols} columns but vector has {vector_rows} rows."
    )]
    DimensionMismatch {
        matrix_cols: usize,
        vector_rows: usize,
    },

    /// `A - λI` had no singular value at or below the tolerance.
    #[error("No null space found for eigenvalue {eigenvalue} at tolerance {tolerance:e}.")]
    NoNullSpace { eigenvalue: f64, tolerance: f64 },

    /// Normalization of a zero vector was requested.
    #[error("Cannot normalize a zero vector.")]
    ZeroVector,

    /// Wraps an error originating from [`faer`]'s singular value decomposition.
    #[error("A numerical error occurred during the singular value decomposition: {0:?}")]
    Svd(faer::linalg::svd::SvdError),

    /// Wraps an error originating from [`faer`]'s eigendecomposition module.
    #[error("A numerical error occurred during the eigendecomposition: {0:?}")]
    Evd(faer::linalg::evd::EvdError),
}

// Compare through the inner kind.
impl PartialEq for NullSpaceError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
