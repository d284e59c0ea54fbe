//! Low-level numerical building blocks.
//!
//! - [`null_space`]: singular value decomposition with explicit ordering conventions, and
//!   the tolerance-based selection of null-space directions built on top of it.
//! - [`determinant`]: determinants of square matrices and the transpose-invariance check.
//!
//! For eigenvector recovery, prefer the protocol functions in [`crate::solvers`], which
//! compose these routines and guard against the zero-vector sentinel.

pub mod determinant;
pub mod null_space;

use crate::error::{NullSpaceError, NullSpaceErrorKind};

/// Default threshold at or below which a singular value is treated as numerically zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-13;

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), NullSpaceError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(NullSpaceErrorKind::InvalidTolerance(tolerance).into());
    }
    Ok(())
}
