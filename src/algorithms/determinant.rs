//! Determinants of square matrices.
//!
//! The absolute value of `det(A)` is the factor by which the linear map `A` scales volumes,
//! and its sign tells whether orientation is preserved. A vanishing determinant means the
//! map collapses space onto a lower-dimensional subspace, which is exactly when `A` has a
//! non-trivial null space.

use crate::{
    error::NullSpaceError,
    matrix::{ensure_finite, ensure_square},
};
use faer::MatRef;

/// Computes the determinant of a square matrix by Gaussian elimination with partial
/// pivoting.
///
/// An exactly zero pivot column ends the elimination with a determinant of `0`, so
/// singular inputs such as `A - λI` never produce non-finite values. The determinant of a
/// `0 x 0` matrix is `1`.
pub fn determinant(a: MatRef<'_, f64>) -> Result<f64, NullSpaceError> {
    ensure_square(a)?;
    ensure_finite(a)?;

    let n = a.nrows();
    let mut work = a.to_owned();
    let mut lu = work.as_mut();
    let mut det = 1.0;

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&i, &j| lu[(i, k)].abs().total_cmp(&lu[(j, k)].abs()))
            .unwrap_or(k);
        let pivot = lu[(pivot_row, k)];
        if pivot == 0.0 {
            return Ok(0.0);
        }

        if pivot_row != k {
            for j in k..n {
                let tmp = lu[(k, j)];
                lu[(k, j)] = lu[(pivot_row, j)];
                lu[(pivot_row, j)] = tmp;
            }
            det = -det;
        }
        det *= pivot;

        for i in (k + 1)..n {
            let factor = lu[(i, k)] / pivot;
            for j in (k + 1)..n {
                let update = factor * lu[(k, j)];
                lu[(i, j)] -= update;
            }
        }
    }

    Ok(det)
}

/// Returns `|det(A) - det(Aᵀ)|`, which is zero up to rounding for every square matrix.
pub fn transpose_invariance_gap(a: MatRef<'_, f64>) -> Result<f64, NullSpaceError> {
    let det_a = determinant(a)?;
    let det_a_t = determinant(a.transpose())?;
    log::debug!("det(A) = {det_a}, det(A^T) = {det_a_t}");
    Ok((det_a - det_a_t).abs())
}
