//! Null-space recovery via singular value decomposition.
//!
//! For a matrix $\mathbf{A} \in \mathbb{R}^{m \times n}$ with SVD
//! $\mathbf{A} = \mathbf{U} \mathbf{\Sigma} \mathbf{V}^T$, every right singular vector
//! $\mathbf{v}_i$ whose singular value $\sigma_i$ vanishes satisfies
//! $\mathbf{A}\mathbf{v}_i = \sigma_i \mathbf{u}_i = \mathbf{0}$. In floating point arithmetic
//! the singular values of a rank-deficient matrix are only approximately zero, so a
//! tolerance decides which directions are treated as part of the null space.
//!
//! ## Conventions
//!
//! The selection logic relies on two properties of [`SingularValueDecomposition`]:
//!
//! - singular values are sorted in **descending** order, so null-space directions form the
//!   tail of the decomposition;
//! - right singular vectors are stored as the **columns** of `v`. Column `i` of `v` is
//!   row `i` of $\mathbf{V}^T$ and belongs to singular value `i`.
//!
//! When `m < n` the decomposition only yields `m` singular values while `v` is `n x n`.
//! The trailing `n - m` columns have an implicit singular value of zero and always belong
//! to the null space.

use super::validate_tolerance;
use crate::{
    error::{NullSpaceError, NullSpaceErrorKind},
    matrix::ensure_finite,
};
use faer::{Mat, MatRef};

/// The three factors of a full singular value decomposition.
#[derive(Debug, Clone)]
pub struct SingularValueDecomposition {
    /// Left singular vectors, `m x m`, orthonormal columns.
    pub u: Mat<f64>,
    /// Non-negative singular values sorted in descending order, of length `min(m, n)`.
    pub singular_values: Vec<f64>,
    /// Right singular vectors, `n x n`, one per column.
    pub v: Mat<f64>,
}

impl SingularValueDecomposition {
    /// Number of columns of the decomposed matrix.
    pub fn ncols(&self) -> usize {
        self.v.ncols()
    }

    /// Singular value aligned with column `index` of `v`.
    ///
    /// Indices past `min(m, n)` report the implicit zero singular value.
    pub fn singular_value(&self, index: usize) -> f64 {
        self.singular_values.get(index).copied().unwrap_or(0.0)
    }

    /// Indices of the columns of `v` whose singular value is at or below `tolerance`,
    /// in decomposition order.
    pub fn null_space_indices(&self, tolerance: f64) -> impl Iterator<Item = usize> + '_ {
        (0..self.ncols()).filter(move |&i| self.singular_value(i) <= tolerance)
    }

    /// Numerical rank: the number of singular values strictly above `tolerance`.
    pub fn rank(&self, tolerance: f64) -> usize {
        self.singular_values.iter().filter(|&&s| s > tolerance).count()
    }

    /// Returns column `index` of `v` as an owned `n x 1` vector.
    pub fn right_singular_vector(&self, index: usize) -> Mat<f64> {
        self.v.as_ref().get(.., index..index + 1).to_owned()
    }
}

/// Computes the full singular value decomposition of `a`.
///
/// Matrices with no rows or no columns are handled without calling into the decomposition:
/// they have no singular values and identity singular-vector bases.
///
/// # Errors
/// Fails on non-finite entries and when [`faer`]'s SVD does not converge.
pub fn singular_value_decomposition(
    a: MatRef<'_, f64>,
) -> Result<SingularValueDecomposition, NullSpaceError> {
    ensure_finite(a)?;

    let (m, n) = (a.nrows(), a.ncols());
    if m == 0 || n == 0 {
        return Ok(SingularValueDecomposition {
            u: Mat::identity(m, m),
            singular_values: Vec::new(),
            v: Mat::identity(n, n),
        });
    }

    let svd = a
        .svd()
        .map_err(|e| NullSpaceError::from(NullSpaceErrorKind::Svd(e)))?;
    let s = svd.S();
    let singular_values = (0..m.min(n)).map(|i| s[i]).collect();

    Ok(SingularValueDecomposition {
        u: svd.U().to_owned(),
        singular_values,
        v: svd.V().to_owned(),
    })
}

/// Returns one vector spanning the numerical null space of `a`.
///
/// The SVD of `a` is computed and the right singular vectors whose singular value is at
/// or below `tolerance` are selected. The **first** of them, in decomposition order, is
/// returned as an `n x 1` column. If none qualifies (the matrix has full numerical rank)
/// the zero vector of length `n` is returned as a sentinel.
///
/// Only a single basis vector is returned even if the null space has a higher dimension;
/// use [`null_space_basis`] to obtain all of them.
///
/// # Arguments
/// * `a`: Any `m x n` matrix; typically `A - λI` for a known eigenvalue `λ`.
/// * `tolerance`: Threshold for treating a singular value as zero, see
///   [`crate::DEFAULT_TOLERANCE`].
///
/// # Returns
/// A vector `v` with `A v ≈ 0`, or the zero vector when no null space exists at this
/// tolerance. The vector has unit norm whenever it is not the sentinel.
pub fn find_null_space(a: MatRef<'_, f64>, tolerance: f64) -> Result<Mat<f64>, NullSpaceError> {
    validate_tolerance(tolerance)?;
    let svd = singular_value_decomposition(a)?;

    match svd.null_space_indices(tolerance).next() {
        Some(index) => {
            log::debug!(
                "Null space found at column {index} (singular value {:e}, tolerance {tolerance:e}).",
                svd.singular_value(index)
            );
            Ok(svd.right_singular_vector(index))
        }
        None => {
            log::debug!(
                "No singular value at or below {tolerance:e}; returning the zero vector of length {}.",
                a.ncols()
            );
            Ok(Mat::zeros(a.ncols(), 1))
        }
    }
}

/// Returns an orthonormal basis of the numerical null space of `a`, one vector per column.
///
/// Unlike [`find_null_space`], this keeps every selected direction. A full-rank matrix
/// yields an `n x 0` matrix.
pub fn null_space_basis(a: MatRef<'_, f64>, tolerance: f64) -> Result<Mat<f64>, NullSpaceError> {
    validate_tolerance(tolerance)?;
    let svd = singular_value_decomposition(a)?;
    let indices: Vec<usize> = svd.null_space_indices(tolerance).collect();

    log::debug!(
        "Null space of a {}x{} matrix has dimension {} at tolerance {tolerance:e}.",
        a.nrows(),
        a.ncols(),
        indices.len()
    );

    let v = svd.v.as_ref();
    Ok(Mat::from_fn(a.ncols(), indices.len(), |i, j| v[(i, indices[j])]))
}
