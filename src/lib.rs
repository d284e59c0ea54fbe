//! Null-space recovery via singular value decomposition.
//!
//! This crate finds a vector spanning the numerical null space of a dense matrix, and uses
//! it to recover an eigenvector from a known eigenvalue: every non-zero solution of
//! $(\mathbf{A} - \lambda\mathbf{I})\mathbf{v} = \mathbf{0}$ is an eigenvector of
//! $\mathbf{A}$ for $\lambda$.
//!
//! Built on the [`faer`] linear algebra framework, the routines operate on dense
//! [`faer::Mat<f64>`] matrices; vectors are represented as `n x 1` matrices.
//!
//! ## Algorithm
//!
//! [`find_null_space`] computes the SVD $\mathbf{A} = \mathbf{U}\mathbf{\Sigma}\mathbf{V}^T$,
//! selects the right singular vectors whose singular value is at or below a tolerance
//! (default [`DEFAULT_TOLERANCE`]), and returns the first of them. When the matrix has full
//! numerical rank, the zero vector is returned as a sentinel.
//!
//! [`eigenvector_for`] composes the shift `A - λI`, the null-space search and a
//! normalization to unit length. The zero sentinel is turned into an error instead of a
//! division by zero.
//!
//! ## Example Usage
//!
//! ```rust
//! use faer::{Mat, mat, prelude::*};
//! use nullspace_project::{DEFAULT_TOLERANCE, eigenvector_for, find_null_space};
//!
//! let a: Mat<f64> = mat![[3.0, 1.0], [0.0, 2.0]];
//!
//! // Eigenvector for the known eigenvalue λ = 2.
//! let v = eigenvector_for(a.as_ref(), 2.0, DEFAULT_TOLERANCE).unwrap();
//! let residual = &(a.as_ref() * v.as_ref()) - &(&v * Scale(2.0));
//! assert!(residual.norm_l2() < 1e-10);
//! assert!((v.norm_l2() - 1.0).abs() < 1e-10);
//!
//! // A full-rank matrix has no null space: the zero vector comes back.
//! let identity = Mat::<f64>::identity(3, 3);
//! let zero = find_null_space(identity.as_ref(), DEFAULT_TOLERANCE).unwrap();
//! assert_eq!(zero.norm_l2(), 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`algorithms`]: the SVD wrapper, null-space selection and determinants.
//! - [`solvers`]: eigenvector recovery, eigenpair verification, symmetric eigenpairs.
//! - [`matrix`]: construction of matrices from nested rows and small helpers.
//! - [`utils`]: loading matrices from CSV files.

pub mod algorithms;
pub mod error;
pub mod matrix;
pub mod solvers;
pub mod utils;

pub use algorithms::{
    DEFAULT_TOLERANCE,
    determinant::{determinant, transpose_invariance_gap},
    null_space::{
        SingularValueDecomposition, find_null_space, null_space_basis,
        singular_value_decomposition,
    },
};
pub use error::NullSpaceError;
pub use solvers::{
    EigenPair, EigenPairCheck, eigenvector_for, normalize, real_eigenpairs, symmetric_eigenpairs,
    verify_eigenpair,
};

/// Same as [`find_null_space`] with [`DEFAULT_TOLERANCE`].
pub fn find_null_space_default(
    a: faer::MatRef<'_, f64>,
) -> Result<faer::Mat<f64>, NullSpaceError> {
    find_null_space(a, DEFAULT_TOLERANCE)
}
