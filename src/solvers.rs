//! This module provides a high-level API for recovering and verifying eigenvectors.
//!
//! The central protocol is [`eigenvector_for`]: given a square matrix `A` and a known
//! eigenvalue `λ`, any non-zero vector in the null space of `A - λI` is an eigenvector.
//! The null space is found with [`find_null_space`] and the result normalized to unit
//! length. Unlike a bare `v / ‖v‖`, the zero-vector sentinel is reported as an error
//! instead of producing non-finite entries.

use crate::{
    algorithms::{
        determinant::determinant,
        null_space::{find_null_space, null_space_basis},
        validate_tolerance,
    },
    error::{NullSpaceError, NullSpaceErrorKind},
    matrix::{apply, ensure_finite, ensure_square, is_zero_vector, shifted_identity},
};
use faer::{Side, prelude::*};

/// An eigenvalue together with a unit-norm eigenvector.
#[derive(Debug, Clone)]
pub struct EigenPair {
    pub value: f64,
    /// `n x 1` column of unit Euclidean norm.
    pub vector: Mat<f64>,
}

/// Residuals of the defining identities of an eigenpair `(λ, v)` of `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenPairCheck {
    /// `‖A v - λ v‖`.
    pub eigen_residual: f64,
    /// `‖(A - λI) v‖`.
    pub shifted_residual: f64,
    /// `det(A - λI)` as computed.
    pub determinant: f64,
    /// `|det(A - λI)| / ‖A - λI‖_F^(n-1)`, bounded above by the smallest singular value
    /// of `A - λI`. It is `0` when `A - λI` vanishes.
    pub determinant_residual: f64,
    /// `true` if all residuals are at or below the tolerance used for the check.
    pub passed: bool,
}

/// Scales `v` to unit Euclidean norm.
///
/// # Errors
/// Returns a `ZeroVector` error if `v` is identically zero.
pub fn normalize(v: MatRef<'_, f64>) -> Result<Mat<f64>, NullSpaceError> {
    if is_zero_vector(v) {
        return Err(NullSpaceErrorKind::ZeroVector.into());
    }
    let norm = v.norm_l2();
    Ok(v * Scale(1.0 / norm))
}

/// Recovers a unit eigenvector of `a` for the known eigenvalue `lambda`.
///
/// This executes the two-step protocol:
/// 1. Form `A - λI` and find a vector in its null space with the given `tolerance`.
/// 2. Normalize that vector to unit length.
///
/// If the eigenvalue has geometric multiplicity greater than one, only the first basis
/// vector returned by the decomposition is used.
///
/// # Errors
/// * `NotSquare` if `a` is not square.
/// * `NoNullSpace` if `A - λI` has full numerical rank at `tolerance`, i.e. `lambda` is
///   not an eigenvalue of `a` to that precision.
/// * Any error raised by the decomposition.
pub fn eigenvector_for(
    a: MatRef<'_, f64>,
    lambda: f64,
    tolerance: f64,
) -> Result<Mat<f64>, NullSpaceError> {
    let shifted = shifted_identity(a, lambda)?;
    let v = find_null_space(shifted.as_ref(), tolerance)?;

    if is_zero_vector(v.as_ref()) {
        return Err(NullSpaceErrorKind::NoNullSpace {
            eigenvalue: lambda,
            tolerance,
        }
        .into());
    }
    normalize(v.as_ref())
}

/// Evaluates how well `(lambda, v)` satisfies the eigenpair identities for `a`.
///
/// The check mirrors the three assertions one would write by hand: `A v = λ v`,
/// `(A - λI) v = 0` and `det(A - λI) = 0`.
///
/// The raw determinant is a product of `n` singular values and grows with the spread of
/// the spectrum, so it is divided by `‖A - λI‖_F^(n-1)` before the comparison. The scaled
/// value never exceeds `σ_min(A - λI)`, which is at most `‖(A - λI) v‖` for a unit `v`.
pub fn verify_eigenpair(
    a: MatRef<'_, f64>,
    lambda: f64,
    v: MatRef<'_, f64>,
    tolerance: f64,
) -> Result<EigenPairCheck, NullSpaceError> {
    validate_tolerance(tolerance)?;
    let shifted = shifted_identity(a, lambda)?;

    let av = apply(a, v)?;
    let lambda_v = v * Scale(lambda);
    let eigen_residual = (&av - &lambda_v).norm_l2();
    let shifted_residual = apply(shifted.as_ref(), v)?.norm_l2();
    let det = determinant(shifted.as_ref())?;
    let scale = shifted.norm_l2().powi(shifted.nrows().saturating_sub(1) as i32);
    let determinant_residual = if scale > 0.0 { det.abs() / scale } else { 0.0 };

    let passed = eigen_residual <= tolerance
        && shifted_residual <= tolerance
        && determinant_residual <= tolerance;

    Ok(EigenPairCheck {
        eigen_residual,
        determinant: det,
        shifted_residual,
        determinant_residual,
        passed,
    })
}

/// Computes all eigenpairs of a real symmetric matrix.
///
/// Eigenvalues come from [`faer`]'s self-adjoint eigendecomposition and are returned in
/// ascending order. Each eigenvector is then re-derived from the null space of `A - λI`
/// rather than taken from the decomposition. Eigenvalues that agree within `tolerance`
/// form a cluster sharing a single null-space basis, computed at the cluster mean, whose
/// columns are handed out in order, so the returned vectors stay orthonormal.
///
/// # Errors
/// * `NotSquare` / `NotSymmetric` for inputs outside the domain of the decomposition.
/// * `NoNullSpace` if `tolerance` is too strict to absorb the rounding error in a
///   computed eigenvalue.
pub fn symmetric_eigenpairs(
    a: MatRef<'_, f64>,
    tolerance: f64,
) -> Result<Vec<EigenPair>, NullSpaceError> {
    validate_tolerance(tolerance)?;
    ensure_square(a)?;
    ensure_finite(a)?;
    ensure_symmetric(a, tolerance)?;

    let n = a.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }

    let evd = a
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| NullSpaceError::from(NullSpaceErrorKind::Evd(e)))?;
    let eigenvalues: Vec<f64> = (0..n).map(|i| evd.S()[i]).collect();
    log::debug!("Eigenvalues of the {n}x{n} symmetric matrix: {eigenvalues:?}");

    eigenpairs_from_values(a, &eigenvalues, tolerance, true)
}

/// Computes the eigenpairs of a general square matrix that have a real eigenvalue.
///
/// Eigenvalues come from [`faer`]'s non-symmetric eigenvalue solver. Complex eigenvalues,
/// whose imaginary part exceeds `tolerance`, have no real eigenvector and are skipped.
/// The remaining ones are sorted in ascending order and each eigenvector is re-derived
/// from the null space of `A - λI`, clustering repeated eigenvalues as in
/// [`symmetric_eigenpairs`].
///
/// A defective eigenvalue (geometric multiplicity below its algebraic multiplicity)
/// yields only as many pairs as its null space has dimensions.
///
/// # Errors
/// * `NotSquare` for rectangular input.
/// * `NoNullSpace` if a real eigenvalue has no null space at `tolerance`.
pub fn real_eigenpairs(
    a: MatRef<'_, f64>,
    tolerance: f64,
) -> Result<Vec<EigenPair>, NullSpaceError> {
    validate_tolerance(tolerance)?;
    ensure_square(a)?;
    ensure_finite(a)?;

    let n = a.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }

    let spectrum = a
        .eigenvalues()
        .map_err(|e| NullSpaceError::from(NullSpaceErrorKind::Evd(e)))?;
    let mut eigenvalues: Vec<f64> = spectrum
        .iter()
        .filter(|z| z.im.abs() <= tolerance)
        .map(|z| z.re)
        .collect();
    eigenvalues.sort_by(f64::total_cmp);
    log::debug!(
        "{} of {n} eigenvalues are real: {eigenvalues:?}",
        eigenvalues.len()
    );

    eigenpairs_from_values(a, &eigenvalues, tolerance, false)
}

/// Derives unit eigenvectors for ascending `eigenvalues`.
///
/// Consecutive eigenvalues within `tolerance` of the first member of their cluster share
/// one null-space basis of `A - λ̄I`, where `λ̄` is the cluster mean. With `strict`, a
/// basis smaller than its cluster is an error; otherwise the cluster is truncated.
fn eigenpairs_from_values(
    a: MatRef<'_, f64>,
    eigenvalues: &[f64],
    tolerance: f64,
    strict: bool,
) -> Result<Vec<EigenPair>, NullSpaceError> {
    let mut pairs: Vec<EigenPair> = Vec::with_capacity(eigenvalues.len());
    let mut start = 0;

    while start < eigenvalues.len() {
        let end = eigenvalues[start..]
            .iter()
            .position(|&value| value - eigenvalues[start] > tolerance)
            .map_or(eigenvalues.len(), |offset| start + offset);
        let cluster = &eigenvalues[start..end];
        let mean = cluster.iter().sum::<f64>() / cluster.len() as f64;

        let shifted = shifted_identity(a, mean)?;
        let basis = null_space_basis(shifted.as_ref(), tolerance)?;
        if basis.ncols() == 0 || (strict && basis.ncols() < cluster.len()) {
            return Err(NullSpaceErrorKind::NoNullSpace {
                eigenvalue: mean,
                tolerance,
            }
            .into());
        }
        if basis.ncols() < cluster.len() {
            log::debug!(
                "Eigenvalue {mean} is defective: multiplicity {}, null space dimension {}.",
                cluster.len(),
                basis.ncols()
            );
        }

        for (k, &value) in cluster.iter().enumerate().take(basis.ncols()) {
            let vector = normalize(basis.as_ref().get(.., k..k + 1))?;
            pairs.push(EigenPair { value, vector });
        }
        start = end;
    }

    Ok(pairs)
}

fn ensure_symmetric(a: MatRef<'_, f64>, tolerance: f64) -> Result<(), NullSpaceError> {
    let mut gap = 0.0_f64;
    for j in 0..a.ncols() {
        for i in (j + 1)..a.nrows() {
            gap = gap.max((a[(i, j)] - a[(j, i)]).abs());
        }
    }
    if gap > tolerance {
        return Err(NullSpaceErrorKind::NotSymmetric { gap }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_TOLERANCE;
    use faer::mat;

    const CHECK_TOLERANCE: f64 = 1e-10;

    fn upper_triangular() -> Mat<f64> {
        mat![[3.0, 1.0], [0.0, 2.0]]
    }

    #[test]
    fn test_eigenvector_for_eigenvalue_two() {
        let a = upper_triangular();
        let v = eigenvector_for(a.as_ref(), 2.0, DEFAULT_TOLERANCE).unwrap();
        let av = a.as_ref() * v.as_ref();
        let lambda_v = &v * Scale(2.0);
        assert!((&av - &lambda_v).norm_l2() < CHECK_TOLERANCE);
        assert!((v.norm_l2() - 1.0).abs() < CHECK_TOLERANCE);
        // Direction (1, -1) up to sign.
        assert!((v.as_ref()[(0, 0)] + v.as_ref()[(1, 0)]).abs() < CHECK_TOLERANCE);
    }

    #[test]
    fn test_eigenvector_for_eigenvalue_three() {
        let a = upper_triangular();
        let v = eigenvector_for(a.as_ref(), 3.0, DEFAULT_TOLERANCE).unwrap();
        let av = a.as_ref() * v.as_ref();
        let lambda_v = &v * Scale(3.0);
        assert!((&av - &lambda_v).norm_l2() < CHECK_TOLERANCE);
        assert!(v.as_ref()[(1, 0)].abs() < CHECK_TOLERANCE);
    }

    #[test]
    fn test_non_eigenvalue_reports_no_null_space() {
        let a = upper_triangular();
        let err = eigenvector_for(a.as_ref(), 5.0, DEFAULT_TOLERANCE).unwrap_err();
        assert!(err.is_no_null_space());
    }

    #[test]
    fn test_normalize_rejects_zero_vector() {
        let zero = Mat::<f64>::zeros(3, 1);
        let err = normalize(zero.as_ref()).unwrap_err();
        assert_eq!(err, NullSpaceErrorKind::ZeroVector.into());
    }

    #[test]
    fn test_normalize_scales_to_unit_length() {
        let v: Mat<f64> = mat![[3.0], [4.0]];
        let u = normalize(v.as_ref()).unwrap();
        let expected: Mat<f64> = mat![[0.6], [0.8]];
        assert!((&u - &expected).norm_l2() < CHECK_TOLERANCE);
    }

    #[test]
    fn test_verify_eigenpair_accepts_true_pair() {
        let a = upper_triangular();
        let v: Mat<f64> = mat![[1.0], [0.0]];
        let check = verify_eigenpair(a.as_ref(), 3.0, v.as_ref(), CHECK_TOLERANCE).unwrap();
        assert!(check.passed);
        assert_eq!(check.eigen_residual, 0.0);
    }

    #[test]
    fn test_verify_eigenpair_rejects_wrong_vector() {
        let a = upper_triangular();
        let v: Mat<f64> = mat![[0.0], [1.0]];
        let check = verify_eigenpair(a.as_ref(), 3.0, v.as_ref(), CHECK_TOLERANCE).unwrap();
        assert!(!check.passed);
        assert!(check.eigen_residual > 1.0);
    }

    #[test]
    fn test_symmetric_eigenpairs_of_tridiagonal() {
        let a: Mat<f64> = mat![[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]];
        let pairs = symmetric_eigenpairs(a.as_ref(), 1e-9).unwrap();
        let expected = [
            2.0 - std::f64::consts::SQRT_2,
            2.0,
            2.0 + std::f64::consts::SQRT_2,
        ];

        assert_eq!(pairs.len(), 3);
        for (pair, &lambda) in pairs.iter().zip(expected.iter()) {
            assert!((pair.value - lambda).abs() < CHECK_TOLERANCE);
            let check =
                verify_eigenpair(a.as_ref(), pair.value, pair.vector.as_ref(), 1e-9).unwrap();
            assert!(check.passed, "{check:?}");
        }
    }

    #[test]
    fn test_symmetric_eigenpairs_with_repeated_eigenvalue() {
        let a = Mat::<f64>::identity(2, 2);
        let pairs = symmetric_eigenpairs(a.as_ref(), 1e-9).unwrap();
        assert_eq!(pairs.len(), 2);
        let gram = pairs[0].vector.as_ref().transpose() * pairs[1].vector.as_ref();
        let dot = gram.as_ref()[(0, 0)];
        assert!(dot.abs() < CHECK_TOLERANCE);
    }

    #[test]
    fn test_symmetric_eigenpairs_rejects_asymmetric_input() {
        let a = upper_triangular();
        let err = symmetric_eigenpairs(a.as_ref(), 1e-9).unwrap_err();
        assert_eq!(err, NullSpaceErrorKind::NotSymmetric { gap: 1.0 }.into());
    }

    #[test]
    fn test_verify_eigenpair_scales_determinant_with_spectrum() {
        // det(A - λI) ≈ -1e-4 is far from zero in absolute terms, yet λ = 1e-12 is a
        // close approximation of the eigenvalue 0.
        let a: Mat<f64> = mat![[1e4, 0.0, 0.0], [0.0, 1e4, 0.0], [0.0, 0.0, 0.0]];
        let v: Mat<f64> = mat![[0.0], [0.0], [1.0]];
        let check = verify_eigenpair(a.as_ref(), 1e-12, v.as_ref(), CHECK_TOLERANCE).unwrap();

        assert!(check.determinant.abs() > CHECK_TOLERANCE);
        assert!(check.determinant_residual <= check.shifted_residual);
        assert!(check.passed, "{check:?}");
    }

    #[test]
    fn test_verify_eigenpair_accepts_pairs_of_wide_spectrum() {
        let a: Mat<f64> = mat![[1000.0, 1.0, 0.0], [1.0, 2.0, 0.0], [0.0, 0.0, -500.0]];
        let pairs = symmetric_eigenpairs(a.as_ref(), 1e-9).unwrap();
        assert_eq!(pairs.len(), 3);
        for pair in &pairs {
            let check =
                verify_eigenpair(a.as_ref(), pair.value, pair.vector.as_ref(), 1e-9).unwrap();
            assert!(check.passed, "λ = {}: {check:?}", pair.value);
        }
    }

    #[test]
    fn test_symmetric_eigenpairs_orthonormal_for_double_eigenvalue() {
        // Eigenvalues 1, 1 and 4; the computed copies of 1 differ by rounding only.
        let a: Mat<f64> = mat![[2.0, 1.0, 1.0], [1.0, 2.0, 1.0], [1.0, 1.0, 2.0]];
        let pairs = symmetric_eigenpairs(a.as_ref(), 1e-9).unwrap();
        assert_eq!(pairs.len(), 3);
        for (pair, lambda) in pairs.iter().zip([1.0, 1.0, 4.0]) {
            assert!((pair.value - lambda).abs() < 1e-9);
        }

        let q = Mat::<f64>::from_fn(3, 3, |i, j| pairs[j].vector.as_ref()[(i, 0)]);
        let gram = q.as_ref().transpose() * q.as_ref();
        let identity = Mat::<f64>::identity(3, 3);
        assert!((&gram - &identity).norm_l2() < CHECK_TOLERANCE);

        let lambda = Mat::<f64>::from_fn(3, 3, |i, j| if i == j { pairs[i].value } else { 0.0 });
        let reconstructed = &q * &lambda * q.as_ref().transpose();
        assert!((&reconstructed - &a).norm_l2() < 1e-8);
    }

    #[test]
    fn test_real_eigenpairs_of_upper_triangular() {
        let a = upper_triangular();
        let pairs = real_eigenpairs(a.as_ref(), CHECK_TOLERANCE).unwrap();
        assert_eq!(pairs.len(), 2);
        for (pair, lambda) in pairs.iter().zip([2.0, 3.0]) {
            assert!((pair.value - lambda).abs() < CHECK_TOLERANCE);
            let check =
                verify_eigenpair(a.as_ref(), pair.value, pair.vector.as_ref(), CHECK_TOLERANCE)
                    .unwrap();
            assert!(check.passed, "{check:?}");
        }
    }

    #[test]
    fn test_real_eigenpairs_skips_complex_eigenvalues() {
        // Rotation by a quarter turn: eigenvalues ±i.
        let a: Mat<f64> = mat![[0.0, -1.0], [1.0, 0.0]];
        let pairs = real_eigenpairs(a.as_ref(), CHECK_TOLERANCE).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_real_eigenpairs_rejects_non_square() {
        let a = Mat::<f64>::zeros(2, 3);
        let err = real_eigenpairs(a.as_ref(), CHECK_TOLERANCE).unwrap_err();
        assert_eq!(
            err,
            NullSpaceErrorKind::NotSquare { nrows: 2, ncols: 3 }.into()
        );
    }
}
