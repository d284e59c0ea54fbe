//! Demonstration runner for determinants and eigenvector recovery.
//!
//! This executable walks through a fixed sequence of small linear-algebra facts and
//! records each one as a row of a CSV report:
//!
//! - lengths, areas and volumes as determinants of diagonal-like matrices;
//! - invariance of the determinant under transposition, on a seeded random matrix;
//! - recovery of the eigenvectors of `[[3, 1], [0, 2]]` from the null space of `A - λI`,
//!   with the eigenvalues computed rather than given, checked against `A v = λ v`.

use anyhow::{Result, anyhow, ensure};
use clap::Parser;
use faer::{Mat, mat};
use nullspace_project::{
    determinant, real_eigenpairs, transpose_invariance_gap, verify_eigenpair,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::path::PathBuf;

/// Command-line arguments for the demonstration runner.
#[derive(Parser, Debug)]
#[clap(
    name = "demo",
    about = "Reproduces determinant and eigenvector demonstrations and writes a CSV report."
)]
struct DemoArgs {
    /// Dimension of the random matrix used for the transpose-invariance check.
    #[clap(long, default_value_t = 4)]
    n: usize,

    /// Seed of the random number generator.
    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// Path to the output CSV file where results will be written.
    #[clap(long, value_name = "PATH")]
    output: PathBuf,
}

/// Represents a single row of the demonstration report.
#[derive(Debug, Serialize)]
struct DemoResult {
    /// Short name of the demonstrated fact.
    case: String,
    /// The computed quantity.
    value: f64,
    /// The residual of the identity being demonstrated (zero up to rounding).
    residual: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;
    let args = DemoArgs::parse();
    ensure!(args.n > 0, "The random matrix dimension must be positive.");

    let mut results = Vec::new();

    // Euclidean length of the vector (1, 2): the square root of its inner product with
    // itself.
    let line: Mat<f64> = mat![[1.0], [2.0]];
    let length = line.norm_l2();
    log::info!("Length of (1, 2): {length}");
    results.push(DemoResult {
        case: "length".to_string(),
        value: length,
        residual: (length - 5.0_f64.sqrt()).abs(),
    });

    // Area of the parallelogram spanned by (1, 0) and (1, 1).
    let rect: Mat<f64> = mat![[1.0, 0.0], [1.0, 1.0]];
    let area = determinant(rect.as_ref())?;
    log::info!("Area of the parallelogram: {area}");
    results.push(DemoResult {
        case: "area".to_string(),
        value: area,
        residual: (area - 1.0).abs(),
    });

    // Volume of a box stretched by 2 along z.
    let boxed: Mat<f64> = mat![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]];
    let volume = determinant(boxed.as_ref())?;
    log::info!("Volume of the box: {volume}");
    results.push(DemoResult {
        case: "volume".to_string(),
        value: volume,
        residual: (volume - 2.0).abs(),
    });

    // Collinear columns collapse the plane onto a line.
    let collapsed: Mat<f64> = mat![[4.0, 2.0], [2.0, 1.0]];
    let collapsed_det = determinant(collapsed.as_ref())?;
    log::info!("Determinant of a collapsing map: {collapsed_det}");
    results.push(DemoResult {
        case: "collapse".to_string(),
        value: collapsed_det,
        residual: collapsed_det.abs(),
    });

    let mut rng = StdRng::seed_from_u64(args.seed);
    let random = Mat::<f64>::from_fn(args.n, args.n, |_, _| rng.random());
    let det_random = determinant(random.as_ref())?;
    let gap = transpose_invariance_gap(random.as_ref())?;
    log::info!(
        "det(A) = {det_random} for a random {}x{} matrix; |det(A) - det(A^T)| = {gap:e}",
        args.n,
        args.n
    );
    results.push(DemoResult {
        case: "transpose".to_string(),
        value: det_random,
        residual: gap,
    });

    let a: Mat<f64> = mat![[3.0, 1.0], [0.0, 2.0]];
    let pairs = real_eigenpairs(a.as_ref(), 1e-10)?;
    ensure!(
        pairs.len() == a.nrows(),
        "Expected {} real eigenpairs, found {}",
        a.nrows(),
        pairs.len()
    );
    for pair in &pairs {
        let lambda = pair.value;
        let v = pair.vector.as_ref();
        let check = verify_eigenpair(a.as_ref(), lambda, v, 1e-10)?;
        log::info!(
            "Eigenvalue {lambda}: eigenvector ({}, {}), passed = {}",
            v[(0, 0)],
            v[(1, 0)],
            check.passed
        );
        ensure!(
            check.passed,
            "Eigenpair check failed for λ = {lambda}: {check:?}"
        );
        results.push(DemoResult {
            case: format!("eigenvector_{}", lambda.round()),
            value: lambda,
            residual: check.eigen_residual,
        });
    }

    let mut writer = csv::Writer::from_path(&args.output)?;
    for result in &results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    log::info!(
        "Demonstrations complete. Results saved to {:?}.",
        &args.output
    );
    Ok(())
}
