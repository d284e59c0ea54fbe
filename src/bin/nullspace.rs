//! Eigenvector recovery runner.
//!
//! Loads a square matrix from a CSV file, recovers the eigenvector for a known eigenvalue
//! from the null space of `A - λI`, verifies the eigenpair identities and optionally
//! writes the result as a one-row CSV report.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use nullspace_project::{
    DEFAULT_TOLERANCE, eigenvector_for, utils::data_loader::load_matrix, verify_eigenpair,
};
use serde::Serialize;
use std::path::PathBuf;

/// Command-line arguments for the eigenvector recovery runner.
#[derive(Parser, Debug)]
#[clap(
    name = "nullspace",
    about = "Recovers an eigenvector for a known eigenvalue via the null space of A - λI."
)]
struct NullSpaceArgs {
    /// Path to a headerless CSV file holding the square matrix A.
    #[clap(long, value_name = "PATH")]
    matrix: PathBuf,

    /// The known eigenvalue λ.
    #[clap(long, allow_negative_numbers = true)]
    eigenvalue: f64,

    /// Singular values at or below this threshold are treated as zero.
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Tolerance used when verifying A v = λ v.
    #[clap(long, default_value_t = 1e-10)]
    check_tolerance: f64,

    /// Optional path to the output CSV file.
    #[clap(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Represents the single row of the output CSV file.
#[derive(Debug, Serialize)]
struct RecoveryResult {
    eigenvalue: f64,
    /// Entries of the unit eigenvector, separated by spaces.
    eigenvector: String,
    eigen_residual: f64,
    shifted_residual: f64,
    determinant: f64,
    determinant_residual: f64,
    passed: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;
    let args = NullSpaceArgs::parse();

    let a = load_matrix(&args.matrix)
        .with_context(|| format!("Failed to load matrix from {:?}", &args.matrix))?;
    log::info!(
        "Loaded {}x{} matrix from {:?}.",
        a.nrows(),
        a.ncols(),
        &args.matrix
    );

    let v = eigenvector_for(a.as_ref(), args.eigenvalue, args.tolerance).with_context(|| {
        format!(
            "Failed to recover an eigenvector for eigenvalue {}",
            args.eigenvalue
        )
    })?;
    let entries: Vec<f64> = (0..v.nrows()).map(|i| v.as_ref()[(i, 0)]).collect();
    log::info!("Eigenvector for λ = {}: {:?}", args.eigenvalue, entries);

    let check = verify_eigenpair(
        a.as_ref(),
        args.eigenvalue,
        v.as_ref(),
        args.check_tolerance,
    )?;
    log::info!(
        "Residuals: |Av - λv| = {:e}, |(A - λI)v| = {:e}, det(A - λI) = {:e} (relative {:e}), passed = {}",
        check.eigen_residual,
        check.shifted_residual,
        check.determinant,
        check.determinant_residual,
        check.passed
    );

    if let Some(output) = &args.output {
        let mut writer = csv::Writer::from_path(output)
            .with_context(|| format!("Failed to create CSV writer for {:?}", output))?;
        writer.serialize(RecoveryResult {
            eigenvalue: args.eigenvalue,
            eigenvector: entries
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            eigen_residual: check.eigen_residual,
            shifted_residual: check.shifted_residual,
            determinant: check.determinant,
            determinant_residual: check.determinant_residual,
            passed: check.passed,
        })?;
        writer.flush()?;
        log::info!("Results saved to {:?}.", output);
    }

    Ok(())
}
