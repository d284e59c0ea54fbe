//! Common utilities used by the command-line runners and the fixture tests.
//!
//! - **`data_loader`**: Parses headerless CSV files into dense [`faer::Mat<f64>`]
//!   matrices, with typed errors for I/O, parsing and shape failures.

pub mod data_loader;
