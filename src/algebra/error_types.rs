use thiserror::Error;

/// Error type returned by dense matrix construction, arithmetic and
/// LU-based operations.
#[derive(Error, Debug)]
pub enum DenseMatrixError {
    /// Operands have incompatible shapes, e.g. inner dimensions of a
    /// product that do not agree.
    #[error("cannot multiply {}x{} matrix with {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A square matrix was required
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    /// Largest available pivot fell below the decomposition tolerance
    #[error("matrix is degenerate: no usable pivot in column {column}")]
    SingularMatrix { column: usize },
    /// Rounding precision outside of the supported range
    #[error("precision must be a number between 0 and 15, got {0}")]
    InvalidPrecision(u32),
    /// A vector argument has the wrong length for the matrix it is used with
    #[error("vector of length {found} is incompatible with expected length {expected}")]
    IncompatibleVector { expected: usize, found: usize },
    /// Nested rows of unequal length
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Matrix with no rows or no columns
    #[error("matrix must have at least one row and one column")]
    Empty,
    /// Prediction requested from a model that has not been fitted
    #[error("model has not been trained")]
    Untrained,
    /// Invalid settings passed to a constructor
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    /// Failure writing verbose output
    #[error("output error")]
    Io(#[from] std::io::Error),
}

impl DenseMatrixError {
    pub(crate) fn mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        DenseMatrixError::DimensionMismatch { left, right }
    }
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

#[test]
fn test_error_messages() {
    let e = DenseMatrixError::mismatch((2, 3), (2, 2));
    assert_eq!(e.to_string(), "cannot multiply 2x3 matrix with 2x2 matrix");

    let e = DenseMatrixError::InvalidPrecision(16);
    assert_eq!(
        e.to_string(),
        "precision must be a number between 0 and 15, got 16"
    );

    let e = SettingsError::BadFieldValue("tolerance");
    assert_eq!(e.to_string(), "Bad value for field \"tolerance\"");
}
