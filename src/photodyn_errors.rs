use thiserror::Error;

/// Errors surfaced by the photodyn bridge.
///
/// Validation failures are raised **before** any document is written or the
/// integrator is invoked; decode failures are raised after the run and never
/// produce fabricated results.
#[derive(Error, Debug)]
pub enum PhotodynError {
    #[error("photodynam executable not found: {0}")]
    IntegratorNotFound(String),

    #[error("integrator exited with {status}: {stderr}")]
    IntegratorFailed { status: String, stderr: String },

    #[error("integrator produced non-UTF-8 output")]
    NonUtf8Output,

    #[error("passband luminosity must be set for star '{star}' to run dataset '{dataset}'")]
    MissingLuminosityWeight { star: String, dataset: String },

    #[error("component '{0}' does not match any star of the system")]
    UnknownComponent(String),

    #[error("identifier '{0}' matches more than one star")]
    DuplicateStar(String),

    #[error("identifier '{0}' matches more than one orbit")]
    DuplicateOrbit(String),

    #[error("dataset name '{0}' requested more than once")]
    DuplicateDataset(String),

    #[error("integrator output is empty (no rows)")]
    EmptyOutput,

    #[error("invalid numeric value '{token}' in integrator output (row {row}, column {column})")]
    InvalidOutputValue {
        token: String,
        row: usize,
        column: usize,
    },

    #[error("integrator output row {row} has {got} columns, expected {expected}")]
    ShortOutputRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid date string: {0}")]
    InvalidDate(String),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}
