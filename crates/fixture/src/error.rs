use thiserror::Error;

use gildedrose_core::DomainError;

/// Failures while running the text-test fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A rendered day differs from the golden transcript.
    #[error("day {day} diverged from golden output\nexpected:\n{expected}\nactual:\n{actual}")]
    GoldenMismatch {
        day: usize,
        expected: String,
        actual: String,
    },

    /// The golden transcript could not be read, or stock broke a domain invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type FixtureResult<T> = Result<T, FixtureError>;
