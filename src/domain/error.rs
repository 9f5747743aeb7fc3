// Core error type - the only failure the compute layer reports
use thiserror::Error;

/// Required forecast data was missing, too short or non-finite.
///
/// Always recovered locally: a section becomes a placeholder, a field becomes
/// the sentinel. Never propagated as a fatal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUnavailable {
    #[error("no forecast payload for location '{0}'")]
    MissingPayload(String),

    #[error("{series} has {actual} samples, {required} required")]
    TooShort {
        series: String,
        actual: usize,
        required: usize,
    },

    #[error("{series} has no finite sample at index {index}")]
    NonFinite { series: String, index: usize },

    #[error("no series to chart")]
    NoSeries,

    #[error("series lengths differ: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
