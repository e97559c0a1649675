use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tickstats workspace.
///
/// Parsing failures carry the 1-based line of the offending input row. All
/// variants are fatal for the analysis of the file they came from; a day with a
/// single trade is not an error and never produces one.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickStatsError {
    /// The trade date or time column did not match the fixed input format.
    #[error("malformed timestamp at line {line}: {value:?}")]
    MalformedTimestamp {
        /// 1-based line number in the input file.
        line: u64,
        /// The offending `date time` text.
        value: String,
    },

    /// A row could not be decoded (field count, price or quantity).
    #[error("malformed record at line {line}: {msg}")]
    MalformedRecord {
        /// 1-based line number in the input file.
        line: u64,
        /// Human-readable description of the problem.
        msg: String,
    },

    /// The input contained no trade records; every statistic is undefined.
    #[error("empty input: no trade records")]
    EmptyInput,

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the data handed to a computation (ordering, zero prices, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The input could not be opened or read.
    #[error("io error: {0}")]
    Io(String),
}

impl TickStatsError {
    /// Helper: build a `MalformedTimestamp` error.
    pub fn malformed_timestamp(line: u64, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            line,
            value: value.into(),
        }
    }

    /// Helper: build a `MalformedRecord` error.
    pub fn malformed_record(line: u64, msg: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            msg: msg.into(),
        }
    }

    /// Line number of the offending input row, if the error came from parsing.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedTimestamp { line, .. } | Self::MalformedRecord { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for TickStatsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
