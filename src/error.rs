//! Crate error type.
//!
//! The planning algorithms themselves are total: they clamp or substitute
//! instead of failing. Errors surface only from the strict parsers
//! (times, dates, config files) and from rejected campaign transitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::CampaignStatus;

/// Errors produced by strict parsing and campaign state changes.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A time string is not `HH:MM` on the 30-minute grid.
    #[error("invalid time `{0}`: expected HH:MM on a 30-minute grid")]
    InvalidTime(String),

    /// A selection key is not `day-slot`.
    #[error("invalid slot key `{0}`: expected day-slot")]
    InvalidSlotKey(String),

    /// Coverage rows are not 7 days of 48 slots.
    #[error("invalid coverage matrix {days}×{slots}: expected 7×48")]
    InvalidMatrixShape { days: usize, slots: usize },

    /// A date string is not an ISO `YYYY-MM-DD` calendar date.
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The campaign state machine does not allow this move.
    #[error("invalid campaign transition: {from} -> {to}")]
    InvalidTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    #[error("failed reading config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed parsing config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, PlannerError>;
