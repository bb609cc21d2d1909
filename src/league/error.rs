// src/league/error.rs
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Failures raised by the generator and aggregator entry points.
///
/// These computations are deterministic and pure, so retrying an invalid
/// input yields the same error; callers must fix the input instead.
#[derive(Debug, ThisError)]
pub enum ChampionshipError {
    #[error("knockout format requires a power-of-two number of teams, got {0}")]
    InvalidBracketSize(usize),

    #[error("at least 2 teams are required, got {0}")]
    InsufficientTeams(usize),

    #[error("malformed result for match {match_id}: {detail}")]
    MalformedResult { match_id: Uuid, detail: String },

    #[error("failed to encode cached computation: {0}")]
    Serialization(#[from] serde_json::Error),
}
