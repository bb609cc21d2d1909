// src/models/stats.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the top-scorer table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScorerRow {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub goals: i32,
    /// Distinct matches the player scored in, not appearances.
    pub matches: i32,
    pub average: f64,
}

/// Championship-wide summary figures over the finished, well-formed matches.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneralStats {
    pub total_matches: i32,
    pub finished_matches: i32,
    pub total_goals: i32,
    pub average_goals: f64,
    pub biggest_win: Option<MatchHighlight>,
    pub highest_scoring: Option<MatchHighlight>,
    pub goals_by_round: BTreeMap<i32, i32>,
    pub completion_percentage: i32,
}

/// A single match singled out by the stats pass (biggest win, highest score).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct MatchHighlight {
    pub match_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
}

impl MatchHighlight {
    pub fn margin(&self) -> i32 {
        (self.home_score - self.away_score).abs()
    }

    pub fn total_goals(&self) -> i32 {
        self.home_score + self.away_score
    }
}
