// src/models/standings.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::Team;

/// One ranked line of the points table. Recomputed from the current match
/// snapshot on every call, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StandingsRow {
    pub position: i32,
    pub team_id: Uuid,
    pub team_name: String,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    /// Last 5 results, most recent last: V, E, D
    pub form: Vec<char>,
    pub home: SplitRecord,
    pub away: SplitRecord,
    pub clean_sheets: i32,
    pub scoreless_matches: i32,
}

impl StandingsRow {
    pub fn new(team: &Team) -> Self {
        StandingsRow {
            position: 0,
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
            home: SplitRecord::default(),
            away: SplitRecord::default(),
            clean_sheets: 0,
            scoreless_matches: 0,
        }
    }
}

/// Home-only or away-only sub-record of a team.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SplitRecord {
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

/// Result of one standings aggregation pass: the ranked rows plus every
/// finished match that had to be skipped as malformed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
    pub anomalies: Vec<ResultAnomaly>,
}

/// A finished match the aggregators refused to count, and why.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResultAnomaly {
    pub match_id: Uuid,
    pub detail: String,
}

/// On-demand pairwise record between two teams. Not part of the default
/// table ordering.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HeadToHead {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub played: i32,
    pub team_a_wins: i32,
    pub team_b_wins: i32,
    pub draws: i32,
    pub team_a_goals: i32,
    pub team_b_goals: i32,
}

impl HeadToHead {
    pub fn new(team_a_id: Uuid, team_b_id: Uuid) -> Self {
        HeadToHead {
            team_a_id,
            team_b_id,
            played: 0,
            team_a_wins: 0,
            team_b_wins: 0,
            draws: 0,
            team_a_goals: 0,
            team_b_goals: 0,
        }
    }
}
