// src/models/fixture.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled or placeholder game between two teams.
///
/// Knockout slots whose participants depend on earlier rounds carry
/// `Participants::Awaiting` until the bracket resolves; filling them in is a
/// separate operation on already-created fixtures, not part of generation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub participants: Participants,
    pub round: i32,
    pub phase: Option<String>,
    pub group: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub goals: Vec<GoalEvent>,
}

impl Match {
    pub fn home_team_id(&self) -> Option<Uuid> {
        match self.participants {
            Participants::Decided { home_team_id, .. } => Some(home_team_id),
            Participants::Awaiting => None,
        }
    }

    pub fn away_team_id(&self) -> Option<Uuid> {
        match self.participants {
            Participants::Decided { away_team_id, .. } => Some(away_team_id),
            Participants::Awaiting => None,
        }
    }
}

/// Both slots of a fixture, or neither: a half-filled pairing is not
/// representable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Participants {
    Decided {
        home_team_id: Uuid,
        away_team_id: Uuid,
    },
    Awaiting,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Cancelled,
    WaitingTeams,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Agendada",
            MatchStatus::Live => "Ao Vivo",
            MatchStatus::Finished => "Encerrada",
            MatchStatus::Cancelled => "Cancelada",
            MatchStatus::WaitingTeams => "Aguardando Times",
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "live" => MatchStatus::Live,
            "finished" => MatchStatus::Finished,
            "cancelled" => MatchStatus::Cancelled,
            "waiting_teams" => MatchStatus::WaitingTeams,
            _ => MatchStatus::Scheduled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoalEvent {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub minute: i32,
    pub kind: GoalEventKind,
}

/// Closed set of goal-event kinds. Only `Goal` counts towards the scorer
/// table today; `OwnGoal` is carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GoalEventKind {
    Goal,
    OwnGoal,
}
