// src/models/championship.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::fixture::Match;
use crate::models::team::Team;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Championship {
    pub id: Uuid,
    pub name: String,
    pub season: String,
    pub format: Format,
    pub status: ChampionshipStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    League,
    Knockout,
    Mixed,
}

impl Format {
    pub fn label(&self) -> &'static str {
        match self {
            Format::League => "Pontos Corridos",
            Format::Knockout => "Mata-Mata",
            Format::Mixed => "Grupos + Mata-Mata",
        }
    }
}

impl From<String> for Format {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "knockout" => Format::Knockout,
            "mixed" => Format::Mixed,
            _ => Format::League,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipStatus {
    Registration,
    Active,
    Finished,
}

impl ChampionshipStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChampionshipStatus::Registration => "Inscrições Abertas",
            ChampionshipStatus::Active => "Em Andamento",
            ChampionshipStatus::Finished => "Encerrado",
        }
    }
}

/// Full state of a championship as handed over by the persistence layer:
/// metadata plus the current team and match collections.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionshipSnapshot {
    pub championship: Championship,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
}
