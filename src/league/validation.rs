// src/league/validation.rs
use std::collections::HashSet;

use uuid::Uuid;

use crate::league::error::ChampionshipError;
use crate::models::fixture::{Match, MatchStatus, Participants};
use crate::models::team::Team;

/// Upper bound on a single-match score; anything above it is treated as a
/// data-entry error rather than a football result.
pub const MAX_REASONABLE_SCORE: i32 = 50;

/// Centralized validation for generator and aggregator inputs
pub struct ChampionshipValidator;

impl ChampionshipValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the team roster handed to any generator/aggregator entry point
    pub fn validate_roster(&self, teams: &[Team]) -> Result<(), ChampionshipError> {
        if teams.len() < 2 {
            return Err(ChampionshipError::InsufficientTeams(teams.len()));
        }
        Ok(())
    }

    /// Validate a knockout bracket size (must be a power of two, minimum 2)
    pub fn validate_bracket_size(&self, team_count: usize) -> Result<(), ChampionshipError> {
        if team_count < 2 {
            return Err(ChampionshipError::InsufficientTeams(team_count));
        }
        if !team_count.is_power_of_two() {
            return Err(ChampionshipError::InvalidBracketSize(team_count));
        }
        Ok(())
    }

    /// Check team ids for duplicates and nil values
    pub fn validate_team_ids(&self, teams: &[Team]) -> Result<(), String> {
        let mut unique_teams = HashSet::new();
        for team in teams {
            if team.id.is_nil() {
                return Err("Nil UUID not allowed for team ID".to_string());
            }
            if !unique_teams.insert(team.id) {
                return Err(format!("Duplicate team ID found: {}", team.id));
            }
        }
        Ok(())
    }

    /// Validate a pair of final scores
    pub fn validate_scores(&self, home_score: i32, away_score: i32) -> Result<(), String> {
        if home_score < 0 {
            return Err(format!("home score cannot be negative: {}", home_score));
        }
        if away_score < 0 {
            return Err(format!("away score cannot be negative: {}", away_score));
        }
        if home_score > MAX_REASONABLE_SCORE {
            return Err(format!(
                "home score too high: {} (max {})",
                home_score, MAX_REASONABLE_SCORE
            ));
        }
        if away_score > MAX_REASONABLE_SCORE {
            return Err(format!(
                "away score too high: {} (max {})",
                away_score, MAX_REASONABLE_SCORE
            ));
        }
        Ok(())
    }

    /// Extract the usable result of a finished match, or say why it is
    /// malformed. Shared by every aggregator so they all agree on which
    /// matches count.
    pub fn finished_result(&self, game: &Match) -> Result<FinishedResult, String> {
        let (home_team_id, away_team_id) = match game.participants {
            Participants::Decided {
                home_team_id,
                away_team_id,
            } => (home_team_id, away_team_id),
            Participants::Awaiting => {
                return Err("finished match has no decided participants".to_string());
            }
        };

        let home_score = game
            .home_score
            .ok_or_else(|| "finished match is missing the home score".to_string())?;
        let away_score = game
            .away_score
            .ok_or_else(|| "finished match is missing the away score".to_string())?;

        self.validate_scores(home_score, away_score)?;

        Ok(FinishedResult {
            home_team_id,
            away_team_id,
            home_score,
            away_score,
        })
    }

    /// Strict pre-check over a match list: fails on the first malformed
    /// finished result instead of skipping it.
    pub fn validate_results(&self, matches: &[Match]) -> Result<(), ChampionshipError> {
        for game in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
            if let Err(detail) = self.finished_result(game) {
                return Err(ChampionshipError::MalformedResult {
                    match_id: game.id,
                    detail,
                });
            }
        }
        Ok(())
    }

    /// Validate championship name
    pub fn validate_championship_name(&self, name: &str) -> Result<(), String> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err("Championship name cannot be empty".to_string());
        }

        if trimmed.len() > 255 {
            return Err("Championship name too long (maximum 255 characters)".to_string());
        }

        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err("Championship name must contain alphanumeric characters".to_string());
        }

        Ok(())
    }

    /// Comprehensive input sanitization
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0')
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for ChampionshipValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished match reduced to the fields the aggregators fold over.
#[derive(Debug, Clone, Copy)]
pub struct FinishedResult {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
}
