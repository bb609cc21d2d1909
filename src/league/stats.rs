// src/league/stats.rs
use std::collections::BTreeMap;

use crate::league::validation::ChampionshipValidator;
use crate::models::fixture::{Match, MatchStatus};
use crate::models::stats::{GeneralStats, MatchHighlight};
use crate::utils::format::round1;

/// Service responsible for championship-wide summary figures.
pub struct StatsService {
    validator: ChampionshipValidator,
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            validator: ChampionshipValidator::new(),
        }
    }

    /// Compute aggregate figures over the finished, well-formed matches.
    ///
    /// Ties for the biggest win and the highest-scoring match keep the first
    /// match encountered, so callers should pass matches in their persisted
    /// order.
    pub fn calculate(&self, matches: &[Match]) -> GeneralStats {
        let total_matches = matches.len() as i32;

        let mut finished_matches = 0;
        let mut total_goals = 0;
        let mut goals_by_round: BTreeMap<i32, i32> = BTreeMap::new();
        let mut biggest_win: Option<MatchHighlight> = None;
        let mut highest_scoring: Option<MatchHighlight> = None;

        for game in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
            let result = match self.validator.finished_result(game) {
                Ok(result) => result,
                Err(detail) => {
                    tracing::warn!("Skipping malformed result for match {}: {}", game.id, detail);
                    continue;
                }
            };

            finished_matches += 1;
            let combined = result.home_score + result.away_score;
            total_goals += combined;
            *goals_by_round.entry(game.round).or_insert(0) += combined;

            let highlight = MatchHighlight {
                match_id: game.id,
                home_team_id: result.home_team_id,
                away_team_id: result.away_team_id,
                home_score: result.home_score,
                away_score: result.away_score,
            };

            let margin = highlight.margin();
            if margin > 0 && biggest_win.map_or(true, |best| margin > best.margin()) {
                biggest_win = Some(highlight);
            }
            if highest_scoring.map_or(true, |best| combined > best.total_goals()) {
                highest_scoring = Some(highlight);
            }
        }

        let average_goals = if finished_matches > 0 {
            round1(f64::from(total_goals) / f64::from(finished_matches))
        } else {
            0.0
        };
        let completion_percentage = if total_matches > 0 {
            (f64::from(finished_matches) / f64::from(total_matches) * 100.0).round() as i32
        } else {
            0
        };

        GeneralStats {
            total_matches,
            finished_matches,
            total_goals,
            average_goals,
            biggest_win,
            highest_scoring,
            goals_by_round,
            completion_percentage,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
