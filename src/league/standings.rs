// src/league/standings.rs
use std::collections::HashMap;

use uuid::Uuid;

use crate::config::settings::ScoringSettings;
use crate::league::error::ChampionshipError;
use crate::league::validation::ChampionshipValidator;
use crate::models::fixture::{Match, MatchStatus};
use crate::models::standings::{HeadToHead, ResultAnomaly, Standings, StandingsRow};
use crate::models::team::Team;

/// How many results the form window keeps per team.
const FORM_WINDOW: usize = 5;

/// Service responsible for folding match results into the points table.
///
/// A pure function of its inputs: calling it twice with the same snapshot
/// yields byte-identical output, so results may be cached externally.
pub struct StandingsService {
    scoring: ScoringSettings,
    validator: ChampionshipValidator,
}

impl StandingsService {
    pub fn new(scoring: ScoringSettings) -> Self {
        Self {
            scoring,
            validator: ChampionshipValidator::new(),
        }
    }

    /// Compute the ranked table over the finished matches.
    ///
    /// Malformed finished results (missing or negative scores, undecided
    /// participants) are skipped and reported in `Standings::anomalies`
    /// instead of being coerced to zero.
    pub fn calculate(
        &self,
        teams: &[Team],
        matches: &[Match],
    ) -> Result<Standings, ChampionshipError> {
        self.validator.validate_roster(teams)?;

        let mut rows: HashMap<Uuid, StandingsRow> = teams
            .iter()
            .map(|team| (team.id, StandingsRow::new(team)))
            .collect();
        let mut anomalies = Vec::new();

        for game in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
            let result = match self.validator.finished_result(game) {
                Ok(result) => result,
                Err(detail) => {
                    tracing::warn!("Skipping malformed result for match {}: {}", game.id, detail);
                    anomalies.push(ResultAnomaly {
                        match_id: game.id,
                        detail,
                    });
                    continue;
                }
            };

            if !rows.contains_key(&result.home_team_id) || !rows.contains_key(&result.away_team_id)
            {
                let detail = "match references a team outside the roster".to_string();
                tracing::warn!("Skipping match {}: {}", game.id, detail);
                anomalies.push(ResultAnomaly {
                    match_id: game.id,
                    detail,
                });
                continue;
            }

            let home_points = self.scoring.points_for(result.home_score, result.away_score);
            let away_points = self.scoring.points_for(result.away_score, result.home_score);

            if let Some(row) = rows.get_mut(&result.home_team_id) {
                apply_result(row, result.home_score, result.away_score, home_points, true);
            }
            if let Some(row) = rows.get_mut(&result.away_team_id) {
                apply_result(row, result.away_score, result.home_score, away_points, false);
            }
        }

        // Post-pass: derived fields and the form window.
        let mut table: Vec<StandingsRow> = teams
            .iter()
            .filter_map(|team| rows.remove(&team.id))
            .collect();
        for row in &mut table {
            row.goal_difference = row.goals_for - row.goals_against;
            if row.form.len() > FORM_WINDOW {
                row.form = row.form.split_off(row.form.len() - FORM_WINDOW);
            }
        }

        table.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.wins.cmp(&a.wins))
                .then_with(|| b.goal_difference.cmp(&a.goal_difference))
                .then_with(|| b.goals_for.cmp(&a.goals_for))
                .then_with(|| a.team_name.cmp(&b.team_name))
        });
        for (index, row) in table.iter_mut().enumerate() {
            row.position = (index + 1) as i32;
        }

        tracing::debug!(
            "Standings computed for {} teams ({} anomalies)",
            table.len(),
            anomalies.len()
        );

        Ok(Standings {
            rows: table,
            anomalies,
        })
    }

    /// Pairwise record between two teams over the finished matches. Kept out
    /// of the default table ordering; callers query it on demand.
    pub fn head_to_head(&self, team_a_id: Uuid, team_b_id: Uuid, matches: &[Match]) -> HeadToHead {
        let mut record = HeadToHead::new(team_a_id, team_b_id);

        for game in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
            let result = match self.validator.finished_result(game) {
                Ok(result) => result,
                Err(_) => continue,
            };

            let (a_goals, b_goals) = if result.home_team_id == team_a_id
                && result.away_team_id == team_b_id
            {
                (result.home_score, result.away_score)
            } else if result.home_team_id == team_b_id && result.away_team_id == team_a_id {
                (result.away_score, result.home_score)
            } else {
                continue;
            };

            record.played += 1;
            record.team_a_goals += a_goals;
            record.team_b_goals += b_goals;
            if a_goals > b_goals {
                record.team_a_wins += 1;
            } else if b_goals > a_goals {
                record.team_b_wins += 1;
            } else {
                record.draws += 1;
            }
        }

        record
    }
}

impl Default for StandingsService {
    fn default() -> Self {
        Self::new(ScoringSettings::default())
    }
}

fn apply_result(row: &mut StandingsRow, scored: i32, conceded: i32, points: i32, at_home: bool) {
    row.played += 1;
    row.goals_for += scored;
    row.goals_against += conceded;
    row.points += points;

    let letter = if scored > conceded {
        row.wins += 1;
        'V'
    } else if scored < conceded {
        row.losses += 1;
        'D'
    } else {
        row.draws += 1;
        'E'
    };
    row.form.push(letter);

    let split = if at_home { &mut row.home } else { &mut row.away };
    split.played += 1;
    split.goals_for += scored;
    split.goals_against += conceded;
    if scored > conceded {
        split.wins += 1;
    } else if scored < conceded {
        split.losses += 1;
    } else {
        split.draws += 1;
    }

    if conceded == 0 {
        row.clean_sheets += 1;
    }
    if scored == 0 {
        row.scoreless_matches += 1;
    }
}
