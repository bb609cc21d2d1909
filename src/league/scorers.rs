// src/league/scorers.rs
use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::league::error::ChampionshipError;
use crate::league::validation::ChampionshipValidator;
use crate::models::fixture::{GoalEventKind, Match, MatchStatus};
use crate::models::stats::ScorerRow;
use crate::models::team::Team;
use crate::utils::format::round1;

/// Service responsible for the top-scorer table.
pub struct ScorerService {
    validator: ChampionshipValidator,
}

impl ScorerService {
    pub fn new() -> Self {
        Self {
            validator: ChampionshipValidator::new(),
        }
    }

    /// Rank players by goals scored across the finished matches.
    ///
    /// Players are keyed by id so duplicate display names stay separate. The
    /// matches column counts the distinct matches a player scored in, not
    /// appearances; a goalless appearance never reaches the goal events.
    pub fn calculate(
        &self,
        teams: &[Team],
        matches: &[Match],
    ) -> Result<Vec<ScorerRow>, ChampionshipError> {
        self.validator.validate_roster(teams)?;

        let team_names: HashMap<Uuid, &str> =
            teams.iter().map(|t| (t.id, t.name.as_str())).collect();

        let mut totals: HashMap<Uuid, ScorerAccumulator> = HashMap::new();

        for game in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
            if self.validator.finished_result(game).is_err() {
                continue;
            }

            for event in &game.goals {
                if event.kind != GoalEventKind::Goal {
                    continue;
                }
                let entry = totals
                    .entry(event.player_id)
                    .or_insert_with(|| ScorerAccumulator {
                        player_name: event.player_name.clone(),
                        team_id: event.team_id,
                        goals: 0,
                        matches: HashSet::new(),
                    });
                entry.goals += 1;
                entry.matches.insert(game.id);
                entry.team_id = event.team_id;
            }
        }

        let mut rows: Vec<ScorerRow> = totals
            .into_iter()
            .map(|(player_id, acc)| {
                let matches = acc.matches.len() as i32;
                let average = if matches > 0 {
                    round1(f64::from(acc.goals) / f64::from(matches))
                } else {
                    0.0
                };
                ScorerRow {
                    player_id,
                    player_name: acc.player_name,
                    team_id: acc.team_id,
                    team_name: team_names
                        .get(&acc.team_id)
                        .map(|name| name.to_string())
                        .unwrap_or_default(),
                    goals: acc.goals,
                    matches,
                    average,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.goals
                .cmp(&a.goals)
                .then_with(|| a.player_name.cmp(&b.player_name))
        });

        tracing::debug!("Scorer table computed with {} players", rows.len());

        Ok(rows)
    }
}

impl Default for ScorerService {
    fn default() -> Self {
        Self::new()
    }
}

struct ScorerAccumulator {
    player_name: String,
    team_id: Uuid,
    goals: i32,
    matches: HashSet<Uuid>,
}
