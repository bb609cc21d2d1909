// src/league/fixtures.rs
use uuid::Uuid;

use crate::config::settings::GroupSettings;
use crate::league::error::ChampionshipError;
use crate::league::validation::ChampionshipValidator;
use crate::models::championship::Format;
use crate::models::fixture::{Match, MatchStatus, Participants};
use crate::models::team::Team;

/// Service responsible for turning a team roster into a fixture set.
///
/// Output carries no dates, venues or scores; the scheduling workflow
/// attaches those before persisting. For a fixed roster order and format the
/// output is reproducible bit for bit: fixture ids are UUIDv5 values derived
/// from the championship id and the emission ordinal.
pub struct FixtureService {
    groups: GroupSettings,
    validator: ChampionshipValidator,
}

impl FixtureService {
    pub fn new(groups: GroupSettings) -> Self {
        Self {
            groups,
            validator: ChampionshipValidator::new(),
        }
    }

    /// Generate the complete fixture set for a championship format
    pub fn generate(
        &self,
        championship_id: Uuid,
        format: Format,
        teams: &[Team],
    ) -> Result<Vec<Match>, ChampionshipError> {
        match format {
            Format::League => self.generate_league(championship_id, teams),
            Format::Knockout => self.generate_knockout(championship_id, teams),
            Format::Mixed => self.generate_mixed(championship_id, teams),
        }
    }

    /// Generate a full double round-robin: every pair meets twice with home
    /// advantage reversed, first legs tagged round 1 and return legs round 2.
    pub fn generate_league(
        &self,
        championship_id: Uuid,
        teams: &[Team],
    ) -> Result<Vec<Match>, ChampionshipError> {
        self.validator.validate_roster(teams)?;

        let team_count = teams.len();
        tracing::info!(
            "Generating double round-robin for {} teams ({} fixtures)",
            team_count,
            self.total_league_fixtures(team_count)
        );

        let mut fixtures = Vec::with_capacity(team_count * (team_count - 1));
        let mut seq = 0;

        // First leg
        for i in 0..team_count {
            for j in (i + 1)..team_count {
                fixtures.push(paired_fixture(
                    championship_id,
                    &mut seq,
                    teams[i].id,
                    teams[j].id,
                    1,
                    None,
                    None,
                ));
            }
        }

        // Return fixtures (swap home and away)
        for i in 0..team_count {
            for j in (i + 1)..team_count {
                fixtures.push(paired_fixture(
                    championship_id,
                    &mut seq,
                    teams[j].id,
                    teams[i].id,
                    2,
                    None,
                    None,
                ));
            }
        }

        Ok(fixtures)
    }

    /// Generate a single-elimination bracket: consecutive teams are paired in
    /// roster order for round 1 and every later round is pre-allocated as
    /// placeholder fixtures waiting for the advancing winners.
    pub fn generate_knockout(
        &self,
        championship_id: Uuid,
        teams: &[Team],
    ) -> Result<Vec<Match>, ChampionshipError> {
        self.validator.validate_bracket_size(teams.len())?;

        let team_count = teams.len();
        tracing::info!(
            "Generating knockout bracket for {} teams ({} fixtures)",
            team_count,
            team_count - 1
        );

        let mut fixtures = Vec::with_capacity(team_count - 1);
        let mut seq = 0;

        let first_phase = phase_label(team_count);
        for pair in teams.chunks_exact(2) {
            fixtures.push(paired_fixture(
                championship_id,
                &mut seq,
                pair[0].id,
                pair[1].id,
                1,
                Some(first_phase.clone()),
                None,
            ));
        }

        self.append_placeholder_rounds(championship_id, &mut fixtures, &mut seq, team_count / 2, 2);

        Ok(fixtures)
    }

    /// Generate the mixed format: fixed-size groups playing a single
    /// round-robin, followed by a knockout skeleton for the qualifying slots.
    pub fn generate_mixed(
        &self,
        championship_id: Uuid,
        teams: &[Team],
    ) -> Result<Vec<Match>, ChampionshipError> {
        self.validator.validate_roster(teams)?;

        let group_size = self.groups.group_size.max(2);
        let mut fixtures = Vec::new();
        let mut seq = 0;

        let groups: Vec<&[Team]> = teams.chunks(group_size).collect();
        for (index, group) in groups.iter().enumerate() {
            let label = group_label(index);
            for i in 0..group.len() {
                for j in (i + 1)..group.len() {
                    fixtures.push(paired_fixture(
                        championship_id,
                        &mut seq,
                        group[i].id,
                        group[j].id,
                        1,
                        None,
                        Some(label.clone()),
                    ));
                }
            }
        }

        // Knockout skeleton for the qualifiers, rounded up to a full bracket.
        let qualifiers = groups.len() * self.groups.qualify_per_group.max(1);
        let bracket_size = qualifiers.max(2).next_power_of_two();

        tracing::info!(
            "Generated {} group fixtures across {} groups; appending bracket for {} qualifiers",
            fixtures.len(),
            groups.len(),
            bracket_size
        );

        self.append_placeholder_rounds(championship_id, &mut fixtures, &mut seq, bracket_size, 2);

        Ok(fixtures)
    }

    /// Pre-allocate one placeholder round per halving of the slot count, down
    /// to the final.
    fn append_placeholder_rounds(
        &self,
        championship_id: Uuid,
        fixtures: &mut Vec<Match>,
        seq: &mut i32,
        mut slots: usize,
        first_round: i32,
    ) {
        let mut round = first_round;
        while slots >= 2 {
            let phase = phase_label(slots);
            for _ in 0..slots / 2 {
                fixtures.push(placeholder_fixture(
                    championship_id,
                    seq,
                    round,
                    phase.clone(),
                ));
            }
            slots /= 2;
            round += 1;
        }
    }

    /// Total fixtures of a double round-robin with `team_count` teams
    pub fn total_league_fixtures(&self, team_count: usize) -> usize {
        if team_count < 2 {
            return 0;
        }
        team_count * (team_count - 1)
    }

    /// Total fixtures of a complete knockout bracket with `team_count` teams
    pub fn total_knockout_fixtures(&self, team_count: usize) -> usize {
        if team_count < 2 || !team_count.is_power_of_two() {
            return 0;
        }
        team_count - 1
    }
}

impl Default for FixtureService {
    fn default() -> Self {
        Self::new(GroupSettings::default())
    }
}

/// Knockout stage name for a round entered by `slots` teams.
fn phase_label(slots: usize) -> String {
    match slots {
        32 => "Primeira Fase".to_string(),
        16 => "Oitavas de Final".to_string(),
        8 => "Quartas de Final".to_string(),
        4 => "Semifinal".to_string(),
        2 => "Final".to_string(),
        n => format!("Fase de {} times", n),
    }
}

fn group_label(index: usize) -> String {
    char::from(b'A' + (index % 26) as u8).to_string()
}

fn fixture_id(championship_id: Uuid, seq: &mut i32) -> Uuid {
    let id = Uuid::new_v5(
        &championship_id,
        format!("fixture-{}", *seq).as_bytes(),
    );
    *seq += 1;
    id
}

fn paired_fixture(
    championship_id: Uuid,
    seq: &mut i32,
    home_team_id: Uuid,
    away_team_id: Uuid,
    round: i32,
    phase: Option<String>,
    group: Option<String>,
) -> Match {
    Match {
        id: fixture_id(championship_id, seq),
        participants: Participants::Decided {
            home_team_id,
            away_team_id,
        },
        round,
        phase,
        group,
        scheduled_time: None,
        venue: None,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
        goals: Vec::new(),
    }
}

fn placeholder_fixture(championship_id: Uuid, seq: &mut i32, round: i32, phase: String) -> Match {
    Match {
        id: fixture_id(championship_id, seq),
        participants: Participants::Awaiting,
        round,
        phase: Some(phase),
        group: None,
        scheduled_time: None,
        venue: None,
        status: MatchStatus::WaitingTeams,
        home_score: None,
        away_score: None,
        goals: Vec::new(),
    }
}
