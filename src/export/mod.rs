pub mod csv;
pub mod html;
pub mod json;
pub mod text;

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::championship::Championship;
use crate::models::fixture::{Match, MatchStatus};
use crate::models::standings::StandingsRow;
use crate::models::stats::{GeneralStats, ScorerRow};
use crate::models::team::Team;
use crate::utils::slug::slugify;

/// Everything a report needs, pre-computed. The serializers only render;
/// they never aggregate and never fail on empty collections.
pub struct ReportContext<'a> {
    pub championship: &'a Championship,
    pub teams: &'a [Team],
    pub matches: &'a [Match],
    pub standings: &'a [StandingsRow],
    pub scorers: &'a [ScorerRow],
    pub stats: &'a GeneralStats,
}

/// Every exportable artifact, with its deterministic filename pattern
/// `<report-type>-<slugified-championship-name>.<ext>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportKind {
    StandingsCsv,
    MatchesCsv,
    ScorersCsv,
    TeamsCsv,
    Json,
    Html,
    Text,
}

impl ReportKind {
    pub fn all() -> [ReportKind; 7] {
        [
            ReportKind::StandingsCsv,
            ReportKind::MatchesCsv,
            ReportKind::ScorersCsv,
            ReportKind::TeamsCsv,
            ReportKind::Json,
            ReportKind::Html,
            ReportKind::Text,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::StandingsCsv => "classificacao",
            ReportKind::MatchesCsv => "partidas",
            ReportKind::ScorersCsv => "artilharia",
            ReportKind::TeamsCsv => "times",
            ReportKind::Json => "dados",
            ReportKind::Html => "relatorio",
            ReportKind::Text => "boletim",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportKind::StandingsCsv
            | ReportKind::MatchesCsv
            | ReportKind::ScorersCsv
            | ReportKind::TeamsCsv => "csv",
            ReportKind::Json => "json",
            ReportKind::Html => "html",
            ReportKind::Text => "txt",
        }
    }

    pub fn file_name(&self, championship_name: &str) -> String {
        format!(
            "{}-{}.{}",
            self.slug(),
            slugify(championship_name),
            self.extension()
        )
    }

    /// Render this report from the pre-computed context.
    pub fn render(&self, ctx: &ReportContext<'_>) -> String {
        match self {
            ReportKind::StandingsCsv => csv::standings_csv(ctx.standings),
            ReportKind::MatchesCsv => csv::matches_csv(ctx.matches, ctx.teams),
            ReportKind::ScorersCsv => csv::scorers_csv(ctx.scorers),
            ReportKind::TeamsCsv => csv::teams_csv(ctx.teams),
            ReportKind::Json => json::championship_json(ctx),
            ReportKind::Html => html::championship_html(ctx),
            ReportKind::Text => text::championship_text(ctx),
        }
    }
}

pub(crate) fn team_name_index(teams: &[Team]) -> HashMap<Uuid, String> {
    teams.iter().map(|t| (t.id, t.name.clone())).collect()
}

/// Display name for a fixture slot; unresolved bracket slots read "A definir".
pub(crate) fn slot_name(index: &HashMap<Uuid, String>, team_id: Option<Uuid>) -> String {
    team_id
        .and_then(|id| index.get(&id).cloned())
        .unwrap_or_else(|| "A definir".to_string())
}

/// The `limit` most recent finished matches, newest first; undated matches
/// sort last.
pub(crate) fn recent_finished(matches: &[Match], limit: usize) -> Vec<&Match> {
    let mut finished: Vec<&Match> = matches
        .iter()
        .filter(|m| {
            m.status == MatchStatus::Finished
                && m.home_score.is_some()
                && m.away_score.is_some()
        })
        .collect();
    finished.sort_by(|a, b| b.scheduled_time.cmp(&a.scheduled_time));
    finished.truncate(limit);
    finished
}
