// src/export/json.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReportContext;
use crate::models::championship::Championship;
use crate::models::fixture::Match;
use crate::models::standings::StandingsRow;
use crate::models::stats::{GeneralStats, ScorerRow};
use crate::models::team::Team;

/// Bumped whenever the bundle layout changes shape.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

#[derive(Serialize)]
struct ChampionshipExport<'a> {
    format_version: &'static str,
    exported_at: DateTime<Utc>,
    championship: &'a Championship,
    teams: &'a [Team],
    matches: &'a [Match],
    standings: &'a [StandingsRow],
    scorers: &'a [ScorerRow],
    stats: &'a GeneralStats,
}

/// Pretty-printed full bundle: metadata, collections and pre-computed
/// aggregates, stamped with the export time and format version.
pub fn championship_json(ctx: &ReportContext<'_>) -> String {
    let bundle = ChampionshipExport {
        format_version: EXPORT_FORMAT_VERSION,
        exported_at: Utc::now(),
        championship: ctx.championship,
        teams: ctx.teams,
        matches: ctx.matches,
        standings: ctx.standings,
        scorers: ctx.scorers,
        stats: ctx.stats,
    };

    serde_json::to_string_pretty(&bundle).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize championship export: {}", e);
        "{}".to_string()
    })
}
