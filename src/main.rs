use std::fs;
use std::path::Path;
use std::process;

use varzea_league::config::settings::get_config;
use varzea_league::export::{ReportContext, ReportKind};
use varzea_league::league::{ScorerService, StandingsService, StatsService};
use varzea_league::models::championship::ChampionshipSnapshot;
use varzea_league::telemetry::{get_subscriber, init_subscriber};

fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "varzea-league".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let snapshot_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: varzea-league <snapshot.json>");
            process::exit(1);
        }
    };

    let raw = fs::read_to_string(&snapshot_path)?;
    let snapshot: ChampionshipSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to parse championship snapshot {}: {}", snapshot_path, e);
            process::exit(1);
        }
    };

    tracing::info!(
        "Loaded championship '{}' with {} teams and {} matches",
        snapshot.championship.name,
        snapshot.teams.len(),
        snapshot.matches.len()
    );

    let standings_service = StandingsService::new(config.scoring.clone());
    let standings = match standings_service.calculate(&snapshot.teams, &snapshot.matches) {
        Ok(standings) => standings,
        Err(e) => {
            tracing::error!("Failed to compute standings: {}", e);
            process::exit(1);
        }
    };
    for anomaly in &standings.anomalies {
        tracing::warn!(
            "Match {} excluded from aggregation: {}",
            anomaly.match_id,
            anomaly.detail
        );
    }

    let scorers = match ScorerService::new().calculate(&snapshot.teams, &snapshot.matches) {
        Ok(scorers) => scorers,
        Err(e) => {
            tracing::error!("Failed to compute scorer table: {}", e);
            process::exit(1);
        }
    };
    let stats = StatsService::new().calculate(&snapshot.matches);

    let ctx = ReportContext {
        championship: &snapshot.championship,
        teams: &snapshot.teams,
        matches: &snapshot.matches,
        standings: &standings.rows,
        scorers: &scorers,
        stats: &stats,
    };

    let output_dir = Path::new(&config.export.output_dir);
    fs::create_dir_all(output_dir)?;

    for kind in ReportKind::all() {
        let path = output_dir.join(kind.file_name(&snapshot.championship.name));
        fs::write(&path, kind.render(&ctx))?;
        tracing::info!("Wrote {}", path.display());
    }

    tracing::info!("✅ Export complete");
    Ok(())
}
