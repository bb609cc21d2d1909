// src/export/text.rs
//
// Fixed-width report for terminals and monospace printing: 80-column
// standings table, 50-column scorer table, banner-separated sections.

use super::{recent_finished, slot_name, team_name_index, ReportContext};
use crate::utils::format::format_score;

const WIDTH: usize = 80;
const TOP_SCORERS: usize = 10;
const RECENT_MATCHES: usize = 10;

fn banner(title: &str) -> String {
    let bar = "=".repeat(WIDTH);
    format!("{}\n{:^width$}\n{}\n", bar, title, bar, width = WIDTH)
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn championship_text(ctx: &ReportContext<'_>) -> String {
    let championship = ctx.championship;
    let names = team_name_index(ctx.teams);
    let mut output = String::new();

    output.push_str(&banner(&championship.name.to_uppercase()));
    output.push_str(&format!(
        "Temporada: {}  |  Formato: {}  |  Situação: {}\n\n",
        championship.season,
        championship.format.label(),
        championship.status.label(),
    ));

    output.push_str(&format!("Times inscritos: {}\n", ctx.teams.len()));
    output.push_str(&format!(
        "Partidas: {} ({} encerradas, {}% concluído)\n",
        ctx.stats.total_matches, ctx.stats.finished_matches, ctx.stats.completion_percentage,
    ));
    output.push_str(&format!(
        "Gols: {} (média {:.1} por partida)\n",
        ctx.stats.total_goals, ctx.stats.average_goals,
    ));
    if let Some(win) = &ctx.stats.biggest_win {
        output.push_str(&format!(
            "Maior goleada: {} {} {}\n",
            slot_name(&names, Some(win.home_team_id)),
            format_score(win.home_score, win.away_score),
            slot_name(&names, Some(win.away_team_id)),
        ));
    }
    if let Some(game) = &ctx.stats.highest_scoring {
        output.push_str(&format!(
            "Partida com mais gols: {} {} {}\n",
            slot_name(&names, Some(game.home_team_id)),
            format_score(game.home_score, game.away_score),
            slot_name(&names, Some(game.away_team_id)),
        ));
    }
    output.push('\n');

    if !ctx.standings.is_empty() {
        output.push_str(&banner("CLASSIFICAÇÃO"));
        output.push_str(&format!(
            "{:<4}{:<30}{:>5}{:>5}{:>5}{:>5}{:>5}{:>6}{:>6}{:>6}\n",
            "POS", "TIME", "PTS", "J", "V", "E", "D", "GP", "GC", "SG",
        ));
        output.push_str(&format!("{}\n", "-".repeat(77)));
        for row in ctx.standings {
            output.push_str(&format!(
                "{:<4}{:<30}{:>5}{:>5}{:>5}{:>5}{:>5}{:>6}{:>6}{:>6}\n",
                row.position,
                clip(&row.team_name, 28),
                row.points,
                row.played,
                row.wins,
                row.draws,
                row.losses,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
            ));
        }
        output.push('\n');
    }

    if !ctx.scorers.is_empty() {
        output.push_str(&banner("ARTILHARIA"));
        output.push_str(&format!(
            "{:<4}{:<24}{:<12}{:>4}{:>6}\n",
            "POS", "JOGADOR", "TIME", "GOLS", "MÉDIA",
        ));
        output.push_str(&format!("{}\n", "-".repeat(50)));
        for (index, scorer) in ctx.scorers.iter().take(TOP_SCORERS).enumerate() {
            output.push_str(&format!(
                "{:<4}{:<24}{:<12}{:>4}{:>6.1}\n",
                index + 1,
                clip(&scorer.player_name, 22),
                clip(&scorer.team_name, 10),
                scorer.goals,
                scorer.average,
            ));
        }
        output.push('\n');
    }

    let recent = recent_finished(ctx.matches, RECENT_MATCHES);
    if !recent.is_empty() {
        output.push_str(&banner("ÚLTIMOS RESULTADOS"));
        for game in recent {
            let date = game
                .scheduled_time
                .map(|t| t.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "--".to_string());
            let score = match (game.home_score, game.away_score) {
                (Some(home), Some(away)) => format_score(home, away),
                _ => String::new(),
            };
            output.push_str(&format!(
                "{}  {} {} {}\n",
                date,
                slot_name(&names, game.home_team_id()),
                score,
                slot_name(&names, game.away_team_id()),
            ));
        }
        output.push('\n');
    }

    output
}
