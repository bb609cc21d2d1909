// src/export/html.rs
//
// Self-contained printable document: summary cards, standings, top scorers
// and the latest results. Sections with no data are left out entirely.

use chrono::Utc;

use super::{recent_finished, slot_name, team_name_index, ReportContext};
use crate::utils::format::format_score;

const TOP_SCORERS: usize = 10;
const RECENT_MATCHES: usize = 10;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn championship_html(ctx: &ReportContext<'_>) -> String {
    let championship = ctx.championship;
    let names = team_name_index(ctx.teams);
    let mut body = String::new();

    body.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p class=\"meta\">{} &middot; {} &middot; {}</p>\n</header>\n",
        escape(&championship.name),
        escape(&championship.season),
        championship.format.label(),
        championship.status.label(),
    ));

    // Summary cards
    body.push_str("<section class=\"cards\">\n");
    for (label, value) in [
        ("Times", ctx.teams.len().to_string()),
        (
            "Partidas",
            format!(
                "{} / {}",
                ctx.stats.finished_matches, ctx.stats.total_matches
            ),
        ),
        ("Gols", ctx.stats.total_goals.to_string()),
        ("Média de gols", format!("{:.1}", ctx.stats.average_goals)),
        (
            "Conclusão",
            format!("{}%", ctx.stats.completion_percentage),
        ),
    ] {
        body.push_str(&format!(
            "<div class=\"card\"><span class=\"value\">{}</span><span class=\"label\">{}</span></div>\n",
            value, label
        ));
    }
    body.push_str("</section>\n");

    if !ctx.standings.is_empty() {
        body.push_str("<section>\n<h2>Classificação</h2>\n<table>\n<thead><tr>");
        for header in [
            "#", "Time", "P", "J", "V", "E", "D", "GP", "GC", "SG", "Últimos 5",
        ] {
            body.push_str(&format!("<th>{}</th>", header));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for row in ctx.standings {
            body.push_str(&format!(
                "<tr><td>{}</td><td class=\"team\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.position,
                escape(&row.team_name),
                row.points,
                row.played,
                row.wins,
                row.draws,
                row.losses,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
                row.form.iter().collect::<String>(),
            ));
        }
        body.push_str("</tbody>\n</table>\n</section>\n");
    }

    if !ctx.scorers.is_empty() {
        body.push_str("<section>\n<h2>Artilharia</h2>\n<table>\n<thead><tr>");
        for header in ["#", "Jogador", "Time", "Gols", "Jogos", "Média"] {
            body.push_str(&format!("<th>{}</th>", header));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for (index, scorer) in ctx.scorers.iter().take(TOP_SCORERS).enumerate() {
            body.push_str(&format!(
                "<tr><td>{}</td><td class=\"team\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>\n",
                index + 1,
                escape(&scorer.player_name),
                escape(&scorer.team_name),
                scorer.goals,
                scorer.matches,
                scorer.average,
            ));
        }
        body.push_str("</tbody>\n</table>\n</section>\n");
    }

    let recent = recent_finished(ctx.matches, RECENT_MATCHES);
    if !recent.is_empty() {
        body.push_str("<section>\n<h2>Últimos Resultados</h2>\n<table>\n<thead><tr><th>Data</th><th>Partida</th><th>Placar</th></tr></thead>\n<tbody>\n");
        for game in recent {
            let date = game
                .scheduled_time
                .map(|t| t.format("%d/%m/%Y").to_string())
                .unwrap_or_default();
            let score = match (game.home_score, game.away_score) {
                (Some(home), Some(away)) => format_score(home, away),
                _ => String::new(),
            };
            body.push_str(&format!(
                "<tr><td>{}</td><td class=\"team\">{} x {}</td><td>{}</td></tr>\n",
                date,
                escape(&slot_name(&names, game.home_team_id())),
                escape(&slot_name(&names, game.away_team_id())),
                score,
            ));
        }
        body.push_str("</tbody>\n</table>\n</section>\n");
    }

    body.push_str(&format!(
        "<footer>Gerado em {}</footer>\n",
        Utc::now().format("%d/%m/%Y %H:%M")
    ));

    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} - Relatório</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(&championship.name),
        STYLE,
        body
    )
}

const STYLE: &str = "\
body{font-family:Arial,Helvetica,sans-serif;color:#222;margin:24px;max-width:900px}\
header h1{margin-bottom:4px}\
.meta{color:#666;margin-top:0}\
.cards{display:flex;gap:12px;flex-wrap:wrap;margin:16px 0}\
.card{border:1px solid #ddd;border-radius:6px;padding:12px 20px;text-align:center}\
.card .value{display:block;font-size:1.6em;font-weight:bold}\
.card .label{color:#666;font-size:0.85em}\
table{border-collapse:collapse;width:100%;margin:8px 0 24px}\
th,td{border:1px solid #ddd;padding:6px 8px;text-align:center}\
td.team{text-align:left}\
th{background:#f4f4f4}\
footer{color:#999;font-size:0.8em;margin-top:32px}\
@media print{body{margin:0}}";
