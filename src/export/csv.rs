// src/export/csv.rs
//
// Hand-rolled CSV: header row first, text fields double-quoted (embedded
// quotes doubled), numbers bare. Empty collections still produce the header
// line so the file is always a valid document.

use crate::models::fixture::Match;
use crate::models::standings::StandingsRow;
use crate::models::stats::ScorerRow;
use crate::models::team::Team;
use crate::utils::format::format_score;

fn field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn row(cells: &[String]) -> String {
    let mut line = cells.join(",");
    line.push('\n');
    line
}

pub fn standings_csv(standings: &[StandingsRow]) -> String {
    let mut output = row(&[
        field("Posição"),
        field("Time"),
        field("Pontos"),
        field("Jogos"),
        field("Vitórias"),
        field("Empates"),
        field("Derrotas"),
        field("Gols Pró"),
        field("Gols Contra"),
        field("Saldo"),
        field("Últimos 5"),
    ]);

    for line in standings {
        output.push_str(&row(&[
            line.position.to_string(),
            field(&line.team_name),
            line.points.to_string(),
            line.played.to_string(),
            line.wins.to_string(),
            line.draws.to_string(),
            line.losses.to_string(),
            line.goals_for.to_string(),
            line.goals_against.to_string(),
            line.goal_difference.to_string(),
            field(&line.form.iter().collect::<String>()),
        ]));
    }

    output
}

pub fn matches_csv(matches: &[Match], teams: &[Team]) -> String {
    let names = super::team_name_index(teams);

    let mut output = row(&[
        field("Rodada"),
        field("Fase"),
        field("Grupo"),
        field("Mandante"),
        field("Visitante"),
        field("Placar"),
        field("Data"),
        field("Local"),
        field("Situação"),
    ]);

    for game in matches {
        let score = match (game.home_score, game.away_score) {
            (Some(home), Some(away)) => format_score(home, away),
            _ => String::new(),
        };
        let date = game
            .scheduled_time
            .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_default();

        output.push_str(&row(&[
            game.round.to_string(),
            field(game.phase.as_deref().unwrap_or("")),
            field(game.group.as_deref().unwrap_or("")),
            field(&super::slot_name(&names, game.home_team_id())),
            field(&super::slot_name(&names, game.away_team_id())),
            field(&score),
            field(&date),
            field(game.venue.as_deref().unwrap_or("")),
            field(game.status.label()),
        ]));
    }

    output
}

pub fn scorers_csv(scorers: &[ScorerRow]) -> String {
    let mut output = row(&[
        field("Posição"),
        field("Jogador"),
        field("Time"),
        field("Gols"),
        field("Jogos"),
        field("Média"),
    ]);

    for (index, scorer) in scorers.iter().enumerate() {
        output.push_str(&row(&[
            (index + 1).to_string(),
            field(&scorer.player_name),
            field(&scorer.team_name),
            scorer.goals.to_string(),
            scorer.matches.to_string(),
            format!("{:.1}", scorer.average),
        ]));
    }

    output
}

pub fn teams_csv(teams: &[Team]) -> String {
    let mut output = row(&[
        field("Time"),
        field("Sigla"),
        field("Elenco"),
        field("Situação"),
        field("Pagamento"),
    ]);

    for team in teams {
        output.push_str(&row(&[
            field(&team.name),
            field(&team.short_name),
            team.roster_size.to_string(),
            field(team.status.label()),
            field(team.payment.label()),
        ]));
    }

    output
}
