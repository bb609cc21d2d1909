#![allow(dead_code)]
// Shared fixture builders for the integration tests.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use varzea_league::models::championship::{Championship, ChampionshipStatus, Format};
use varzea_league::models::fixture::{GoalEvent, GoalEventKind, Match, MatchStatus, Participants};
use varzea_league::models::team::{PaymentStatus, Team, TeamStatus};

pub fn team(name: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        short_name: name.chars().take(3).collect::<String>().to_uppercase(),
        roster_size: 18,
        status: TeamStatus::Confirmed,
        payment: PaymentStatus::Paid,
    }
}

pub fn championship(name: &str, format: Format) -> Championship {
    Championship {
        id: Uuid::new_v4(),
        name: name.to_string(),
        season: "2024".to_string(),
        format,
        status: ChampionshipStatus::Active,
        start_date: None,
        end_date: None,
    }
}

pub fn finished_match(home: &Team, away: &Team, home_score: i32, away_score: i32) -> Match {
    Match {
        id: Uuid::new_v4(),
        participants: Participants::Decided {
            home_team_id: home.id,
            away_team_id: away.id,
        },
        round: 1,
        phase: None,
        group: None,
        scheduled_time: None,
        venue: None,
        status: MatchStatus::Finished,
        home_score: Some(home_score),
        away_score: Some(away_score),
        goals: Vec::new(),
    }
}

pub fn scheduled_match(home: &Team, away: &Team) -> Match {
    Match {
        id: Uuid::new_v4(),
        participants: Participants::Decided {
            home_team_id: home.id,
            away_team_id: away.id,
        },
        round: 1,
        phase: None,
        group: None,
        scheduled_time: None,
        venue: None,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
        goals: Vec::new(),
    }
}

pub fn in_round(mut game: Match, round: i32) -> Match {
    game.round = round;
    game
}

pub fn on_date(mut game: Match, time: DateTime<Utc>) -> Match {
    game.scheduled_time = Some(time);
    game
}

pub fn match_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 16, 0, 0).unwrap()
}

pub fn goal(game: &mut Match, player_id: Uuid, player_name: &str, team_id: Uuid, minute: i32) {
    game.goals.push(GoalEvent {
        player_id,
        player_name: player_name.to_string(),
        team_id,
        minute,
        kind: GoalEventKind::Goal,
    });
}

pub fn own_goal(game: &mut Match, player_id: Uuid, player_name: &str, team_id: Uuid, minute: i32) {
    game.goals.push(GoalEvent {
        player_id,
        player_name: player_name.to_string(),
        team_id,
        minute,
        kind: GoalEventKind::OwnGoal,
    });
}
