use varzea_league::league::StatsService;

mod common;
use common::builders::{finished_match, in_round, scheduled_match, team};

#[test]
fn test_empty_input_yields_zeroed_stats() {
    let service = StatsService::default();

    let stats = service.calculate(&[]);

    assert_eq!(stats.total_matches, 0);
    assert_eq!(stats.finished_matches, 0);
    assert_eq!(stats.total_goals, 0);
    assert_eq!(stats.average_goals, 0.0);
    assert_eq!(stats.completion_percentage, 0);
    assert!(stats.biggest_win.is_none());
    assert!(stats.highest_scoring.is_none());
    assert!(stats.goals_by_round.is_empty());
}

#[test]
fn test_totals_and_average() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        finished_match(&alpha, &beta, 2, 1),
        finished_match(&beta, &alpha, 1, 1),
        scheduled_match(&alpha, &beta),
    ];

    let stats = service.calculate(&matches);

    assert_eq!(stats.total_matches, 3);
    assert_eq!(stats.finished_matches, 2);
    assert_eq!(stats.total_goals, 5);
    assert_eq!(stats.average_goals, 2.5);
    // round(2 / 3 * 100)
    assert_eq!(stats.completion_percentage, 67);
}

#[test]
fn test_completion_percentage_bounds() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");

    let all_finished = vec![finished_match(&alpha, &beta, 1, 0)];
    assert_eq!(service.calculate(&all_finished).completion_percentage, 100);

    let none_finished = vec![scheduled_match(&alpha, &beta)];
    assert_eq!(service.calculate(&none_finished).completion_percentage, 0);
}

#[test]
fn test_biggest_win_tracks_largest_margin() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        finished_match(&alpha, &beta, 5, 3),
        finished_match(&beta, &alpha, 0, 3),
        finished_match(&alpha, &beta, 1, 1),
    ];

    let stats = service.calculate(&matches);

    let win = stats.biggest_win.expect("a decisive match exists");
    assert_eq!(win.match_id, matches[1].id);
    assert_eq!(win.margin(), 3);
}

#[test]
fn test_biggest_win_tie_keeps_first_in_input_order() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        finished_match(&alpha, &beta, 2, 0),
        finished_match(&beta, &alpha, 3, 1),
    ];

    let stats = service.calculate(&matches);

    assert_eq!(stats.biggest_win.unwrap().match_id, matches[0].id);
}

#[test]
fn test_draws_never_become_biggest_win() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![finished_match(&alpha, &beta, 2, 2)];

    let stats = service.calculate(&matches);

    assert!(stats.biggest_win.is_none());
}

#[test]
fn test_highest_scoring_match() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        finished_match(&alpha, &beta, 1, 0),
        finished_match(&beta, &alpha, 3, 3),
        finished_match(&alpha, &beta, 4, 2),
    ];

    let stats = service.calculate(&matches);

    let game = stats.highest_scoring.expect("finished matches exist");
    assert_eq!(game.match_id, matches[1].id);
    assert_eq!(game.total_goals(), 6);
}

#[test]
fn test_goals_by_round_histogram() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        in_round(finished_match(&alpha, &beta, 2, 1), 1),
        in_round(finished_match(&beta, &alpha, 1, 0), 1),
        in_round(finished_match(&alpha, &beta, 0, 4), 2),
    ];

    let stats = service.calculate(&matches);

    assert_eq!(stats.goals_by_round.get(&1), Some(&4));
    assert_eq!(stats.goals_by_round.get(&2), Some(&4));
    assert_eq!(stats.goals_by_round.len(), 2);
}

#[test]
fn test_malformed_results_are_excluded_everywhere() {
    let service = StatsService::default();
    let alpha = team("Alpha");
    let beta = team("Beta");
    let matches = vec![
        finished_match(&alpha, &beta, -1, 0),
        finished_match(&alpha, &beta, 2, 0),
    ];

    let stats = service.calculate(&matches);

    assert_eq!(stats.total_matches, 2);
    assert_eq!(stats.finished_matches, 1);
    assert_eq!(stats.total_goals, 2);
    assert_eq!(stats.completion_percentage, 50);
    assert_eq!(stats.biggest_win.unwrap().match_id, matches[1].id);
}
