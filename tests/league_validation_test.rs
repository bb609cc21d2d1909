use varzea_league::league::error::ChampionshipError;
use varzea_league::league::validation::ChampionshipValidator;
use varzea_league::models::fixture::Participants;
use varzea_league::models::team::TeamRegistrationRequest;

mod common;
use common::builders::{finished_match, team};

#[test]
fn test_validate_roster() {
    let validator = ChampionshipValidator::new();

    assert!(validator.validate_roster(&[team("Alpha"), team("Beta")]).is_ok());
    assert!(matches!(
        validator.validate_roster(&[team("Alpha")]),
        Err(ChampionshipError::InsufficientTeams(1))
    ));
    assert!(matches!(
        validator.validate_roster(&[]),
        Err(ChampionshipError::InsufficientTeams(0))
    ));
}

#[test]
fn test_validate_bracket_size() {
    let validator = ChampionshipValidator::new();

    for count in [2usize, 4, 8, 16, 32] {
        assert!(validator.validate_bracket_size(count).is_ok());
    }
    for count in [3usize, 5, 6, 7, 12, 20] {
        assert!(matches!(
            validator.validate_bracket_size(count),
            Err(ChampionshipError::InvalidBracketSize(n)) if n == count
        ));
    }
    assert!(matches!(
        validator.validate_bracket_size(1),
        Err(ChampionshipError::InsufficientTeams(1))
    ));
}

#[test]
fn test_validate_team_ids() {
    let validator = ChampionshipValidator::new();

    let valid = vec![team("Alpha"), team("Beta"), team("Gamma")];
    assert!(validator.validate_team_ids(&valid).is_ok());

    let mut duplicated = vec![team("Alpha"), team("Beta")];
    duplicated[1].id = duplicated[0].id;
    assert!(validator.validate_team_ids(&duplicated).is_err());

    let mut nil = vec![team("Alpha")];
    nil[0].id = uuid::Uuid::nil();
    assert!(validator.validate_team_ids(&nil).is_err());
}

#[test]
fn test_validate_scores() {
    let validator = ChampionshipValidator::new();

    assert!(validator.validate_scores(2, 1).is_ok());
    assert!(validator.validate_scores(0, 0).is_ok());
    assert!(validator.validate_scores(10, 8).is_ok());

    assert!(validator.validate_scores(-1, 0).is_err());
    assert!(validator.validate_scores(0, -1).is_err());
    assert!(validator.validate_scores(100, 0).is_err());
}

#[test]
fn test_finished_result_requires_decided_participants() {
    let validator = ChampionshipValidator::new();
    let alpha = team("Alpha");
    let beta = team("Beta");

    let mut game = finished_match(&alpha, &beta, 1, 0);
    assert!(validator.finished_result(&game).is_ok());

    game.participants = Participants::Awaiting;
    assert!(validator.finished_result(&game).is_err());
}

#[test]
fn test_validate_results_fails_on_first_malformed_match() {
    let validator = ChampionshipValidator::new();
    let alpha = team("Alpha");
    let beta = team("Beta");

    let good = finished_match(&alpha, &beta, 2, 2);
    let bad = finished_match(&beta, &alpha, 3, -1);
    let bad_id = bad.id;

    assert!(validator.validate_results(&[good.clone()]).is_ok());
    assert!(matches!(
        validator.validate_results(&[good, bad]),
        Err(ChampionshipError::MalformedResult { match_id, .. }) if match_id == bad_id
    ));
}

#[test]
fn test_validate_championship_name() {
    let validator = ChampionshipValidator::new();

    assert!(validator.validate_championship_name("Copa União 2024").is_ok());
    assert!(validator.validate_championship_name("").is_err());
    assert!(validator.validate_championship_name("   ").is_err());
    assert!(validator.validate_championship_name("!!!").is_err());
    assert!(validator
        .validate_championship_name(&"a".repeat(256))
        .is_err());
}

#[test]
fn test_sanitize_string_input() {
    let validator = ChampionshipValidator::new();

    assert_eq!(validator.sanitize_string_input("  test  "), "test");
    assert_eq!(validator.sanitize_string_input("test\0name"), "testname");
    assert_eq!(validator.sanitize_string_input("normal text"), "normal text");
}

#[test]
fn test_team_registration_request_validation() {
    let valid = TeamRegistrationRequest {
        name: "Unidos da Vila".to_string(),
        short_name: Some("UDV".to_string()),
        roster_size: Some(22),
    };
    assert!(valid.validate().is_ok());

    let empty_name = TeamRegistrationRequest {
        name: "  ".to_string(),
        short_name: None,
        roster_size: None,
    };
    assert!(empty_name.validate().is_err());

    let tiny_roster = TeamRegistrationRequest {
        name: "Unidos da Vila".to_string(),
        short_name: None,
        roster_size: Some(3),
    };
    assert!(tiny_roster.validate().is_err());
}
