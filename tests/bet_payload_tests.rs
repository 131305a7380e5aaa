use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::json;
use veikkaus_rs::{ebet_payload, BetDecision, BetTarget, Draw, VeikkausError};

fn draw(row_id: &str, home: f64, tie: f64, away: f64) -> Draw {
    Draw {
        row_id: row_id.to_string(),
        event_id: "98723990".to_string(),
        list_index: None,
        home_team: "Olympiakos".to_string(),
        away_team: "Omonoia".to_string(),
        home_odds: home,
        draw_odds: tie,
        away_odds: away,
        draw_type: "1X2".to_string(),
        status: "OPEN".to_string(),
        close_time: DateTime::from_timestamp_millis(1600887480000).unwrap(),
        sport_id: "1".to_string(),
        brand_name: "838".to_string(),
        league: None,
    }
}

#[test]
fn test_single_home_bet_payload() {
    let draws = [draw("150410", 132.0, 440.0, 860.0)];
    let bets = [BetDecision::new(BetTarget::Home, 100)];

    let payload = serde_json::to_value(ebet_payload(&draws, &bets).unwrap()).unwrap();
    assert_eq!(
        payload,
        json!([{
            "type": "NORMAL",
            "gameName": "EBET",
            "selections": [{
                "systemBetType": "NORMAL",
                "stake": 100,
                "competitors": {"main": ["1"], "spare": [132]},
                "rowId": "150410"
            }]
        }])
    );
}

#[test]
fn test_targets_map_to_competitor_codes_and_odds() {
    let d = draw("1", 132.0, 440.0, 860.0);
    let cases = [
        (BetTarget::Home, "1", 132),
        (BetTarget::Draw, "2", 440),
        (BetTarget::Away, "3", 860),
    ];

    for (target, code, odds) in cases {
        let payload = ebet_payload(std::slice::from_ref(&d), &[BetDecision::new(target, 50)]).unwrap();
        let selection = &payload[0].selections[0];
        assert_eq!(selection.competitors.main, vec![code.to_string()]);
        assert_eq!(selection.competitors.spare, vec![odds]);
        assert_eq!(selection.stake, 50);
    }
}

#[test]
fn test_one_game_wager_per_pair() {
    let draws = [draw("a", 150.0, 300.0, 250.0), draw("b", 199.6, 310.0, 420.0)];
    let bets = [
        BetDecision::new(BetTarget::Away, 100),
        BetDecision::new(BetTarget::Home, 250),
    ];

    let payload = ebet_payload(&draws, &bets).unwrap();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload[0].selections[0].row_id, "a");
    assert_eq!(payload[0].selections[0].competitors.spare, vec![250]);
    assert_eq!(payload[1].selections[0].row_id, "b");
    assert_eq!(payload[1].selections[0].competitors.spare, vec![200]);
    assert_eq!(payload[1].selections[0].stake, 250);
    assert!(payload.iter().all(|g| g.game_name == "EBET" && g.wager_type == "NORMAL"));
}

#[test]
fn test_mismatched_lengths_are_rejected() {
    let draws = [draw("a", 150.0, 300.0, 250.0), draw("b", 150.0, 300.0, 250.0)];
    let bets = [BetDecision::new(BetTarget::Home, 100)];

    match ebet_payload(&draws, &bets) {
        Err(VeikkausError::MismatchedBets { games, bets }) => {
            assert_eq!(games, 2);
            assert_eq!(bets, 1);
        }
        other => panic!("expected MismatchedBets, got {other:?}"),
    }
}

#[test]
fn test_empty_input_gives_empty_payload() {
    assert!(ebet_payload(&[], &[]).unwrap().is_empty());
}

#[test]
fn test_unrecognized_target_is_rejected() {
    assert!(matches!(
        "1X".parse::<BetTarget>(),
        Err(VeikkausError::InvalidBetTarget(_))
    ));
}
