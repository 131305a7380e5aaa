use serde_json::{json, Value};
use veikkaus_rs::{parse_draws, BetTarget};

fn competitor(id: &str, name: &str, odds: i64) -> Value {
    json!({"id": id, "name": name, "odds": {"odds": odds}, "status": "ACTIVE"})
}

fn draw_entry(id: &str, close_time: i64, competitors: Vec<Value>) -> Value {
    json!({
        "gameName": "EBET",
        "brandName": "838",
        "id": id,
        "name": "SINGLE",
        "status": "OPEN",
        "listIndex": "6752",
        "openTime": 1600398000000i64,
        "closeTime": close_time,
        "drawTime": 1600887600000i64,
        "rows": [{
            "id": "1",
            "status": "OPEN",
            "name": "",
            "competitors": competitors,
            "eventId": "98723990",
            "excludedEvents": ["98723990"],
            "type": "1X2",
            "sportId": "1",
            "externalId": "0"
        }]
    })
}

fn full_match(id: &str, close_time: i64) -> Value {
    draw_entry(
        id,
        close_time,
        vec![
            competitor("1", "Team A", 150),
            competitor("2", "Team B", 250),
            competitor("3", "Tasapeli", 300),
        ],
    )
}

#[test]
fn test_single_draw_is_parsed() {
    let data = json!({"draws": [full_match("2143963", 1600887480000)]});

    let draws = parse_draws(&data);
    assert_eq!(draws.len(), 1);

    let draw = &draws[0];
    assert_eq!(draw.home_team, "Team A");
    assert_eq!(draw.away_team, "Team B");
    assert_eq!(draw.home_odds, 150.0);
    assert_eq!(draw.away_odds, 250.0);
    assert_eq!(draw.draw_odds, 300.0);
    assert_eq!(draw.row_id, "2143963");
    assert_eq!(draw.event_id, "98723990");
    assert_eq!(draw.list_index.as_deref(), Some("6752"));
    assert_eq!(draw.draw_type, "1X2");
    assert!(draw.is_one_x_two());
    assert_eq!(draw.status, "OPEN");
    assert_eq!(draw.sport_id, "1");
    assert_eq!(draw.brand_name, "838");
    assert_eq!(draw.close_time.timestamp_millis(), 1600887480000);
    assert_eq!(draw.league, None);
    assert_eq!(draw.decimal_odds(BetTarget::Home), 1.5);
}

#[test]
fn test_draws_without_tasapeli_are_excluded() {
    let data = json!({"draws": [
        full_match("1", 1000),
        draw_entry("2", 2000, vec![
            competitor("1", "Over 2.5", 180),
            competitor("2", "Under 2.5", 190),
            competitor("3", "Something else", 300),
        ]),
        full_match("3", 3000),
    ]});

    let draws = parse_draws(&data);
    let ids: Vec<&str> = draws.iter().map(|d| d.row_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_draws_missing_a_slot_are_excluded() {
    let data = json!({"draws": [
        draw_entry("no-draw-slot", 1000, vec![
            competitor("1", "Team A", 150),
            competitor("2", "Team B", 250),
        ]),
        draw_entry("no-away", 1000, vec![
            competitor("1", "Team A", 150),
            competitor("3", "Tasapeli", 300),
        ]),
        draw_entry("zero-odds", 1000, vec![
            competitor("1", "Team A", 0),
            competitor("2", "Team B", 250),
            competitor("3", "Tasapeli", 300),
        ]),
        draw_entry("no-name", 1000, vec![
            competitor("1", "", 150),
            competitor("2", "Team B", 250),
            competitor("3", "Tasapeli", 300),
        ]),
        full_match("ok", 1000),
    ]});

    let draws = parse_draws(&data);
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].row_id, "ok");
}

#[test]
fn test_draws_are_sorted_by_close_time() {
    let data = json!({"draws": [
        full_match("late", 1600887480000),
        full_match("early", 1600800000000),
        full_match("middle", 1600850000000),
        full_match("early-too", 1600800000000),
    ]});

    let draws = parse_draws(&data);
    let ids: Vec<&str> = draws.iter().map(|d| d.row_id.as_str()).collect();
    assert_eq!(ids, vec!["early", "early-too", "middle", "late"]);
    assert!(draws.windows(2).all(|w| w[0].close_time <= w[1].close_time));
}

#[test]
fn test_every_returned_draw_is_complete() {
    let data = json!({"draws": [
        full_match("1", 10),
        draw_entry("2", 20, vec![competitor("1", "Solo", 100)]),
        draw_entry("3", 30, vec![]),
        json!({"id": "4", "closeTime": 40}),
        json!("garbage"),
    ]});

    let draws = parse_draws(&data);
    assert_eq!(draws.len(), 1);
    for draw in &draws {
        assert!(!draw.home_team.is_empty());
        assert!(!draw.away_team.is_empty());
        assert!(draw.home_odds > 0.0 && draw.draw_odds > 0.0 && draw.away_odds > 0.0);
    }
}

#[test]
fn test_numeric_identifiers_are_accepted() {
    let mut entry = full_match("unused", 1000);
    entry["id"] = json!(2799985);
    entry["rows"][0]["eventId"] = json!(101152897);
    entry["rows"][0]["sportId"] = json!(1);

    let draws = parse_draws(&json!({"draws": [entry]}));
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].row_id, "2799985");
    assert_eq!(draws[0].event_id, "101152897");
    assert_eq!(draws[0].sport_id, "1");
}

#[test]
fn test_row_status_overrides_draw_status() {
    let mut entry = full_match("1", 1000);
    entry["status"] = json!("OPEN");
    entry["rows"][0]["status"] = json!("SUSPENDED");

    let draws = parse_draws(&json!({"draws": [entry]}));
    assert_eq!(draws[0].status, "SUSPENDED");
}

#[test]
fn test_display_contains_teams_and_odds() {
    let draws = parse_draws(&json!({"draws": [full_match("42", 1600887480000)]}));
    let line = draws[0].to_string();
    assert!(line.contains("Team A"));
    assert!(line.contains("Team B"));
    assert!(line.contains("id: 42"));
    assert!(line.contains("23.09.2020"));
}

#[test]
fn test_odds_sent_as_strings_are_accepted() {
    let mut entry = full_match("1", 1000);
    entry["rows"][0]["competitors"][0]["odds"]["odds"] = json!("120");
    entry["rows"][0]["competitors"][2]["odds"]["odds"] = json!("310");

    let draws = parse_draws(&json!({"draws": [entry]}));
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].home_odds, 120.0);
    assert_eq!(draws[0].away_odds, 250.0);
    assert_eq!(draws[0].draw_odds, 310.0);
}
