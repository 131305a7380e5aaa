use chrono::{TimeZone, Utc};
use serde_json::json;
use veikkaus_rs::{parse_transactions, GameType, TransactionType, VeikkausError};

#[test]
fn test_transaction_is_parsed() {
    let data = json!({"transactions": [{
        "type": "WIN",
        "product": "EBET",
        "amount": 500,
        "accountingDate": "1600000000000",
        "externalId": "x",
        "id": 7
    }]});

    let wagers = parse_transactions(&data).unwrap();
    assert_eq!(wagers.len(), 1);

    let wager = &wagers[0];
    assert_eq!(wager.result, TransactionType::Win);
    assert_eq!(wager.product, GameType::Ebet);
    assert_eq!(wager.amount, 500);
    assert_eq!(wager.external_id, "x");
    assert_eq!(wager.id, 7);
    assert_eq!(
        wager.accounting_date,
        Utc.with_ymd_and_hms(2020, 9, 13, 12, 26, 40).unwrap()
    );
}

#[test]
fn test_order_and_signs_are_kept() {
    let data = json!({"transactions": [
        {"type": "BUY", "product": "SPORT", "amount": -200, "accountingDate": 1600000000000i64, "externalId": "a", "id": 1},
        {"type": "LOSS", "product": "EBET", "amount": 0, "accountingDate": "1600000100000", "externalId": "b", "id": "2"},
        {"type": "WIN", "product": "MULTISCORE", "amount": 1250, "accountingDate": "1600000200000", "externalId": "c", "id": 3}
    ]});

    let wagers = parse_transactions(&data).unwrap();
    let results: Vec<TransactionType> = wagers.iter().map(|w| w.result).collect();
    assert_eq!(
        results,
        vec![TransactionType::Buy, TransactionType::Loss, TransactionType::Win]
    );
    assert_eq!(wagers[0].amount, -200);
    assert_eq!(wagers[1].id, 2);
    assert_eq!(wagers[2].product, GameType::Multiscore);
}

#[test]
fn test_empty_list() {
    let wagers = parse_transactions(&json!({"transactions": []})).unwrap();
    assert!(wagers.is_empty());
}

#[test]
fn test_unknown_transaction_type_is_an_error() {
    let data = json!({"transactions": [{
        "type": "REFUND", "product": "EBET", "amount": 1,
        "accountingDate": "0", "externalId": "x", "id": 1
    }]});

    match parse_transactions(&data) {
        Err(VeikkausError::UnknownCode { kind, value }) => {
            assert_eq!(kind, "transaction type");
            assert_eq!(value, "REFUND");
        }
        other => panic!("expected UnknownCode, got {other:?}"),
    }
}

#[test]
fn test_missing_field_is_an_error() {
    let data = json!({"transactions": [{
        "type": "WIN", "product": "EBET", "amount": 1, "externalId": "x", "id": 1
    }]});
    assert!(matches!(parse_transactions(&data), Err(VeikkausError::Parse(_))));
}

#[test]
fn test_out_of_range_accounting_date_is_an_error() {
    let data = json!({"transactions": [{
        "type": "WIN", "product": "EBET", "amount": 500,
        "accountingDate": "99999999999999999", "externalId": "x", "id": 7
    }]});

    match parse_transactions(&data) {
        Err(VeikkausError::Parse(msg)) => assert!(msg.contains("99999999999999999")),
        other => panic!("expected Parse error, got {other:?}"),
    }
}
