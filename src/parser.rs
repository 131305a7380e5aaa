//! Turns raw API responses into the typed records of [`crate::model`].

use crate::dto::{DrawEntry, DrawRow, TransactionEntry, TransactionsResponse};
use crate::error::{Result, VeikkausError};
use crate::model::{Draw, Wager};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Name of the draw competitor in a 1X2 row.
pub const DRAW_COMPETITOR_NAME: &str = "Tasapeli";

const HOME_ID: &str = "1";
const AWAY_ID: &str = "2";
const DRAW_ID: &str = "3";

/// Unix milliseconds to a draw close time; out of range values map to the epoch.
pub fn parse_timestamp_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[derive(Default)]
struct Slot {
    name: String,
    odds: f64,
}

impl Slot {
    fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.odds > 0.0
    }
}

/// Parse the `draws` listing of the sport-games endpoint.
///
/// Entries that are not complete 1X2 draws are dropped and logged, never
/// reported as errors. The result is sorted by close time.
pub fn parse_draws(data: &Value) -> Vec<Draw> {
    let Some(entries) = data.get("draws").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut draws: Vec<Draw> = entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<DrawEntry>(entry.clone()) {
            Ok(entry) => draw_from_entry(entry),
            Err(e) => {
                debug!("Skipping malformed draw entry: {}", e);
                None
            }
        })
        .collect();

    draws.sort_by_key(|draw| draw.close_time);
    draws
}

fn draw_from_entry(entry: DrawEntry) -> Option<Draw> {
    let row_id = entry.id.unwrap_or_default();
    let mut status = entry.status.unwrap_or_default();
    let mut event_id = String::new();
    let mut draw_type = String::new();
    let mut sport_id = String::new();
    let mut home = Slot::default();
    let mut away = Slot::default();
    let mut tie: Option<f64> = None;

    for row in entry.rows {
        let DrawRow {
            name: row_name,
            status: row_status,
            event_id: row_event,
            draw_type: row_type,
            sport_id: row_sport,
            competitors,
            ..
        } = row;

        event_id = row_event.unwrap_or_default();
        draw_type = row_type.unwrap_or_default();
        sport_id = row_sport.unwrap_or_default();
        if let Some(row_status) = row_status {
            status = row_status;
        }

        for competitor in competitors {
            let odds = competitor.odds_value();
            match competitor.id.as_deref() {
                Some(HOME_ID) => {
                    home = Slot {
                        name: competitor.name.unwrap_or_default(),
                        odds,
                    }
                }
                Some(AWAY_ID) => {
                    away = Slot {
                        name: competitor.name.unwrap_or_default(),
                        odds,
                    }
                }
                Some(DRAW_ID) => {
                    if competitor.name.as_deref() != Some(DRAW_COMPETITOR_NAME) {
                        debug!(
                            "Skipping {} ({}), since it has no '{}' odds",
                            row_id,
                            row_name.as_deref().unwrap_or(""),
                            DRAW_COMPETITOR_NAME
                        );
                        return None;
                    }
                    tie = Some(odds);
                }
                _ => {}
            }
        }
    }

    let draw_odds = match tie {
        Some(odds) if odds > 0.0 && home.is_valid() && away.is_valid() => odds,
        _ => {
            debug!("Skipping {}, since it is not a complete 1X2 draw", row_id);
            return None;
        }
    };

    Some(Draw {
        row_id,
        event_id,
        list_index: entry.list_index,
        home_team: home.name,
        away_team: away.name,
        home_odds: home.odds,
        draw_odds,
        away_odds: away.odds,
        draw_type,
        status,
        close_time: parse_timestamp_millis(entry.close_time.unwrap_or(0)),
        sport_id,
        brand_name: entry.brand_name.unwrap_or_default(),
        league: None,
    })
}

/// Parse the account transaction history.
///
/// Unlike draws, a transaction with an unknown type or product code fails the
/// whole parse.
pub fn parse_transactions(data: &Value) -> Result<Vec<Wager>> {
    let response: TransactionsResponse = serde_json::from_value(data.clone())
        .map_err(|e| VeikkausError::Parse(format!("transaction list: {e}")))?;

    response
        .transactions
        .into_iter()
        .map(wager_from_entry)
        .collect()
}

fn wager_from_entry(entry: TransactionEntry) -> Result<Wager> {
    let accounting_date = DateTime::from_timestamp_millis(entry.accounting_date).ok_or_else(|| {
        VeikkausError::Parse(format!(
            "accounting date {} of transaction {} is out of range",
            entry.accounting_date, entry.id
        ))
    })?;

    Ok(Wager {
        result: entry.transaction_type.parse()?,
        amount: entry.amount,
        accounting_date,
        external_id: entry.external_id,
        id: entry.id,
        product: entry.product.parse()?,
    })
}
