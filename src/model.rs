use crate::dto::{AccountBalance, BalanceKind, BetTarget, GameType, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A single EBET fixture with 1X2 odds.
///
/// Odds are kept in the API's integer hundredths scale (`245.0` is a 2.45 price),
/// because that is also what the wager endpoint expects back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draw {
    pub row_id: String,
    pub event_id: String,
    pub list_index: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_odds: f64,
    pub draw_odds: f64,
    pub away_odds: f64,
    pub draw_type: String,
    pub status: String,
    pub close_time: DateTime<Utc>,
    pub sport_id: String,
    pub brand_name: String,
    pub league: Option<String>,
}

impl Draw {
    /// Quoted odds for `target` in the API scale.
    pub fn odds_for(&self, target: BetTarget) -> f64 {
        match target {
            BetTarget::Home => self.home_odds,
            BetTarget::Draw => self.draw_odds,
            BetTarget::Away => self.away_odds,
        }
    }

    /// Odds for `target` as a decimal price, e.g. `2.45`.
    pub fn decimal_odds(&self, target: BetTarget) -> f64 {
        self.odds_for(target) / 100.0
    }

    pub fn is_one_x_two(&self) -> bool {
        self.draw_type == "1X2"
    }

    pub fn with_league(self, league: Option<String>) -> Self {
        Self { league, ..self }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Draw type: '{:3}' {} {}: {:15} - {:15} id: {} event_id: {} status: {}, odds: ({:6} - {:6} - {:6})",
            self.draw_type,
            self.close_time.format("%d.%m.%Y %H:%M"),
            self.league.as_deref().unwrap_or(""),
            self.home_team,
            self.away_team,
            self.row_id,
            self.event_id,
            self.status,
            self.home_odds,
            self.draw_odds,
            self.away_odds,
        )
    }
}

/// What to bet on and how much, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetDecision {
    pub target: BetTarget,
    pub amount: u64,
}

impl BetDecision {
    pub fn new(target: BetTarget, amount: u64) -> Self {
        Self { target, amount }
    }
}

/// One entry of the account transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wager {
    pub result: TransactionType,
    /// Signed, in cents.
    pub amount: i64,
    pub accounting_date: DateTime<Utc>,
    pub external_id: String,
    pub id: i64,
    pub product: GameType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventInfo {
    pub league: Option<String>,
    pub external_id: Option<String>,
}

impl fmt::Display for EventInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventInfo: league: {}, external_id: {}",
            self.league.as_deref().unwrap_or(""),
            self.external_id.as_deref().unwrap_or("")
        )
    }
}

/// CASH balances of the account in euros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccountBalances {
    pub balance: Decimal,
    pub usable_balance: Decimal,
    pub frozen_balance: Decimal,
}

impl AccountBalances {
    pub fn get(&self, kind: BalanceKind) -> Decimal {
        match kind {
            BalanceKind::Balance => self.balance,
            BalanceKind::UsableBalance => self.usable_balance,
            BalanceKind::FrozenBalance => self.frozen_balance,
        }
    }
}

impl From<AccountBalance> for AccountBalances {
    fn from(cents: AccountBalance) -> Self {
        Self {
            balance: Decimal::new(cents.balance, 2),
            usable_balance: Decimal::new(cents.usable_balance, 2),
            frozen_balance: Decimal::new(cents.frozen_balance, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balances_are_cents_divided_by_hundred() {
        let balances = AccountBalances::from(AccountBalance {
            balance: 12345,
            usable_balance: 12000,
            frozen_balance: 345,
        });
        assert_eq!(balances.get(BalanceKind::Balance), Decimal::new(12345, 2));
        assert_eq!(balances.get(BalanceKind::UsableBalance).to_string(), "120.00");
        assert_eq!(balances.get(BalanceKind::FrozenBalance).to_string(), "3.45");
    }
}
