use crate::error::VeikkausError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available game modes in the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    /// Moniveto
    Multiscore,
    /// Tulosveto
    Score,
    /// Vakio
    Sport,
    /// Voittajavedot
    Winner,
    /// Päivän pari
    Picktwo,
    /// Päivän trio
    Pickthree,
    /// Superkaksari
    Perfecta,
    /// Supertripla
    Trifecta,
    /// Pitkäveto
    Ebet,
    /// Moniveikkaus
    Ravi,
}

impl GameType {
    pub const ALL: [GameType; 10] = [
        GameType::Multiscore,
        GameType::Score,
        GameType::Sport,
        GameType::Winner,
        GameType::Picktwo,
        GameType::Pickthree,
        GameType::Perfecta,
        GameType::Trifecta,
        GameType::Ebet,
        GameType::Ravi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Multiscore => "MULTISCORE",
            GameType::Score => "SCORE",
            GameType::Sport => "SPORT",
            GameType::Winner => "WINNER",
            GameType::Picktwo => "PICKTWO",
            GameType::Pickthree => "PICKTHREE",
            GameType::Perfecta => "PERFECTA",
            GameType::Trifecta => "TRIFECTA",
            GameType::Ebet => "EBET",
            GameType::Ravi => "RAVI",
        }
    }
}

impl FromStr for GameType {
    type Err = VeikkausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::ALL
            .into_iter()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| VeikkausError::UnknownCode {
                kind: "game type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an account transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Win,
    Loss,
    Buy,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Win => "WIN",
            TransactionType::Loss => "LOSS",
            TransactionType::Buy => "BUY",
        }
    }
}

impl FromStr for TransactionType {
    type Err = VeikkausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(TransactionType::Win),
            "LOSS" => Ok(TransactionType::Loss),
            "BUY" => Ok(TransactionType::Buy),
            other => Err(VeikkausError::UnknownCode {
                kind: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a 1X2 market. Only 1X2 is supported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetTarget {
    Home,
    #[serde(rename = "X")]
    Draw,
    Away,
}

impl BetTarget {
    /// Competitor code sent in the wager `main` selection.
    pub fn competitor_code(&self) -> &'static str {
        match self {
            BetTarget::Home => "1",
            BetTarget::Draw => "2",
            BetTarget::Away => "3",
        }
    }
}

impl FromStr for BetTarget {
    type Err = VeikkausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HOME" => Ok(BetTarget::Home),
            "X" | "DRAW" => Ok(BetTarget::Draw),
            "AWAY" => Ok(BetTarget::Away),
            _ => Err(VeikkausError::InvalidBetTarget(s.to_string())),
        }
    }
}

impl fmt::Display for BetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetTarget::Home => f.write_str("HOME"),
            BetTarget::Draw => f.write_str("X"),
            BetTarget::Away => f.write_str("AWAY"),
        }
    }
}

/// Which of the CASH balances of the account to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BalanceKind {
    Balance,
    #[default]
    UsableBalance,
    FrozenBalance,
}

impl BalanceKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            BalanceKind::Balance => "balance",
            BalanceKind::UsableBalance => "usableBalance",
            BalanceKind::FrozenBalance => "frozenBalance",
        }
    }
}

impl FromStr for BalanceKind {
    type Err = VeikkausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balance" => Ok(BalanceKind::Balance),
            "usableBalance" => Ok(BalanceKind::UsableBalance),
            "frozenBalance" => Ok(BalanceKind::FrozenBalance),
            other => Err(VeikkausError::InvalidBalanceField(other.to_string())),
        }
    }
}

/// Whether a wager is only validated or actually placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    #[default]
    Test,
    Live,
}
