//! # veikkaus-rs
//!
//! An async Rust client for the private JSON API of Veikkaus (veikkaus.fi):
//! log in, read account balances and transaction history, browse sports,
//! fetch upcoming EBET (Pitkäveto) draws and place or test-place 1X2 bets.
//!
//! ## Quick Start
//!
//! ```no_run
//! use veikkaus_rs::{BetDecision, BetTarget, Config, GameType, PlacementMode, VeikkausClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Credentials from config.toml, or VEIKKAUS_ACCOUNT / VEIKKAUS_PASSWORD
//! let config = Config::new().unwrap_or_else(|_| Config::from_env());
//!
//! let mut client = VeikkausClient::new(config)?;
//! client.login().await;
//!
//! let usable = client.get_balance("usableBalance").await?;
//! println!("usable balance: {usable} €");
//!
//! let draws = client.upcoming_events(GameType::Ebet).await;
//! if let Some(draw) = draws.last() {
//!     // Only validates the bet
//!     let ok = client
//!         .place_bet(draw, BetDecision::new(BetTarget::Home, 100), PlacementMode::Test)
//!         .await?;
//!     println!("bet accepted: {ok}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! ```toml
//! [veikkaus]
//! account = "your_account"
//! password = "your_password"
//! # optional
//! api_url = "https://www.veikkaus.fi/api"
//! api_key = "ROBOT"
//! language = "fi"
//! timeout_secs = 30
//! ```
//!
//! Empty `account` / `password` fall back to the `VEIKKAUS_ACCOUNT` and
//! `VEIKKAUS_PASSWORD` environment variables.
//!
//! ## Errors
//!
//! Network failures and non-200 responses are logged through `tracing` and
//! come back as empty results. Invalid arguments and unparseable transaction
//! history are returned as [`VeikkausError`].

pub mod api_client;
pub mod bet;
pub mod config;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod parser;

// Re-export commonly used types at the crate root
pub use api_client::VeikkausClient;
pub use bet::ebet_payload;
pub use config::Config;
pub use dto::{BalanceKind, BetTarget, GameType, PlacementMode, TransactionType};
pub use error::{Result, VeikkausError};
pub use model::{AccountBalances, BetDecision, Draw, EventInfo, Wager};
pub use parser::{parse_draws, parse_transactions};
