//! Request bodies for the EBET wager endpoints.

use crate::dto::{GameType, GameWager, SelectedCompetitors, Selection};
use crate::error::{Result, VeikkausError};
use crate::model::{BetDecision, Draw};

const WAGER_TYPE: &str = "NORMAL";
const SYSTEM_BET_TYPE: &str = "NORMAL";

/// Build the wager payload for `draws[i]` with `bets[i]`.
///
/// Each pair becomes its own single-selection game wager. Odds are sent back
/// rounded to the integer scale the API quoted them in.
pub fn ebet_payload(draws: &[Draw], bets: &[BetDecision]) -> Result<Vec<GameWager>> {
    if draws.len() != bets.len() {
        return Err(VeikkausError::MismatchedBets {
            games: draws.len(),
            bets: bets.len(),
        });
    }

    Ok(draws
        .iter()
        .zip(bets)
        .map(|(draw, bet)| GameWager {
            wager_type: WAGER_TYPE.to_string(),
            game_name: GameType::Ebet.as_str().to_string(),
            selections: vec![Selection {
                system_bet_type: SYSTEM_BET_TYPE.to_string(),
                stake: bet.amount,
                competitors: SelectedCompetitors {
                    main: vec![bet.target.competitor_code().to_string()],
                    spare: vec![draw.odds_for(bet.target).round() as i64],
                },
                row_id: draw.row_id.clone(),
            }],
        })
        .collect())
}
