use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/*
{"balances":{"CASH":{"type":"CASH","balance":12345,"usableBalance":12000,"frozenBalance":345}}}
*/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfoResponse {
    /// Only `CASH` is decoded; other balance kinds are kept raw.
    #[serde(default)]
    pub balances: HashMap<String, Value>,
}

/// Balances in cents.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub balance: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub usable_balance: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub frozen_balance: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

impl AccountInfoResponse {
    /// The CASH balance, zeroes when the API leaves it out.
    pub fn cash(&self) -> serde_json::Result<AccountBalance> {
        match self.balances.get("CASH") {
            Some(cash) => AccountBalance::deserialize(cash),
            None => Ok(AccountBalance::default()),
        }
    }
}
