use serde::{Deserialize, Serialize};

/*
[
    {
        "type": "NORMAL",
        "gameName": "EBET",
        "selections": [
            {
                "systemBetType": "NORMAL",
                "stake": 100,
                "competitors": {"main": ["1"], "spare": [310]},
                "rowId": "150410"
            }
        ]
    }
]
*/
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameWager {
    #[serde(rename = "type")]
    pub wager_type: String,
    pub game_name: String,
    pub selections: Vec<Selection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub system_bet_type: String,
    /// Cents.
    pub stake: u64,
    pub competitors: SelectedCompetitors,
    pub row_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedCompetitors {
    pub main: Vec<String>,
    /// Quoted odds of the `main` pick, integer hundredths.
    pub spare: Vec<i64>,
}
