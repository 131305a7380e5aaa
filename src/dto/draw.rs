use serde::Deserialize;

/*
{
    "gameName": "EBET",
    "brandName": "838",
    "id": "2143963",
    "name": "SINGLE",
    "status": "OPEN",
    "closeTime": 1600887480000,
    "rows": [
        {
            "id": "1",
            "status": "OPEN",
            "competitors": [
                {"id": "1", "name": "Olympiakos", "odds": {"odds": 132}, "status": "ACTIVE"},
                {"id": "2", "name": "Omonoia", "odds": {"odds": 860}, "status": "ACTIVE"},
                {"id": "3", "name": "Tasapeli", "odds": {"odds": 440}, "status": "ACTIVE"}
            ],
            "eventId": "98723990",
            "type": "1X2",
            "sportId": "1"
        }
    ]
}
*/
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawEntry {
    #[serde(default, with = "super::id_serde::option")]
    pub id: Option<String>,
    #[serde(default, with = "super::id_serde::option")]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "super::id_serde::option")]
    pub list_index: Option<String>,
    #[serde(default, with = "super::id_serde::int::option")]
    pub close_time: Option<i64>,
    #[serde(default)]
    pub rows: Vec<DrawRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRow {
    #[serde(default, with = "super::id_serde::option")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "super::id_serde::option")]
    pub event_id: Option<String>,
    #[serde(default, rename = "type")]
    pub draw_type: Option<String>,
    #[serde(default, with = "super::id_serde::option")]
    pub sport_id: Option<String>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default, with = "super::id_serde::option")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub odds: Option<CompetitorOdds>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorOdds {
    #[serde(default, with = "super::id_serde::float::option")]
    pub odds: Option<f64>,
}

impl Competitor {
    pub fn odds_value(&self) -> f64 {
        self.odds.as_ref().and_then(|o| o.odds).unwrap_or(0.0)
    }
}
