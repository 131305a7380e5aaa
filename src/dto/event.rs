use serde::Deserialize;

/*
{
    "id": "98587029",
    "name": "Liverpool - Arsenal",
    "sportId": "1",
    "sportName": "Jalkapallo",
    "categoryId": "2",
    "categoryName": "Englanti",
    "tournamentId": "1",
    "tournamentName": "Valioliiga",
    "date": 1601319600000,
    "externalId": "23203829",
    "hasLiveBetting": false
}
*/
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(default, with = "super::id_serde::option")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default, with = "super::id_serde::option")]
    pub external_id: Option<String>,
}
