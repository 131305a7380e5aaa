use serde::Deserialize;

/*
{
    "transactions": [
        {"type": "WIN", "product": "EBET", "amount": 500,
         "accountingDate": "1600000000000", "externalId": "x", "id": 7}
    ]
}
*/
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionEntry>,
}

/// A transaction as sent by the API, codes still unparsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    #[serde(with = "super::id_serde")]
    pub external_id: String,
    #[serde(with = "super::id_serde::int")]
    pub id: i64,
    #[serde(with = "super::id_serde::int")]
    pub accounting_date: i64,
    pub amount: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub product: String,
}
