use reqwest::StatusCode;

/// Errors produced by the Veikkaus client.
///
/// Transport failures (`Status`, `Http`, `Json`, `NotLoggedIn`) never escape the
/// public facade methods of [`crate::VeikkausClient`]; they are logged there and
/// turned into empty results. Everything else is returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum VeikkausError {
    #[error("missing account authentication information: {0} is not set")]
    MissingCredentials(&'static str),

    #[error("api key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid balance type '{0}', expected one of balance, usableBalance, frozenBalance")]
    InvalidBalanceField(String),

    #[error("number of games ({games}) has to match number of bets ({bets})")]
    MismatchedBets { games: usize, bets: usize },

    #[error("invalid bet target '{0}'")]
    InvalidBetTarget(String),

    #[error("input string '{value}' did not match any {kind}")]
    UnknownCode { kind: &'static str, value: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("no active session for accessing '{0}'")]
    NotLoggedIn(String),

    #[error("request to {url} failed with status {status}")]
    Status { status: StatusCode, url: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VeikkausError>;
