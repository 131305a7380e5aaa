use crate::bet::ebet_payload;
use crate::config::{Config, Credentials};
use crate::dto::*;
use crate::endpoints::Endpoint;
use crate::error::{Result, VeikkausError};
use crate::model::{AccountBalances, BetDecision, Draw, EventInfo, Wager};
use crate::parser::{parse_draws, parse_transactions};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const API_KEY_HEADER: &str = "x-esa-api-key";

/// Client holding one authenticated Veikkaus session.
///
/// Failed requests are logged and show up as empty results ("no data");
/// only configuration, validation and transaction parse errors are returned.
pub struct VeikkausClient {
    client: Client,
    config: Arc<Config>,
    credentials: Credentials,
    logged_in: bool,
}

impl VeikkausClient {
    /// Create a client, resolving credentials from the config or the environment.
    ///
    /// Fails with [`VeikkausError::MissingCredentials`] when either the account
    /// or the password cannot be found.
    pub fn new(config: Config) -> Result<Self> {
        let credentials = config.credentials()?;
        Self::with_credentials(config, credentials)
    }

    pub fn with_credentials(config: Config, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::api_headers(&config.veikkaus.api_key)?)
            .cookie_store(true)
            .timeout(Duration::from_secs(config.veikkaus.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            credentials,
            logged_in: false,
        })
    }

    /// Create a client and log in straight away.
    pub async fn connect(config: Config) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.login().await;
        Ok(client)
    }

    fn api_headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        Ok(headers)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Start the session. The session cookie is kept by the HTTP client.
    ///
    /// Returns whether the login succeeded; a failure is logged and leaves the
    /// client without a session, so later calls return empty results.
    pub async fn login(&mut self) -> bool {
        let payload = LoginRequest::standard(&self.credentials.account, &self.credentials.password);
        info!("Trying to log in as {}...", self.credentials.account);

        match self.send(&Endpoint::login(), Method::POST, Some(&payload)).await {
            Ok(_) => {
                info!("Successfully logged in!");
                self.logged_in = true;
            }
            Err(e) => {
                error!("Cannot login: {}", e);
                self.logged_in = false;
            }
        }

        self.logged_in
    }

    // ========================================================================
    // Transport
    // ========================================================================

    async fn send<P>(&self, endpoint: &Endpoint, method: Method, payload: Option<&P>) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = endpoint.url(&self.config.veikkaus.api_url);
        info!("Sending {} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            request = if method == Method::GET {
                request.query(payload)
            } else {
                request.json(payload)
            };
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            error!(
                "Request failed {}, {}. URL: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                url
            );
            let body = response.text().await.unwrap_or_default();
            if !body.is_empty() {
                debug!("Invalid request:\n{}", body);
            }
            return Err(VeikkausError::Status { status, url });
        }

        let body = response.text().await?;
        info!("Response OK from {}", endpoint);
        debug!("Received:\n{}", body);

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Authenticated request; needs a session.
    async fn access_endpoint<P>(
        &self,
        endpoint: &Endpoint,
        method: Method,
        payload: Option<&P>,
    ) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        if !self.logged_in {
            return Err(VeikkausError::NotLoggedIn(endpoint.path().to_string()));
        }

        if let Some(payload) = payload {
            debug!("Payload:\n{}", serde_json::to_string_pretty(payload)?);
        }

        self.send(endpoint, method, payload).await
    }

    /// Like `access_endpoint`, but failures are logged and become `None`.
    async fn fetch<P>(&self, endpoint: &Endpoint, method: Method, payload: Option<&P>) -> Option<Value>
    where
        P: Serialize + ?Sized,
    {
        match self.access_endpoint(endpoint, method, payload).await {
            Ok(value) => Some(value),
            Err(VeikkausError::NotLoggedIn(path)) => {
                warn!("No active session for accessing '{}'.", path);
                None
            }
            Err(e) => {
                warn!("No data from '{}': {}", endpoint, e);
                None
            }
        }
    }

    fn language_params(&self) -> [(&'static str, &str); 1] {
        [("lang", self.config.veikkaus.language.as_str())]
    }

    // ========================================================================
    // Account Operations
    // ========================================================================

    /// All CASH balances of the account in euros, `None` if the query failed.
    pub async fn account_balances(&self) -> Option<AccountBalances> {
        let data = self
            .fetch(&Endpoint::account_info(), Method::GET, None::<&()>)
            .await?;

        let cash = serde_json::from_value::<AccountInfoResponse>(data)
            .and_then(|account| account.cash());
        let balances = match cash {
            Ok(cash) => AccountBalances::from(cash),
            Err(e) => {
                warn!("Could not read account balances: {}", e);
                return None;
            }
        };

        info!(
            "Account has balance: total: {} €, frozen: {} €, usable: {} €",
            balances.balance, balances.frozen_balance, balances.usable_balance
        );
        Some(balances)
    }

    /// Return one account balance in euros.
    ///
    /// `balance` must be one of `balance`, `usableBalance` or `frozenBalance`;
    /// anything else fails before a request is made. A failed query yields zero.
    pub async fn get_balance(&self, balance: &str) -> Result<Decimal> {
        let kind: BalanceKind = balance.parse()?;
        Ok(self
            .account_balances()
            .await
            .map(|balances| balances.get(kind))
            .unwrap_or(Decimal::ZERO))
    }

    /// Account transaction history, oldest first as returned by the API.
    ///
    /// A failed query yields an empty list; an unrecognized transaction or
    /// product code is an error.
    pub async fn get_betting_history(&self) -> Result<Vec<Wager>> {
        let Some(data) = self
            .fetch(&Endpoint::account_transactions(), Method::GET, None::<&()>)
            .await
        else {
            return Ok(Vec::new());
        };

        parse_transactions(&data)
    }

    // ========================================================================
    // Draw Operations
    // ========================================================================

    /// Upcoming draws for a game type, sorted by close time.
    ///
    /// Only EBET (Pitkäveto) draws are supported; other game types log a
    /// warning and return nothing.
    pub async fn upcoming_events(&self, game_type: GameType) -> Vec<Draw> {
        if game_type != GameType::Ebet {
            warn!("Not yet implemented game type: {}", game_type);
            return Vec::new();
        }

        let params = [("game-names", game_type.as_str())];
        match self.fetch(&Endpoint::draws(), Method::GET, Some(&params)).await {
            Some(data) => parse_draws(&data),
            None => Vec::new(),
        }
    }

    /// League and external id of a sports event.
    pub async fn event_info(&self, event_id: &str) -> Option<EventInfo> {
        self.fetch_event_info(Endpoint::single_event(event_id)).await
    }

    /// League and external id of a single draw.
    pub async fn draw_info(&self, draw_id: &str) -> Option<EventInfo> {
        self.fetch_event_info(Endpoint::single_draw(draw_id)).await
    }

    async fn fetch_event_info(&self, endpoint: Endpoint) -> Option<EventInfo> {
        let params = self.language_params();
        let data = self.fetch(&endpoint, Method::GET, Some(&params)).await?;

        match serde_json::from_value::<EventResponse>(data) {
            Ok(event) => Some(EventInfo {
                league: event.tournament_name,
                external_id: event.external_id,
            }),
            Err(e) => {
                warn!("Could not read event info from '{}': {}", endpoint, e);
                None
            }
        }
    }

    /// Fill in `league` of each draw from its event. Each event is queried once.
    pub async fn annotate_leagues(&self, draws: Vec<Draw>) -> Vec<Draw> {
        let mut leagues: HashMap<String, Option<String>> = HashMap::new();
        let mut annotated = Vec::with_capacity(draws.len());

        for draw in draws {
            if !leagues.contains_key(&draw.event_id) {
                let league = self
                    .event_info(&draw.event_id)
                    .await
                    .and_then(|event| event.league);
                leagues.insert(draw.event_id.clone(), league);
            }
            let league = leagues.get(&draw.event_id).cloned().flatten();
            annotated.push(draw.with_league(league));
        }

        annotated
    }

    // ========================================================================
    // Wager Operations
    // ========================================================================

    /// Place a single bet, amount in cents.
    ///
    /// With [`PlacementMode::Test`] the API only checks that the bet could have
    /// been placed. Returns whether the API accepted the wager.
    pub async fn place_bet(&self, draw: &Draw, bet: BetDecision, mode: PlacementMode) -> Result<bool> {
        self.place_bets(std::slice::from_ref(draw), &[bet], mode).await
    }

    /// Place `bets[i]` on `draws[i]` in one request.
    pub async fn place_bets(
        &self,
        draws: &[Draw],
        bets: &[BetDecision],
        mode: PlacementMode,
    ) -> Result<bool> {
        let payload = ebet_payload(draws, bets)?;
        let endpoint = match mode {
            PlacementMode::Test => Endpoint::wager_check(),
            PlacementMode::Live => Endpoint::wager(),
        };

        Ok(self
            .fetch(&endpoint, Method::POST, Some(&payload))
            .await
            .is_some())
    }

    // ========================================================================
    // Sport Listings
    // ========================================================================

    async fn fetch_listing(&self, endpoint: Endpoint) -> Value {
        let params = self.language_params();
        self.fetch(&endpoint, Method::GET, Some(&params))
            .await
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }

    /// Available sports, e.g. `[{"id": "1", "name": "Jalkapallo"}, ...]`.
    pub async fn sport_types(&self) -> Value {
        self.fetch_listing(Endpoint::sport_types()).await
    }

    /// Categories (mostly countries) of a sport.
    pub async fn sport_categories(&self, sport_id: u32) -> Value {
        self.fetch_listing(Endpoint::sport_categories(sport_id)).await
    }

    /// Tournaments of a sport category.
    pub async fn sport_tournaments(&self, sport_id: u32, category_id: u32) -> Value {
        self.fetch_listing(Endpoint::sport_tournaments(sport_id, category_id))
            .await
    }

    /// Events and teams of a single tournament.
    pub async fn sport_tournament_info(
        &self,
        sport_id: u32,
        category_id: u32,
        tournament_id: u32,
    ) -> Value {
        self.fetch_listing(Endpoint::sport_tournament_info(
            sport_id,
            category_id,
            tournament_id,
        ))
        .await
    }
}
