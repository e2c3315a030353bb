use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    types::{TokenBundle, TokenResponse},
    utils,
};

/// Permissions requested during authorization, in the order they are sent.
pub const SCOPES: [&str; 4] = [
    "user-read-recently-played",
    "user-top-read",
    "user-read-email",
    "user-read-private",
];

/// Builds the Spotify authorization URL and trades authorization codes for
/// tokens.
///
/// Holds nothing but static configuration and a connection pool, so a single
/// instance can serve any number of concurrent exchanges.
#[derive(Debug, Clone)]
pub struct AuthorizationClient {
    config: SpotifyConfig,
    authorize_endpoint: Url,
    client: Client,
}

impl AuthorizationClient {
    /// Creates a client for the given application credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configured authorize endpoint is not
    /// a valid absolute URL. Checking it here keeps
    /// [`build_authorization_url`](Self::build_authorization_url) infallible.
    pub fn new(config: SpotifyConfig, client: Client) -> Result<Self> {
        let authorize_endpoint = Url::parse(&config.auth_url).map_err(|e| {
            Error::Config(format!("SPOTIFY_API_AUTH_URL '{}': {}", config.auth_url, e))
        })?;

        Ok(Self {
            config,
            authorize_endpoint,
            client,
        })
    }

    /// Constructs the URL the user is sent to in order to grant access.
    ///
    /// The query always carries, in this order: `client_id`,
    /// `response_type=code`, `redirect_uri`, `scope` (space separated) and
    /// `show_dialog=true` so Spotify asks again even if access was granted
    /// before. The result depends only on configuration.
    pub fn build_authorization_url(&self) -> Url {
        let mut url = self.authorize_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &SCOPES.join(" "))
            .append_pair("show_dialog", "true");
        url
    }

    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// Sends a single form-encoded `POST` to the token endpoint, authenticated
    /// with HTTP Basic credentials built from the client id and secret.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`Error::AuthExchange`]:
    /// - a non-success status, carrying Spotify's raw response body
    /// - a transport failure (DNS, TLS, timeout, ...)
    /// - a success body that is not the expected token JSON
    pub async fn exchange_code(&self, code: &str) -> Result<TokenBundle> {
        let credentials =
            utils::basic_credentials(&self.config.client_id, &self.config.client_secret);

        let res = self
            .client
            .post(&self.config.token_url)
            .header(AUTHORIZATION, format!("Basic {}", credentials))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.config.redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| Error::AuthExchange(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(Error::AuthExchange(body));
        }

        let token = res
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::AuthExchange(format!("unexpected token response: {}", e)))?;

        Ok(token.into())
    }
}
