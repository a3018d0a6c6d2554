pub mod alert;

use crate::form::schema::Credentials;
use anyhow::{anyhow, Result};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Path of the authentication endpoint, relative to the service base URL.
pub const SIGNIN_PATH: &str = "/auth/signin";

#[instrument]
pub fn endpoint_url(base_url: &str, endpoint: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}{}", endpoint);

    debug!("endpoint URL: {}", endpoint);

    Ok(endpoint_url)
}

/// Submit validated credentials to the signin endpoint.
///
/// Any transport error or non-2xx status is a single undifferentiated
/// failure; the response body is discarded on success.
// TODO: consume the session payload once /auth/signin returns one
#[instrument(skip(credentials))]
pub async fn signin(base_url: &str, credentials: Credentials) -> Result<()> {
    let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

    let signin_url = endpoint_url(base_url, SIGNIN_PATH)?;

    let response = client.post(&signin_url).json(&credentials).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("{} - {}", signin_url, response.status()));
    }

    debug!("signin response: {}", response.status());

    Ok(())
}
