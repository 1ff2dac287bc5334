/*
[INPUT]:  Access host, merchant credentials, and HTTP configuration
[OUTPUT]: Configured reqwest client with precomputed endpoint URLs
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info};

use crate::http::params::RequestParams;
use crate::http::{AccessError, Result};

/// Default version of the API responses this adapter requests. Future API
/// versions are intended to be compatible with this one.
pub const DEFAULT_API_VERSION: &str = "0400";

/// Merchant ids are six-digit Kount account numbers.
const MERCHANT_ID_MIN: u32 = 100_000;
const MERCHANT_ID_MAX: u32 = 999_999;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Access API
#[derive(Debug)]
pub struct AccessClient {
    http_client: Client,
    merchant_id: u32,
    api_key: String,
    api_version: String,
    endpoints: Endpoints,
    behavio_base_url: Option<Url>,
    authorization: OnceLock<String>,
}

/// Endpoint URLs, resolved once at construction.
#[derive(Debug)]
pub(crate) struct Endpoints {
    pub(crate) velocity: Url,
    pub(crate) device: Url,
    pub(crate) decision: Url,
    pub(crate) device_trust_by_device: Url,
    pub(crate) device_trust_by_session: Url,
    pub(crate) get_devices: Url,
    pub(crate) get_uniques: Url,
    pub(crate) info: Url,
}

impl Endpoints {
    fn resolve(base: &Url) -> Result<Self> {
        Ok(Self {
            velocity: base.join("api/velocity")?,
            device: base.join("api/device")?,
            decision: base.join("api/decision")?,
            device_trust_by_device: base.join("api/devicetrustbydevice")?,
            device_trust_by_session: base.join("api/devicetrustbysession")?,
            get_devices: base.join("api/getdevices")?,
            get_uniques: base.join("api/getuniques")?,
            info: base.join("api/info")?,
        })
    }
}

impl AccessClient {
    /// Create a client for the given Access host and merchant credentials.
    pub fn new(host: &str, merchant_id: u32, api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), host, merchant_id, api_key)
    }

    /// Create a client that requests a specific API response version.
    pub fn with_version(
        host: &str,
        merchant_id: u32,
        api_key: &str,
        version: &str,
    ) -> Result<Self> {
        let mut client = Self::with_config(ClientConfig::default(), host, merchant_id, api_key)?;
        client.api_version = version.to_string();
        Ok(client)
    }

    /// Create a client with custom transport configuration.
    pub fn with_config(
        config: ClientConfig,
        host: &str,
        merchant_id: u32,
        api_key: &str,
    ) -> Result<Self> {
        if host.is_empty() {
            return Err(AccessError::invalid("missing host"));
        }

        let base = Url::parse(&format!("https://{host}"))?;
        let client =
            Self::with_config_and_base_urls(config, base.as_str(), None, merchant_id, api_key)?;

        let api_key_prefix: String = api_key.chars().take(4).collect();
        info!(
            merchant_id,
            host,
            version = %client.api_version,
            api_key_prefix = %api_key_prefix,
            "access client created"
        );

        Ok(client)
    }

    /// Create a client against explicit base URLs.
    ///
    /// `behavio_base`, when set, overrides the per-call behavio host. Intended
    /// for pointing the client at a mock server.
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        api_base: &str,
        behavio_base: Option<&str>,
        merchant_id: u32,
        api_key: &str,
    ) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AccessError::invalid(format!("invalid api key ({api_key})")));
        }
        if !(MERCHANT_ID_MIN..=MERCHANT_ID_MAX).contains(&merchant_id) {
            return Err(AccessError::invalid(format!(
                "invalid merchant id ({merchant_id})"
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| AccessError::Internal(format!("failed to build http client: {err}")))?;

        let base = Url::parse(api_base)?;
        let endpoints = Endpoints::resolve(&base)?;
        let behavio_base_url = behavio_base.map(Url::parse).transpose()?;

        debug!(url = %endpoints.velocity, "velocity endpoint");
        debug!(url = %endpoints.decision, "decision endpoint");
        debug!(url = %endpoints.device, "device endpoint");
        debug!(url = %endpoints.device_trust_by_device, "devicetrustbydevice endpoint");
        debug!(url = %endpoints.device_trust_by_session, "devicetrustbysession endpoint");
        debug!(url = %endpoints.get_devices, "getdevices endpoint");
        debug!(url = %endpoints.get_uniques, "getuniques endpoint");
        debug!(url = %endpoints.info, "info endpoint");

        Ok(Self {
            http_client,
            merchant_id,
            api_key: api_key.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoints,
            behavio_base_url,
            authorization: OnceLock::new(),
        })
    }

    /// Version of the API responses requested from the server
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub(crate) fn merchant_id(&self) -> u32 {
        self.merchant_id
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Resolve the behavio collection URL for a host/environment pair.
    pub(crate) fn behavio_url(&self, host: &str, environment: &str) -> Result<Url> {
        match &self.behavio_base_url {
            Some(base) => Ok(base.join(&format!("{environment}/behavio/data"))?),
            None => Ok(Url::parse(&format!(
                "https://{host}/{environment}/behavio/data"
            ))?),
        }
    }

    /// Basic auth value, computed once and reused for every request.
    pub(crate) fn authorization_header(&self) -> &str {
        self.authorization.get_or_init(|| {
            let raw = format!("{}:{}", self.merchant_id, self.api_key);
            format!("Basic {}", BASE64.encode(raw.as_bytes()))
        })
    }

    /// Execute a GET request with query parameters and parse the JSON body.
    pub(crate) async fn get_json(&self, url: &Url, params: &RequestParams) -> Result<Value> {
        let started = Instant::now();
        let response = self
            .http_client
            .get(url.clone())
            .query(params.as_slice())
            .header(reqwest::header::AUTHORIZATION, self.authorization_header())
            .send()
            .await?;
        debug!(
            url = %url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "get request sent"
        );
        self.read_json(url, response).await
    }

    /// Execute a form POST and parse the JSON body.
    pub(crate) async fn post_json(&self, url: &Url, params: &RequestParams) -> Result<Value> {
        let response = self.post_form(url, params).await?;
        self.read_json(url, response).await
    }

    /// Execute a form POST, checking the status and discarding the body.
    pub(crate) async fn post_no_content(&self, url: &Url, params: &RequestParams) -> Result<()> {
        let response = self.post_form(url, params).await?;
        Self::check_status(url, &response)
    }

    async fn post_form(&self, url: &Url, params: &RequestParams) -> Result<reqwest::Response> {
        let started = Instant::now();
        let response = self
            .http_client
            .post(url.clone())
            .form(params.as_slice())
            .header(reqwest::header::AUTHORIZATION, self.authorization_header())
            .send()
            .await?;
        debug!(
            url = %url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "post request sent"
        );
        Ok(response)
    }

    fn check_status(url: &Url, response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AccessError::bad_response(status, url.as_str()));
        }
        Ok(())
    }

    async fn read_json(&self, url: &Url, response: reqwest::Response) -> Result<Value> {
        Self::check_status(url, &response)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|_| AccessError::invalid("unable to parse response"))
    }
}
