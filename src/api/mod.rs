//! Cloudflare v4 API client
//!
//! Fetches resource records for one scope (account or zone), following the
//! standard response envelope and pagination. HTTP access goes through the
//! [`HttpClient`] trait so tests can substitute canned responses. Retry and
//! backoff are deliberately out of scope.

mod error;

pub use error::{ApiError, ApiResult};

use serde::Deserialize;

/// Cloudflare API base URL
pub const API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Page size for collection endpoints
const PER_PAGE: u32 = 50;

/// Credentials for the Cloudflare API
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Scoped API token (Authorization: Bearer)
    Token(String),
    /// Legacy global key plus account email
    KeyEmail { key: String, email: String },
}

/// HTTP client trait for testing
pub trait HttpClient {
    /// Perform an authenticated GET for a path-and-query relative to the
    /// API base, returning the raw response body.
    fn get(&self, path_and_query: &str) -> ApiResult<String>;
}

/// Real HTTP client using blocking reqwest
pub struct ReqwestClient {
    base_url: String,
    http: reqwest::blocking::Client,
    credentials: Credentials,
}

impl ReqwestClient {
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("tfgen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: API_BASE.to_string(),
            http,
            credentials,
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, path_and_query: &str) -> ApiResult<String> {
        let url = format!("{}/{}", self.base_url, path_and_query);

        let request = match &self.credentials {
            Credentials::Token(token) => self.http.get(&url).bearer_auth(token),
            Credentials::KeyEmail { key, email } => self
                .http
                .get(&url)
                .header("X-Auth-Key", key)
                .header("X-Auth-Email", email),
        };

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // The envelope usually carries the real error messages even on
            // non-2xx responses
            let messages = serde_json::from_str::<Envelope>(&body)
                .map(|envelope| envelope.error_messages())
                .unwrap_or_default();

            return Err(ApiError::Request {
                status: Some(status.as_u16()),
                messages,
            });
        }

        Ok(body)
    }
}

/// Standard Cloudflare response envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    result_info: Option<ResultInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResultInfo {
    #[serde(default)]
    total_pages: u32,
}

impl Envelope {
    fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{} (code {})", e.message, e.code))
            .collect()
    }
}

/// Cloudflare API client, generic over the HTTP transport
pub struct Client<H: HttpClient> {
    http: H,
}

impl Client<ReqwestClient> {
    /// Create a client backed by a real HTTP transport
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        Ok(Self {
            http: ReqwestClient::new(credentials)?,
        })
    }
}

impl<H: HttpClient> Client<H> {
    /// Create a client with a custom HTTP transport (for testing)
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    /// Fetch every record from a listing endpoint, following pagination.
    ///
    /// Collection endpoints return an array `result`; singleton settings
    /// endpoints return a single object. Both are normalized to a list of
    /// records so callers have one code path.
    pub fn fetch_all(&self, endpoint: &str) -> ApiResult<Vec<serde_json::Value>> {
        let mut records = Vec::new();
        let mut page: u32 = 1;

        loop {
            let separator = if endpoint.contains('?') { '&' } else { '?' };
            let body = self.http.get(&format!(
                "{endpoint}{separator}page={page}&per_page={PER_PAGE}"
            ))?;

            let envelope: Envelope = serde_json::from_str(&body)?;

            if !envelope.success {
                return Err(ApiError::Request {
                    status: None,
                    messages: envelope.error_messages(),
                });
            }

            match envelope.result {
                serde_json::Value::Array(items) => records.extend(items),
                serde_json::Value::Null => {}
                single => records.push(single),
            }

            match &envelope.result_info {
                Some(info) if page < info.total_pages => page += 1,
                _ => break,
            }
        }

        Ok(records)
    }
}
