//! Session handling and the single request path every endpoint goes through.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, COOKIE, ORIGIN, REFERER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, trace, warn};

use crate::api::encode::Params;
use crate::error::{QbitError, QbitResult};
use crate::metrics::ApiMetrics;

/// Name of the session cookie issued by the daemon.
pub const SESSION_COOKIE: &str = "SID";

const LOGIN_METHOD: &str = "auth/login";
const LOGOUT_METHOD: &str = "auth/logout";

/// Transport hints for a single call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Send the body as `multipart/form-data` instead of form-urlencoded.
    pub multipart: bool,
}

impl RequestOptions {
    pub fn multipart() -> Self {
        Self { multipart: true }
    }
}

/// Connection state shared by all endpoint groups of one client.
///
/// The session token is cached optimistically: once obtained it is reused
/// until the server hands out a new one or an explicit logout succeeds. A
/// rejected request (403 and friends) does not clear it, so callers that see
/// an auth failure must log in again themselves.
pub struct Session {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    sid: RwLock<Option<String>>,
    login_gate: Mutex<()>,
    metrics: Option<Arc<ApiMetrics>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub(crate) fn new(
        base_url: &str,
        username: String,
        password: String,
        timeout: Option<Duration>,
        metrics: Option<Arc<ApiMetrics>>,
    ) -> QbitResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| QbitError::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            username,
            password,
            sid: RwLock::new(None),
            login_gate: Mutex::new(()),
            metrics,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session token, if one is held.
    pub async fn token(&self) -> Option<String> {
        self.sid.read().await.clone()
    }

    fn endpoint_url(&self, method: &str) -> String {
        format!("{}/api/v2/{}", self.base_url, method.trim_start_matches('/'))
    }

    /// Call a remote method, logging in first if no session is held yet.
    ///
    /// Returns the response body decoded as JSON, or the body text as a JSON
    /// string when it is not JSON.
    pub async fn invoke(
        &self,
        method: &str,
        params: Params,
        options: RequestOptions,
    ) -> QbitResult<Value> {
        if method.trim_start_matches('/') != LOGIN_METHOD {
            self.ensure_session().await?;
        }
        self.send(method, params, options).await
    }

    /// Call a remote method and decode the body into `T`.
    pub async fn invoke_json<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> QbitResult<T> {
        let body = self.invoke(method, params, RequestOptions::default()).await?;
        serde_json::from_value(body)
            .map_err(|e| QbitError::Parse(format!("{}: {}", method.trim_start_matches('/'), e)))
    }

    /// Call a remote method whose body carries nothing of interest.
    pub async fn invoke_unit(&self, method: &str, params: Params) -> QbitResult<()> {
        self.invoke(method, params, RequestOptions::default())
            .await
            .map(|_| ())
    }

    /// Log in with the configured credentials.
    pub async fn login(&self) -> QbitResult<Value> {
        let params = Params::new()
            .text("username", &self.username)
            .text("password", &self.password);
        self.send(LOGIN_METHOD, params, RequestOptions::default())
            .await
    }

    /// Log in with explicit credentials, replacing the stored token on success.
    pub async fn login_with(&self, username: &str, password: &str) -> QbitResult<Value> {
        let params = Params::new()
            .text("username", username)
            .text("password", password);
        self.send(LOGIN_METHOD, params, RequestOptions::default())
            .await
    }

    /// End the session. The stored token is dropped only if the server
    /// accepted the logout.
    pub async fn logout(&self) -> QbitResult<Value> {
        let body = self
            .invoke(LOGOUT_METHOD, Params::new(), RequestOptions::default())
            .await?;
        *self.sid.write().await = None;
        info!(api_op = "logout", "Session closed");
        Ok(body)
    }

    /// Make sure a token is held, logging in at most once across
    /// concurrent callers.
    async fn ensure_session(&self) -> QbitResult<()> {
        if self.sid.read().await.is_some() {
            return Ok(());
        }

        let _gate = self.login_gate.lock().await;
        // Another caller may have finished logging in while we waited.
        if self.sid.read().await.is_some() {
            return Ok(());
        }

        debug!(api_op = "login", "No session, logging in");
        self.login().await?;

        if self.sid.read().await.is_none() {
            warn!(api_op = "login", "Login returned no session cookie");
            return Err(QbitError::SessionUnavailable);
        }
        Ok(())
    }

    /// Issue one POST and translate the response.
    #[instrument(skip(self, params), fields(api_op = %method.trim_start_matches('/')))]
    async fn send(
        &self,
        method: &str,
        params: Params,
        options: RequestOptions,
    ) -> QbitResult<Value> {
        let url = self.endpoint_url(method);
        let is_login = method.trim_start_matches('/') == LOGIN_METHOD;

        let mut request = self
            .http
            .post(&url)
            .header(REFERER, &self.base_url)
            .header(ORIGIN, &self.base_url);

        if let Some(sid) = self.sid.read().await.as_deref() {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, sid));
        }

        request = if options.multipart {
            request.multipart(params.into_multipart()?)
        } else {
            request.form(&params.form_pairs())
        };

        trace!(url = %url, multipart = options.multipart, "Sending request");
        if let Some(metrics) = &self.metrics {
            metrics.record_request(method);
        }
        let started = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_transport_failure(method, &e.to_string());
                }
                return Err(e.into());
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), url = %url, "Request failed");
            if let Some(metrics) = &self.metrics {
                metrics.record_failure(method, status.as_u16());
            }
            let body = response.text().await?;
            return Err(QbitError::Api {
                status: status.as_u16(),
                body,
                url,
            });
        }

        let renewed = response
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string());
        if let Some(sid) = renewed {
            let mut current = self.sid.write().await;
            if current.as_deref() != Some(sid.as_str()) {
                if is_login {
                    info!(api_op = "login", "Session established");
                    if let Some(metrics) = &self.metrics {
                        metrics.record_login();
                    }
                } else {
                    debug!("Server renewed session");
                    if let Some(metrics) = &self.metrics {
                        metrics.record_session_renewal();
                    }
                }
            }
            *current = Some(sid);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_transport_failure(method, &e.to_string());
                }
                return Err(e.into());
            }
        };
        if let Some(metrics) = &self.metrics {
            metrics.record_success(method, started.elapsed());
        }
        debug!(status = status.as_u16(), len = bytes.len(), "Request succeeded");
        Ok(decode_body(content_type.as_deref(), &bytes))
    }
}

/// Parse the body as JSON when the server labels it `application/json`;
/// anything else comes back as the raw text.
pub fn decode_body(content_type: Option<&str>, bytes: &[u8]) -> Value {
    let is_json = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false);
    if is_json {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return value;
        }
    }
    Value::String(String::from_utf8_lossy(bytes).into_owned())
}
