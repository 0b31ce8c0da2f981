//! HTTP client for the MES API.
//!
//! Every call flows through one pipeline: attach the bearer credential when
//! the store holds one, send with the configured timeout, check the status,
//! decode the body. Any failure (transport, non-2xx, undecodable body) is
//! surfaced exactly once through the [`Notifier`] sink and then returned to
//! the caller, so callers may still apply their own recovery. The client
//! never retries and never deduplicates: concurrent identical calls produce
//! independent requests and independent notifications.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use bon::bon;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT};
use crate::errors::{Error, Result};
use crate::notifications::{Notifier, TracingNotifier};

/// Versioned prefix every API path lives under.
const API_PREFIX: &str = "api/v1/";

/// Holder for the bearer credential shared by every outgoing request.
///
/// The token is read on each request and may be replaced at any time from
/// another task; readers never block. Absence is a valid state: the request
/// simply goes out unauthenticated. Cloning yields a handle to the same
/// underlying token, so a swap through any handle is visible to all.
#[derive(Debug, Default, Clone)]
pub struct CredentialStore {
    token: Arc<ArcSwapOption<String>>,
}

impl CredentialStore {
    /// Create a store seeded with an optional token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(ArcSwapOption::from_pointee(token)),
        }
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }

    /// Replace the stored token. Requests already in flight keep the
    /// credential they were sent with; subsequent requests use the new one.
    pub fn replace(&self, token: Option<String>) {
        self.token.store(token.map(Arc::new));
    }
}

/// Makes sure a url has a trailing slash.
///
/// `Url::join` drops the final path segment of a slashless base (joining
/// '/hello' with 'world' gives '/world', while '/hello/' gives
/// '/hello/world'), so call this before joining.
fn ensure_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        url.clone()
    } else {
        let mut new_url = url.clone();
        let mut path = new_url.path().to_string();
        path.push('/');
        new_url.set_path(&path);
        new_url
    }
}

/// Pull the server's human-readable `detail` field out of an error body.
///
/// String details pass through verbatim; structured details (e.g. field
/// validation lists) are rendered as JSON so the user still sees something.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

/// Shared MES API client.
///
/// Cheap to clone; clones share the credential store, the notification sink,
/// and the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    credentials: CredentialStore,
    notifier: Arc<dyn Notifier>,
    http: reqwest::Client,
}

#[bon]
impl Client {
    /// Build a client. Only the base URL is required; the credential store
    /// defaults to empty, notifications default to the tracing sink, and the
    /// timeout defaults to the service contract's 30 seconds.
    #[builder]
    pub fn new(
        base_url: Url,
        #[builder(default)] credentials: CredentialStore,
        notifier: Option<Arc<dyn Notifier>>,
        #[builder(default = DEFAULT_REQUEST_TIMEOUT)] timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: ensure_slash(&base_url),
            credentials,
            notifier: notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
            http,
        }
    }
}

impl Client {
    /// Build a client from loaded configuration, seeding the credential
    /// store with the configured token.
    pub fn from_config(config: &Config) -> Self {
        Client::builder()
            .base_url(config.base_url.clone())
            .credentials(CredentialStore::new(config.token.clone()))
            .timeout(config.timeout)
            .build()
    }

    /// Handle to the credential store shared by every request this client
    /// sends. Use [`CredentialStore::replace`] to rotate the token at runtime.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(&format!("{API_PREFIX}{path}"))
            .map_err(|e| Error::Config {
                message: format!("Failed to construct URL for {path}: {e}"),
            })
    }

    /// `GET` a single resource.
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(self.url(path)?);
        self.execute(request).await
    }

    /// `GET` with query parameters (filters, pagination).
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.url(path)?).query(query);
        self.execute(request).await
    }

    /// `POST` a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)?).json(body);
        self.execute(request).await
    }

    /// `POST` with no body, for lifecycle transitions.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)?);
        self.execute(request).await
    }

    /// `POST` with no body and query parameters.
    pub async fn post_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)?).query(query);
        self.execute(request).await
    }

    /// `PUT` a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.put(self.url(path)?).json(body);
        self.execute(request).await
    }

    /// Single exit point: every failure is logged and surfaced exactly once
    /// through the notifier, then handed back to the caller unchanged.
    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        match self.try_execute(request).await {
            Ok(value) => Ok(value),
            Err(e) => {
                e.log();
                self.notifier.notify(&e.user_message());
                Err(e)
            }
        }
    }

    async fn try_execute<T>(&self, mut request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if let Some(token) = self.credentials.get() {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status,
                detail: extract_detail(&body),
            });
        }

        let body_text = response.text().await?;
        match serde_json::from_str::<T>(&body_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(Error::Decode {
                source: e,
                body: body_text,
            }),
        }
    }
}
