//! Resource-list fetch controller.
//!
//! The per-page pattern behind every list screen: construct a controller
//! over one endpoint, call [`ListController::refresh`] on mount (and again
//! on explicit re-query), render from the state snapshot. Success replaces
//! the items and recomputes the derived stats; failure keeps the previous
//! items and records the message the client already surfaced.
//!
//! Overlapping fetches are resolved by issue order, not arrival order: every
//! fetch is tagged with a monotonically increasing sequence number, a
//! settling fetch is applied only if nothing newer has been applied, and the
//! loading flag clears only when the newest issued fetch settles. A slow,
//! stale response can never clobber newer data.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::client::Client;
use crate::errors::Result;
use crate::types::{Page, RequestParams};

/// One listable endpoint. The controller is generic over this seam so tests
/// can substitute canned or delayed sources for the real client.
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    async fn fetch(&self, params: &RequestParams) -> Result<Page<T>>;
}

/// A [`ListSource`] that issues `GET <path>` through the shared [`Client`].
pub struct EndpointSource {
    client: Client,
    path: &'static str,
}

impl EndpointSource {
    pub fn new(client: Client, path: &'static str) -> Self {
        Self { client, path }
    }
}

#[async_trait]
impl<T> ListSource<T> for EndpointSource
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch(&self, params: &RequestParams) -> Result<Page<T>> {
        self.client.get_query(self.path, params).await
    }
}

/// Snapshot of one controller's fetch lifecycle.
///
/// Mutated only by the terminal outcomes of fetches; rendering is a pure
/// function of this value. No cross-controller sharing, no cache.
#[derive(Debug, Clone)]
pub struct FetchState<T, S> {
    /// Items in server-defined order, empty until the first successful fetch.
    pub items: Vec<T>,
    /// True strictly while the newest issued fetch is in flight.
    pub loading: bool,
    /// Message of the most recent failure, cleared by the next success.
    pub error: Option<String>,
    /// Display-only aggregates derived from `items`.
    pub stats: S,
}

struct Inner<T, S> {
    params: RequestParams,
    state: FetchState<T, S>,
    last_applied: u64,
}

/// Mount-style fetch controller for one resource collection.
pub struct ListController<T, S> {
    source: Arc<dyn ListSource<T>>,
    stats_fn: Box<dyn Fn(&[T]) -> S + Send + Sync>,
    issued: AtomicU64,
    inner: Mutex<Inner<T, S>>,
}

impl<T, S> ListController<T, S> {
    /// Create a controller over `source` with the given initial params.
    ///
    /// `stats_fn` derives the display aggregates from the fetched items; it
    /// runs synchronously after every applied success, and once here against
    /// the empty collection for the initial state.
    pub fn new<F>(source: Arc<dyn ListSource<T>>, params: RequestParams, stats_fn: F) -> Self
    where
        F: Fn(&[T]) -> S + Send + Sync + 'static,
    {
        let initial_stats = stats_fn(&[]);
        Self {
            source,
            stats_fn: Box::new(stats_fn),
            issued: AtomicU64::new(0),
            inner: Mutex::new(Inner {
                params,
                state: FetchState {
                    items: Vec::new(),
                    loading: false,
                    error: None,
                    stats: initial_stats,
                },
                last_applied: 0,
            }),
        }
    }

    /// Replace the query parameters used by subsequent refreshes. Does not
    /// itself trigger a fetch; re-querying stays an explicit caller action.
    pub async fn set_params(&self, params: RequestParams) {
        self.inner.lock().await.params = params;
    }

    /// Issue one fetch with the current params and apply its outcome.
    ///
    /// The returned future resolves when this particular fetch settles,
    /// whether or not its outcome was applied.
    pub async fn refresh(&self) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let params = {
            let mut inner = self.inner.lock().await;
            inner.state.loading = true;
            inner.params.clone()
        };

        let outcome = self.source.fetch(&params).await;

        let mut inner = self.inner.lock().await;
        if seq > inner.last_applied {
            inner.last_applied = seq;
            match outcome {
                Ok(page) => {
                    inner.state.items = page.items;
                    inner.state.stats = (self.stats_fn)(&inner.state.items);
                    inner.state.error = None;
                }
                Err(e) => {
                    // The client has already notified once; keep the previous
                    // items and record what went wrong.
                    tracing::debug!(error = %e, seq, "List fetch failed");
                    inner.state.error = Some(e.user_message());
                }
            }
        } else {
            tracing::debug!(seq, last_applied = inner.last_applied, "Discarding stale fetch outcome");
        }

        // Only the newest issued fetch clears the flag; a discarded straggler
        // must not blank the spinner while a newer fetch is still out.
        if seq == self.issued.load(Ordering::SeqCst) {
            inner.state.loading = false;
        }
    }

    /// Clone of the current state for rendering.
    pub async fn state(&self) -> FetchState<T, S>
    where
        T: Clone,
        S: Clone,
    {
        self.inner.lock().await.state.clone()
    }
}
