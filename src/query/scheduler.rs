//! Polling scheduler.
//!
//! Runs one tokio task per query key. A task fetches immediately, reports
//! the outcome on the event channel, then sleeps until its refresh interval
//! elapses or the key is invalidated. Subscriptions to the same key share a
//! single task; the task is cancelled when the last subscription drops.

use super::key::{Payload, QueryKey, QueryOptions};
use crate::api::ApiError;
use crate::events::QueryEvent;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Notify, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub type FetchFuture = BoxFuture<'static, Result<Payload, ApiError>>;

/// Produces a fresh request future each time the query is polled.
pub type Fetcher = Arc<dyn Fn() -> FetchFuture + Send + Sync>;

struct Poller {
    token: CancellationToken,
    refresh: Arc<Notify>,
    subscribers: usize,
    _handle: JoinHandle<()>,
}

#[derive(Clone)]
pub struct QueryScheduler {
    pollers: Arc<Mutex<HashMap<QueryKey, Poller>>>,
    events: mpsc::Sender<QueryEvent>,
    root: CancellationToken,
}

impl QueryScheduler {
    pub fn new(events: mpsc::Sender<QueryEvent>) -> Self {
        Self {
            pollers: Arc::new(Mutex::new(HashMap::new())),
            events,
            root: CancellationToken::new(),
        }
    }

    fn pollers(&self) -> MutexGuard<'_, HashMap<QueryKey, Poller>> {
        // A panicking holder cannot leave the map half-updated
        self.pollers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mounts a query. Must be called from within a tokio runtime.
    ///
    /// If the key already has a live poller the subscription joins it and
    /// `options`/`fetcher` are ignored.
    pub fn subscribe(&self, options: QueryOptions, fetcher: Fetcher) -> Subscription {
        let key = options.key;
        let mut pollers = self.pollers();

        if let Some(poller) = pollers.get_mut(&key) {
            if !poller.token.is_cancelled() {
                poller.subscribers += 1;
                return Subscription {
                    key,
                    scheduler: self.clone(),
                };
            }
        }

        let token = self.root.child_token();
        let refresh = Arc::new(Notify::new());
        let handle = tokio::spawn(poll_loop(
            options,
            fetcher,
            self.events.clone(),
            token.clone(),
            refresh.clone(),
        ));
        log::debug!("Started poller for {}", key);
        pollers.insert(
            key,
            Poller {
                token,
                refresh,
                subscribers: 1,
                _handle: handle,
            },
        );

        Subscription {
            key,
            scheduler: self.clone(),
        }
    }

    /// Requests an immediate refetch. Requests made while a fetch is in
    /// flight collapse into a single follow-up fetch.
    pub fn invalidate(&self, key: QueryKey) {
        if let Some(poller) = self.pollers().get(&key) {
            poller.refresh.notify_one();
        }
    }

    pub fn invalidate_all(&self) {
        for poller in self.pollers().values() {
            poller.refresh.notify_one();
        }
    }

    pub fn is_polling(&self, key: QueryKey) -> bool {
        self.pollers()
            .get(&key)
            .is_some_and(|poller| !poller.token.is_cancelled())
    }

    /// Cancels every poller. Results still in flight are discarded.
    pub fn shutdown(&self) {
        self.root.cancel();
        self.pollers().clear();
    }

    fn release(&self, key: QueryKey) {
        let mut pollers = self.pollers();
        let remaining = match pollers.get_mut(&key) {
            Some(poller) => {
                poller.subscribers = poller.subscribers.saturating_sub(1);
                poller.subscribers
            }
            None => return,
        };
        if remaining == 0 {
            if let Some(poller) = pollers.remove(&key) {
                poller.token.cancel();
                log::debug!("Stopped poller for {}", key);
            }
        }
    }
}

impl std::fmt::Debug for QueryScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<QueryKey> = self.pollers().keys().copied().collect();
        keys.sort();
        f.debug_struct("QueryScheduler")
            .field("polling", &keys)
            .field("shut_down", &self.root.is_cancelled())
            .finish()
    }
}

/// Keeps a query mounted. Dropping it unmounts the query.
pub struct Subscription {
    key: QueryKey,
    scheduler: QueryScheduler,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.scheduler.release(self.key);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish()
    }
}

async fn poll_loop(
    options: QueryOptions,
    fetcher: Fetcher,
    events: mpsc::Sender<QueryEvent>,
    token: CancellationToken,
    refresh: Arc<Notify>,
) {
    loop {
        let outcome = tokio::select! {
            _ = token.cancelled() => break,
            outcome = fetcher() => outcome,
        };

        let event = match outcome {
            Ok(payload) => QueryEvent::resolved(payload),
            Err(error) => QueryEvent::failed(options.key, &error, options.on_error),
        };

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            sent = events.send(event) => {
                if sent.is_err() {
                    // Nobody is listening anymore
                    break;
                }
            }
        }

        match options.refresh_interval {
            Some(interval) => tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
                _ = refresh.notified() => {}
            },
            None => tokio::select! {
                _ = token.cancelled() => break,
                _ = refresh.notified() => {}
            },
        }
    }
}
