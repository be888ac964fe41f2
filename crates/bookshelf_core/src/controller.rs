use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bookshelf_client::{CatalogSource, ClientError, VolumePage, PAGE_SIZE};
use shelf_logging::{shelf_debug, shelf_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ViewState;

/// Query issued automatically when a controller is constructed.
pub const SEED_QUERY: &str = "book";

/// Owns the current [`ViewState`] and answers `(query, page)` requests by
/// fetching the page itself plus a lookahead probe for the page after it.
///
/// The catalog source is injected at construction; there is no ambient
/// singleton. The controller is reusable indefinitely: every failure becomes
/// an `Error` state and the next request proceeds normally.
pub struct SearchController {
    inner: Arc<Inner>,
}

struct Inner {
    source: Arc<dyn CatalogSource>,
    state: watch::Sender<ViewState>,
    // Monotonic invocation counter: a terminal publish is dropped when a
    // newer request has taken a ticket since, so the newest-issued request
    // wins rather than the last one to complete.
    ticket: AtomicU64,
}

impl SearchController {
    /// Builds a controller and spawns the seed request for page 0 of
    /// [`SEED_QUERY`]. Must be called from within a tokio runtime.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        let controller = Self {
            inner: Arc::new(Inner {
                source,
                state,
                ticket: AtomicU64::new(0),
            }),
        };
        controller.spawn_request(SEED_QUERY, 0);
        controller
    }

    /// A passive subscription to state changes for the presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the most recently published state.
    pub fn current(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    /// Fire-and-forget entry point for user actions. The transition to
    /// `Loading` happens synchronously, before this call returns.
    pub fn spawn_request(&self, query: &str, page: u32) -> JoinHandle<()> {
        let ticket = self.inner.begin(query, page);
        let inner = Arc::clone(&self.inner);
        let query = query.to_string();
        tokio::spawn(async move { inner.run(ticket, &query, page).await })
    }

    /// Runs one request to completion. `Loading` is published before the
    /// first await point.
    pub async fn request_page(&self, query: &str, page: u32) {
        let ticket = self.inner.begin(query, page);
        self.inner.run(ticket, query, page).await;
    }
}

impl Inner {
    fn begin(&self, query: &str, page: u32) -> u64 {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        shelf_debug!("search request #{ticket}: query={query:?} page={page}");
        self.state.send_replace(ViewState::Loading);
        ticket
    }

    async fn run(&self, ticket: u64, query: &str, page: u32) {
        let (primary, probe) = tokio::join!(
            self.source.fetch_page(query, page),
            self.source.fetch_page(query, page + 1),
        );
        self.finish(ticket, reconcile(page, primary, probe));
    }

    fn finish(&self, ticket: u64, next: ViewState) {
        if self.ticket.load(Ordering::SeqCst) != ticket {
            shelf_debug!("search request #{ticket}: superseded, result discarded");
            return;
        }
        if let ViewState::Error(message) = &next {
            shelf_warn!("search request #{ticket} failed: {message}");
        }
        self.state.send_replace(next);
    }
}

/// Folds the primary page and the lookahead probe into one terminal state.
///
/// A primary failure wins regardless of the probe's outcome. A probe failure
/// is also a hard error: without the probe's `total_items` the controller
/// cannot answer `has_next`.
fn reconcile(
    page: u32,
    primary: Result<VolumePage, ClientError>,
    probe: Result<VolumePage, ClientError>,
) -> ViewState {
    match (primary, probe) {
        (Err(err), _) => ViewState::Error(describe_failure(&err)),
        (_, Err(err)) => ViewState::Error(describe_failure(&err)),
        (Ok(primary), Ok(probe)) => ViewState::Success {
            items: primary.items.unwrap_or_default(),
            has_next: probe.total_items > (page + 1) * PAGE_SIZE,
        },
    }
}

fn describe_failure(err: &ClientError) -> String {
    if err.is_transport() {
        format!("Network Error: {err}")
    } else {
        format!("Server Error: {err}")
    }
}
