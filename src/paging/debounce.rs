//! Debounced filter input for a [`CollectionBrowser`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use super::browser::CollectionBrowser;
use super::collection::LoadOutcome;
use super::source::CollectionSource;

/// Default quiet period before a typed filter is fetched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces rapid filter edits into a single load.
///
/// Every edit restarts a timer; only when the input has been quiet for the
/// configured delay is the filter fetched. The timer is a tokio task that is
/// aborted on the next edit, so this must be used inside a tokio runtime.
///
/// Aborting only ever stops the timer. Once it fires, the load runs as its own
/// task to completion, and a response for a filter that is no longer wanted is
/// discarded by the collection when it arrives.
pub struct FilterDebouncer<S: CollectionSource + 'static> {
    browser: Arc<CollectionBrowser<S>>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    input: Mutex<String>,
}

impl<S: CollectionSource + 'static> FilterDebouncer<S> {
    /// Creates a debouncer with the default delay.
    pub fn new(browser: Arc<CollectionBrowser<S>>) -> Self {
        Self::with_delay(browser, DEFAULT_DEBOUNCE)
    }

    /// Creates a debouncer with a custom delay.
    pub fn with_delay(browser: Arc<CollectionBrowser<S>>, delay: Duration) -> Self {
        Self {
            browser,
            delay,
            pending: Mutex::new(None),
            input: Mutex::new(String::new()),
        }
    }

    /// The browser this debouncer feeds.
    pub fn browser(&self) -> &Arc<CollectionBrowser<S>> {
        &self.browser
    }

    /// The current raw input.
    pub fn input(&self) -> String {
        self.input.lock().clone()
    }

    /// Whether the timer is running. A load that has already started is not
    /// counted.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Records an edit and (re)starts the timer.
    pub fn on_filter_changed(&self, raw: &str) {
        *self.input.lock() = raw.to_string();

        let browser = Arc::clone(&self.browser);
        let delay = self.delay;
        let filter = raw.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // detached: aborting the timer must not abort the fetch
            tokio::spawn(async move {
                browser.load(&filter).await;
            });
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
            debug!(filter = %raw, "Restarted filter debounce");
        }
    }

    /// Cancels the timer and loads `raw` immediately.
    pub async fn submit(&self, raw: &str) -> LoadOutcome {
        self.cancel();
        *self.input.lock() = raw.to_string();
        self.browser.load(raw).await
    }

    /// Resets the filter to empty and loads everything immediately.
    pub async fn clear(&self) -> LoadOutcome {
        self.submit("").await
    }

    /// Stops the timer, if running. A load already in flight is unaffected.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl<S: CollectionSource + 'static> Drop for FilterDebouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
