//! A paged collection bound to its backend source.

use parking_lot::Mutex;
use tracing::{info, warn};

use super::collection::{LoadOutcome, PagedCollection, RevealOutcome};
use super::source::CollectionSource;

/// Drives a [`PagedCollection`] from a [`CollectionSource`].
///
/// The collection lock is never held across the fetch, so reveals and new
/// loads proceed while a request is in flight.
pub struct CollectionBrowser<S: CollectionSource> {
    source: S,
    collection: Mutex<PagedCollection<S::Item>>,
}

impl<S: CollectionSource> CollectionBrowser<S> {
    /// Creates a browser with an empty collection.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            collection: Mutex::new(PagedCollection::new(page_size)),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches everything matching `filter` and applies it if still wanted.
    pub async fn load(&self, filter: &str) -> LoadOutcome {
        let ticket = self.collection.lock().begin_load(filter);

        let result = self.source.fetch_filtered(filter).await;

        let outcome = self.collection.lock().complete_load(ticket, result);
        match &outcome {
            LoadOutcome::Applied { total } => {
                info!(filter = %filter, total, "Collection loaded");
            }
            LoadOutcome::Discarded => {}
            LoadOutcome::Failed(error) => {
                warn!(filter = %filter, error = %error, "Collection load failed");
            }
        }
        outcome
    }

    /// Reloads the filter of the last failed load. Returns `None` when
    /// nothing failed.
    pub async fn retry(&self) -> Option<LoadOutcome> {
        let filter = self.collection.lock().retry_filter()?.to_string();
        Some(self.load(&filter).await)
    }

    /// See [`PagedCollection::reveal_more`].
    pub fn reveal_more(&self) -> RevealOutcome {
        self.collection.lock().reveal_more()
    }

    /// See [`PagedCollection::settle_reveal`].
    pub fn settle_reveal(&self) {
        self.collection.lock().settle_reveal();
    }

    /// See [`PagedCollection::next_page`].
    pub fn next_page(&self) -> RevealOutcome {
        self.collection.lock().next_page()
    }

    /// Whether loaded items remain hidden.
    pub fn has_more(&self) -> bool {
        self.collection.lock().has_more()
    }

    /// Runs `f` against the collection under its lock.
    pub fn with_collection<R>(&self, f: impl FnOnce(&PagedCollection<S::Item>) -> R) -> R {
        f(&self.collection.lock())
    }
}

impl<S> CollectionBrowser<S>
where
    S: CollectionSource,
    S::Item: Clone,
{
    /// A copy of the visible items.
    pub fn visible(&self) -> Vec<S::Item> {
        self.collection.lock().visible().to_vec()
    }
}
