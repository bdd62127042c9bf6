//! The fetch boundary of a paged collection.

use std::future::Future;

use crate::error::EngineResult;

/// An item with a stable unique identifier.
pub trait Identified {
    /// The item's identifier.
    fn id(&self) -> &str;
}

/// A backend that returns every item matching a filter in one response.
///
/// Filtering is entirely the backend's job; the collection never filters
/// locally. Implementations report failures as explicit errors, never as an
/// empty success.
pub trait CollectionSource: Send + Sync {
    /// The item type delivered by this source.
    type Item: Identified + Send;

    /// Fetches all items matching `filter`. An empty filter matches everything.
    fn fetch_filtered(
        &self,
        filter: &str,
    ) -> impl Future<Output = EngineResult<Vec<Self::Item>>> + Send;
}
