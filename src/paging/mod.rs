//! Paged collection cache.
//!
//! Collections are fetched whole for a filter and revealed to the view one
//! page at a time. A newer filter supersedes an in-flight load, and typed
//! filters are debounced before they reach the backend.

mod browser;
mod collection;
mod debounce;
mod rest;
mod source;

pub use browser::CollectionBrowser;
pub use collection::{LoadOutcome, LoadState, LoadTicket, PagedCollection, RevealOutcome};
pub use debounce::{DEFAULT_DEBOUNCE, FilterDebouncer};
pub use rest::{DEFAULT_TIMEOUT, PRODUCTS_FOR_SALE_PATH, RestSource};
pub use source::{CollectionSource, Identified};
