//! Fetch-once, reveal-incrementally collection.
//!
//! A [`PagedCollection`] holds the complete result set for one filter and
//! exposes a growing prefix of it to the view. Loading is split into
//! [`PagedCollection::begin_load`] and [`PagedCollection::complete_load`] so
//! the network await happens outside the collection; a response is applied
//! only if its filter is still the one the view wants.

use tracing::{debug, warn};

use crate::error::EngineError;

use super::Identified;

/// Fetch state of a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No fetch in flight.
    Idle,
    /// A fetch is in flight. `initial` is true until the first successful
    /// load, when the view shows a blocking loading screen instead of an
    /// in-place indicator.
    Fetching {
        /// Whether this is the first load.
        initial: bool,
    },
    /// The most recent fetch failed; the previous items are kept.
    Failed {
        /// The failure.
        error: EngineError,
        /// The filter to retry.
        filter: String,
    },
}

/// Handle for a load started with [`PagedCollection::begin_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    filter: String,
    seq: u64,
}

impl LoadTicket {
    /// The filter this load was started for.
    pub fn filter(&self) -> &str {
        &self.filter
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The items replaced the collection.
    Applied {
        /// Number of items fetched.
        total: usize,
    },
    /// A newer load for a different filter superseded this one.
    Discarded,
    /// The fetch failed and the previous items were kept.
    Failed(EngineError),
}

/// What happened to a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The next slice was appended.
    Revealed {
        /// Number of items appended.
        added: usize,
    },
    /// Everything is already visible.
    Exhausted,
    /// A previous reveal has not been settled yet; nothing was appended.
    Pending,
}

/// A complete filtered result set revealed to the view in pages.
///
/// Visible items are always the first
/// `min(page_size × pages_revealed, total)` items.
///
/// # Examples
///
/// ```
/// use playroom_engine::paging::{Identified, PagedCollection, RevealOutcome};
///
/// struct Row(String);
/// impl Identified for Row {
///     fn id(&self) -> &str { &self.0 }
/// }
///
/// let mut rows = PagedCollection::new(2);
/// let ticket = rows.begin_load("");
/// rows.complete_load(ticket, Ok((0..3).map(|i| Row(i.to_string())).collect()));
///
/// assert_eq!(rows.visible().len(), 2);
/// assert_eq!(rows.reveal_more(), RevealOutcome::Revealed { added: 1 });
/// assert!(!rows.has_more());
/// ```
#[derive(Debug, Clone)]
pub struct PagedCollection<T> {
    items: Vec<T>,
    visible_len: usize,
    page_size: usize,
    pages_revealed: usize,
    desired_filter: Option<String>,
    loaded_filter: Option<String>,
    state: LoadState,
    reveal_pending: bool,
    next_seq: u64,
    latest_seq: u64,
}

impl<T> PagedCollection<T> {
    /// Creates an empty collection. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            visible_len: 0,
            page_size: page_size.max(1),
            pages_revealed: 0,
            desired_filter: None,
            loaded_filter: None,
            state: LoadState::Idle,
            reveal_pending: false,
            next_seq: 0,
            latest_seq: 0,
        }
    }

    /// Starts loading `filter`, superseding any load for another filter.
    ///
    /// Current items stay in place until the response is applied.
    pub fn begin_load(&mut self, filter: impl Into<String>) -> LoadTicket {
        let filter = filter.into();
        self.next_seq += 1;
        self.latest_seq = self.next_seq;
        self.desired_filter = Some(filter.clone());
        self.state = LoadState::Fetching {
            initial: self.loaded_filter.is_none(),
        };

        debug!(filter = %filter, seq = self.latest_seq, "Collection load started");
        LoadTicket {
            filter,
            seq: self.latest_seq,
        }
    }

    /// Applies the result of a load started with [`Self::begin_load`].
    ///
    /// Results for a filter that is no longer wanted are discarded, whether
    /// they succeeded or failed.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, EngineError>,
    ) -> LoadOutcome {
        if self.desired_filter.as_deref() != Some(ticket.filter.as_str()) {
            debug!(
                filter = %ticket.filter,
                desired = ?self.desired_filter,
                "Discarding stale collection response"
            );
            return LoadOutcome::Discarded;
        }

        let is_latest = ticket.seq == self.latest_seq;

        match result {
            Ok(items) => {
                let total = items.len();
                self.items = items;
                self.pages_revealed = 1;
                self.visible_len = total.min(self.page_size);
                self.reveal_pending = false;
                self.loaded_filter = Some(ticket.filter);
                if is_latest {
                    self.state = LoadState::Idle;
                }
                debug!(total, visible = self.visible_len, "Collection load applied");
                LoadOutcome::Applied { total }
            }
            Err(error) => {
                warn!(filter = %ticket.filter, error = %error, "Collection load failed");
                if is_latest {
                    self.state = LoadState::Failed {
                        error: error.clone(),
                        filter: ticket.filter,
                    };
                }
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Appends the next page of loaded items to the visible prefix.
    ///
    /// Does nothing when everything is visible or when an earlier reveal has
    /// not been settled with [`Self::settle_reveal`], so a trigger that fires
    /// twice before the view updates appends only once.
    pub fn reveal_more(&mut self) -> RevealOutcome {
        if self.reveal_pending {
            return RevealOutcome::Pending;
        }
        if !self.has_more() {
            return RevealOutcome::Exhausted;
        }

        let end = (self.visible_len + self.page_size).min(self.items.len());
        let added = end - self.visible_len;
        self.visible_len = end;
        self.pages_revealed += 1;
        self.reveal_pending = true;

        RevealOutcome::Revealed { added }
    }

    /// Marks the last reveal as rendered, allowing the next one.
    pub fn settle_reveal(&mut self) {
        self.reveal_pending = false;
    }

    /// Reveals the next page and settles it at once, for an explicit
    /// "next page" control.
    pub fn next_page(&mut self) -> RevealOutcome {
        let outcome = self.reveal_more();
        self.settle_reveal();
        outcome
    }

    /// The visible prefix.
    pub fn visible(&self) -> &[T] {
        &self.items[..self.visible_len]
    }

    /// Every loaded item.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether loaded items remain hidden.
    pub fn has_more(&self) -> bool {
        self.visible_len < self.items.len()
    }

    /// Whether a reveal is waiting to be settled.
    pub fn is_revealing(&self) -> bool {
        self.reveal_pending
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages revealed since the last load.
    pub fn pages_revealed(&self) -> usize {
        self.pages_revealed
    }

    /// Current fetch state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// True while the first ever load is in flight.
    pub fn is_initial_loading(&self) -> bool {
        matches!(self.state, LoadState::Fetching { initial: true })
    }

    /// True while a reload is in flight with previous items still shown.
    pub fn is_refreshing(&self) -> bool {
        matches!(self.state, LoadState::Fetching { initial: false })
    }

    /// The filter the view currently wants.
    pub fn desired_filter(&self) -> Option<&str> {
        self.desired_filter.as_deref()
    }

    /// The filter the loaded items belong to.
    pub fn loaded_filter(&self) -> Option<&str> {
        self.loaded_filter.as_deref()
    }

    /// The filter to retry after a failure.
    pub fn retry_filter(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { filter, .. } => Some(filter),
            _ => None,
        }
    }
}

impl<T: Identified> PagedCollection<T> {
    /// Finds a loaded item by id, visible or not.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}
