//! Infinite-list state machine.
//!
//! The controller never performs I/O. Calls that start a load return a
//! [`PageFetch`]; the caller performs it and reports back with
//! [`ListController::page_loaded`] or [`ListController::page_failed`].

use log::{debug, error, warn};

use crate::constants::{DEFAULT_PAGE_LIMIT, ERR_PAGE_REJECTED, SENTINEL_THRESHOLD};
use crate::models::{CatalogResult, PageRequest};
use crate::pager::sentinel::{SentinelSlot, ViewportObserver};
use crate::pager::state::{ListState, Phase};
use crate::pager::view::ListView;

#[derive(Debug, Clone)]
pub struct PagerOptions {
    pub limit: u32,
    pub category: String,
    /// Clear `loading` when the first page fails. Off by default: a failed
    /// first load leaves the list in its skeleton state.
    pub recover_initial_failure: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            category: String::new(),
            recover_initial_failure: false,
        }
    }
}

/// A page load the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFetch {
    /// Zero-based page index; echo it back when reporting the outcome.
    pub page: u32,
    pub request: PageRequest,
}

pub struct ListController<O: ViewportObserver> {
    options: PagerOptions,
    state: ListState,
    in_flight: Option<u32>,
    sentinel: SentinelSlot<O>,
}

impl<O: ViewportObserver> ListController<O> {
    pub fn new(options: PagerOptions, observer: O) -> Self {
        Self {
            options: PagerOptions {
                limit: options.limit.max(1),
                ..options
            },
            state: ListState::default(),
            in_flight: None,
            sentinel: SentinelSlot::new(observer, SENTINEL_THRESHOLD),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn view(&self) -> ListView<'_> {
        ListView::of(&self.state)
    }

    pub fn is_observing(&self) -> bool {
        self.sentinel.is_observing()
    }

    pub fn observer(&self) -> &O {
        self.sentinel.observer()
    }

    pub fn in_flight(&self) -> Option<u32> {
        self.in_flight
    }

    /// Start the list. Returns the first-page fetch; `None` if already mounted.
    pub fn mount(&mut self) -> Option<PageFetch> {
        if self.state.mounted {
            return None;
        }
        self.state = ListState {
            mounted: true,
            loading: true,
            ..Default::default()
        };
        Some(self.begin(0))
    }

    /// The sentinel became visible. Returns the next page's fetch if the
    /// list is ready for one.
    pub fn sentinel_intersected(&mut self) -> Option<PageFetch> {
        if !self.state.sentinel_armed() || self.in_flight.is_some() {
            debug!("Ignoring sentinel intersection in phase {:?}", self.phase());
            return None;
        }
        self.state.current_page += 1;
        self.state.loading_more = true;
        Some(self.begin(self.state.current_page))
    }

    /// Report a completed fetch for `page`.
    ///
    /// A result whose `code` is not 200 counts as a failure.
    pub fn page_loaded(&mut self, page: u32, result: CatalogResult) {
        if !self.accept(page) {
            return;
        }
        if !result.is_success() {
            let reason = if result.message.is_empty() {
                ERR_PAGE_REJECTED.to_string()
            } else {
                result.message
            };
            self.fail(page, &reason);
            return;
        }

        let received = result.list.len();
        self.state.has_more = received == self.options.limit as usize;
        if page == 0 {
            self.state.items = result.list;
            self.state.loading = false;
        } else {
            self.state.items.extend(result.list);
            self.state.loading_more = false;
        }
        debug!(
            "Page {} loaded with {} items, {} total, has_more={}",
            page,
            received,
            self.state.items.len(),
            self.state.has_more
        );
        self.sync_sentinel();
    }

    /// Report a failed fetch for `page`.
    pub fn page_failed(&mut self, page: u32, reason: &str) {
        if self.accept(page) {
            self.fail(page, reason);
        }
    }

    /// Tear down: release the observer and ignore any outstanding fetch.
    pub fn unmount(&mut self) {
        self.state.mounted = false;
        self.in_flight = None;
        self.sentinel.release();
    }

    fn begin(&mut self, page: u32) -> PageFetch {
        self.in_flight = Some(page);
        self.sync_sentinel();
        PageFetch {
            page,
            request: PageRequest::nth(page, self.options.limit, self.options.category.clone()),
        }
    }

    /// Claim the in-flight slot for a reported outcome.
    fn accept(&mut self, page: u32) -> bool {
        if !self.state.mounted {
            debug!("Dropping outcome for page {} after unmount", page);
            return false;
        }
        if self.in_flight != Some(page) {
            warn!(
                "Dropping outcome for page {}, in flight: {:?}",
                page, self.in_flight
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    fn fail(&mut self, page: u32, reason: &str) {
        error!("Failed to load page {}: {}", page, reason);
        if page == 0 {
            if self.options.recover_initial_failure {
                self.state.loading = false;
            }
        } else {
            self.state.loading_more = false;
        }
        self.sync_sentinel();
    }

    fn sync_sentinel(&mut self) {
        self.sentinel.sync(self.state.sentinel_armed());
    }
}
