//! Async driver that pairs a [`ListController`] with a page source.

use async_trait::async_trait;

use crate::models::{CatalogResult, PageRequest};
use crate::pager::controller::{ListController, PagerOptions};
use crate::pager::sentinel::ViewportObserver;
use crate::pager::state::{ListState, Phase};
use crate::pager::view::ListView;

/// Anything that can answer a catalog page request.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Error: std::fmt::Display + Send;

    async fn fetch_page(&self, request: &PageRequest) -> Result<CatalogResult, Self::Error>;
}

/// An infinite list bound to a [`PageSource`].
///
/// `&mut self` on every load means at most one fetch runs at a time.
pub struct InfiniteList<S: PageSource, O: ViewportObserver> {
    source: S,
    controller: ListController<O>,
}

impl<S: PageSource, O: ViewportObserver> InfiniteList<S, O> {
    pub fn new(source: S, options: PagerOptions, observer: O) -> Self {
        Self {
            source,
            controller: ListController::new(options, observer),
        }
    }

    /// Load the first page.
    pub async fn mount(&mut self) {
        if let Some(fetch) = self.controller.mount() {
            self.run(fetch.page, &fetch.request).await;
        }
    }

    /// Handle the sentinel scrolling into view. Returns whether a page load
    /// was started.
    pub async fn sentinel_intersected(&mut self) -> bool {
        match self.controller.sentinel_intersected() {
            Some(fetch) => {
                self.run(fetch.page, &fetch.request).await;
                true
            }
            None => false,
        }
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn state(&self) -> &ListState {
        self.controller.state()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn view(&self) -> ListView<'_> {
        self.controller.view()
    }

    pub fn controller(&self) -> &ListController<O> {
        &self.controller
    }

    async fn run(&mut self, page: u32, request: &PageRequest) {
        match self.source.fetch_page(request).await {
            Ok(result) => self.controller.page_loaded(page, result),
            Err(e) => self.controller.page_failed(page, &e.to_string()),
        }
    }
}
