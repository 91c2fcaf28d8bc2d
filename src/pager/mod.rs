//! Infinite-scroll paging over a catalog source.
//!
//! [`ListController`] is the state machine, [`InfiniteList`] drives it
//! against a [`PageSource`], and [`ListView`] says what to render.

pub mod controller;
pub mod driver;
pub mod sentinel;
pub mod state;
pub mod view;

pub use controller::{ListController, PageFetch, PagerOptions};
pub use driver::{InfiniteList, PageSource};
pub use sentinel::{NoopObserver, ObservationHandle, SentinelSlot, ViewportObserver};
pub use state::{ListState, Phase};
pub use view::{Cells, ListView, SentinelView};
