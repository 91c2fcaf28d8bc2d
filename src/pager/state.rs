use crate::models::Item;

/// Logical state of an infinite list, derived from [`ListState`]'s flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InitialLoading,
    Ready,
    MoreLoading,
}

/// Everything an infinite list renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub(crate) items: Vec<Item>,
    pub(crate) loading: bool,
    pub(crate) loading_more: bool,
    pub(crate) has_more: bool,
    pub(crate) current_page: u32,
    pub(crate) mounted: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loading_more: false,
            has_more: true,
            current_page: 0,
            mounted: false,
        }
    }
}

impl ListState {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn phase(&self) -> Phase {
        if !self.mounted {
            Phase::Idle
        } else if self.loading {
            Phase::InitialLoading
        } else if self.loading_more {
            Phase::MoreLoading
        } else {
            Phase::Ready
        }
    }

    /// Whether the sentinel should be under observation.
    pub fn sentinel_armed(&self) -> bool {
        self.mounted && self.has_more && !self.loading && !self.loading_more
    }
}
