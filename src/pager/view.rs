//! What an infinite list shows for a given state.

use crate::constants::SKELETON_CELL_COUNT;
use crate::models::Item;
use crate::pager::state::ListState;

/// Grid contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Cells<'a> {
    /// Placeholder cells while the first page loads.
    Skeleton(usize),
    Items(&'a [Item]),
}

/// A render-ready snapshot of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub cells: Cells<'a>,
    /// Sentinel region is mounted; carries whether to show the spinner.
    pub sentinel: Option<SentinelView>,
    pub all_loaded: bool,
    pub empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelView {
    pub spinner: bool,
}

impl<'a> ListView<'a> {
    pub fn of(state: &'a ListState) -> Self {
        let cells = if state.loading {
            Cells::Skeleton(SKELETON_CELL_COUNT)
        } else {
            Cells::Items(&state.items)
        };

        let sentinel = (state.has_more && !state.loading).then_some(SentinelView {
            spinner: state.loading_more,
        });

        Self {
            cells,
            sentinel,
            all_loaded: !state.has_more && !state.items.is_empty(),
            empty: !state.loading && state.items.is_empty(),
        }
    }

    /// Items with their rendering keys; empty while skeletons show.
    pub fn keyed_items(&self) -> Vec<(String, &'a Item)> {
        match self.cells {
            Cells::Items(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| (item.ui_key(i), item))
                .collect(),
            Cells::Skeleton(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> Item {
        Item {
            id: "1".to_string(),
            title: title.to_string(),
            poster: String::new(),
            rate: String::new(),
            year: String::new(),
            source: "s".to_string(),
        }
    }

    #[test]
    fn test_loading_shows_skeletons_only() {
        let state = ListState {
            mounted: true,
            loading: true,
            ..Default::default()
        };
        let view = ListView::of(&state);

        assert_eq!(view.cells, Cells::Skeleton(25));
        assert!(view.sentinel.is_none());
        assert!(!view.all_loaded);
        assert!(!view.empty);
    }

    #[test]
    fn test_loading_more_shows_spinner() {
        let state = ListState {
            mounted: true,
            loading_more: true,
            items: vec![item("A")],
            ..Default::default()
        };
        let view = ListView::of(&state);
        assert_eq!(view.sentinel, Some(SentinelView { spinner: true }));
    }

    #[test]
    fn test_exhausted_list_shows_footer() {
        let state = ListState {
            mounted: true,
            has_more: false,
            items: vec![item("A"), item("A")],
            ..Default::default()
        };
        let view = ListView::of(&state);

        assert!(view.sentinel.is_none());
        assert!(view.all_loaded);
        assert!(!view.empty);
        let keys: Vec<String> = view.keyed_items().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A-0", "A-1"]);
    }

    #[test]
    fn test_empty_result_shows_empty_message() {
        let state = ListState {
            mounted: true,
            has_more: false,
            ..Default::default()
        };
        let view = ListView::of(&state);
        assert!(view.empty);
        assert!(!view.all_loaded);
    }
}
