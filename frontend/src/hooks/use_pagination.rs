use dashboard_domain::Pager;
use std::ops::Range;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

pub enum PagerAction {
    Previous,
    Next,
    SyncToScroll { scroll_left: f64, viewport_width: f64 },
    Reset { item_count: usize, page_size: usize },
}

/// `pager` re-fitted to the given list, keeping its page where it still exists
fn fitted(pager: Pager, item_count: usize, page_size: usize) -> Pager {
    if page_size.max(1) == pager.page_size() {
        let mut resized = pager;
        resized.resize(item_count);
        resized
    } else {
        let mut resized = Pager::new(item_count, page_size);
        resized.sync_to(pager.current_page());
        resized
    }
}

#[derive(Clone, PartialEq)]
struct PagerState {
    pager: Pager,
}

impl Reducible for PagerState {
    type Action = PagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut pager = self.pager;
        let changed = match action {
            PagerAction::Previous => pager.previous(),
            PagerAction::Next => pager.next(),
            PagerAction::SyncToScroll { scroll_left, viewport_width } => {
                pager.sync_to_scroll(scroll_left, viewport_width)
            }
            PagerAction::Reset { item_count, page_size } => {
                pager = fitted(pager, item_count, page_size);
                pager != self.pager
            }
        };

        if changed {
            Rc::new(Self { pager })
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_count: usize,
    /// Item ranges for every page, in carousel order
    pub pages: Vec<Range<usize>>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Clone)]
pub struct UsePaginationActions {
    pub previous_page: Callback<MouseEvent>,
    pub next_page: Callback<MouseEvent>,
    /// Attach to the carousel's `onscroll` so swipes move the page index
    pub on_scroll: Callback<Event>,
}

pub struct UsePaginationResult {
    pub state: PaginationState,
    pub actions: UsePaginationActions,
    /// Attach to the scroll-snap carousel element
    pub carousel_ref: NodeRef,
}

fn scroll_carousel_to(carousel_ref: &NodeRef, page: usize) {
    if let Some(carousel) = carousel_ref.cast::<Element>() {
        let target = page as f64 * f64::from(carousel.client_width());
        if (f64::from(carousel.scroll_left()) - target).abs() >= 1.0 {
            carousel.scroll_to_with_x_and_y(target, 0.0);
        }
    }
}

/// Page index over `item_count` items, kept in step with a carousel.
///
/// Buttons move the index and scroll the carousel to match; scrolling the
/// carousel reports back through `on_scroll`. Navigation stops at both ends.
#[hook]
pub fn use_pagination(item_count: usize, page_size: usize) -> UsePaginationResult {
    let pager_state = use_reducer_eq(|| PagerState {
        pager: Pager::new(item_count, page_size),
    });
    let carousel_ref = use_node_ref();

    // Follow the list when it grows, shrinks or is re-paged
    {
        let dispatcher = pager_state.dispatcher();
        use_effect_with((item_count, page_size), move |&(item_count, page_size)| {
            dispatcher.dispatch(PagerAction::Reset { item_count, page_size });
            || ()
        });
    }

    // The stored pager catches up in the effect above, after this render;
    // render from one already fitted to the current list
    let pager = fitted(pager_state.pager, item_count, page_size);

    let previous_page = {
        let dispatcher = pager_state.dispatcher();
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut target = pager;
            if target.previous() {
                scroll_carousel_to(&carousel_ref, target.current_page());
            }
            dispatcher.dispatch(PagerAction::Previous);
        })
    };

    let next_page = {
        let dispatcher = pager_state.dispatcher();
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut target = pager;
            if target.next() {
                scroll_carousel_to(&carousel_ref, target.current_page());
            }
            dispatcher.dispatch(PagerAction::Next);
        })
    };

    let on_scroll = {
        let dispatcher = pager_state.dispatcher();
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(carousel) = carousel_ref.cast::<Element>() {
                dispatcher.dispatch(PagerAction::SyncToScroll {
                    scroll_left: f64::from(carousel.scroll_left()),
                    viewport_width: f64::from(carousel.client_width()),
                });
            }
        })
    };

    let state = PaginationState {
        current_page: pager.current_page(),
        page_count: pager.page_count(),
        pages: (0..pager.page_count()).map(|page| pager.page_range(page)).collect(),
        can_go_previous: pager.can_go_previous(),
        can_go_next: pager.can_go_next(),
    };

    let actions = UsePaginationActions {
        previous_page,
        next_page,
        on_scroll,
    };

    UsePaginationResult {
        state,
        actions,
        carousel_ref,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn state(item_count: usize, page_size: usize) -> Rc<PagerState> {
        Rc::new(PagerState {
            pager: Pager::new(item_count, page_size),
        })
    }

    #[wasm_bindgen_test]
    fn test_reduce_navigation() {
        let moved = state(9, 4).reduce(PagerAction::Next);
        assert_eq!(moved.pager.current_page(), 1);

        let back = moved.reduce(PagerAction::Previous);
        assert_eq!(back.pager.current_page(), 0);
    }

    #[wasm_bindgen_test]
    fn test_reduce_returns_same_state_at_edges() {
        let start = state(9, 4);
        let unchanged = start.clone().reduce(PagerAction::Previous);
        assert!(Rc::ptr_eq(&start, &unchanged));
    }

    #[wasm_bindgen_test]
    fn test_reduce_scroll_sync() {
        let synced = state(12, 4).reduce(PagerAction::SyncToScroll {
            scroll_left: 600.0,
            viewport_width: 300.0,
        });
        assert_eq!(synced.pager.current_page(), 2);
    }

    #[wasm_bindgen_test]
    fn test_fitted_pages_stay_inside_shorter_list() {
        let stale = state(10, 4).reduce(PagerAction::Next).reduce(PagerAction::Next);
        assert_eq!(stale.pager.current_page(), 2);

        let months = vec!["March", "February", "January"];
        let pager = fitted(stale.pager, months.len(), 4);
        assert_eq!(pager.current_page(), 0);
        for page in 0..pager.page_count() {
            let range = pager.page_range(page);
            assert!(range.end <= months.len());
            assert_eq!(months[range].len(), 3);
        }

        let repaged = fitted(stale.pager, months.len(), 2);
        assert_eq!(repaged.page_count(), 2);
        assert_eq!(repaged.current_page(), 1);
        assert!(repaged.current_range().end <= months.len());
    }

    #[wasm_bindgen_test]
    fn test_reduce_reset_keeps_valid_page() {
        let on_last = state(12, 4).reduce(PagerAction::SyncToScroll {
            scroll_left: 600.0,
            viewport_width: 300.0,
        });

        let shrunk = on_last.reduce(PagerAction::Reset { item_count: 6, page_size: 4 });
        assert_eq!(shrunk.pager.current_page(), 1);

        let repaged = shrunk.reduce(PagerAction::Reset { item_count: 6, page_size: 2 });
        assert_eq!(repaged.pager.page_count(), 3);
        assert_eq!(repaged.pager.current_page(), 1);
    }
}
