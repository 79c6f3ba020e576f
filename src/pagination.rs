//! This modules defines the common functionality for paging data.
//!
//! A [Paginator] holds a copy of some items and shows a window of them whose
//! size follows the viewport width. It either moves through the items page by
//! page, or rotates them like a carousel.

use serde::{Deserialize, Serialize};

/// How [Paginator::next_page] and [Paginator::previous_page] move through items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationMethod {
    /// Move through discrete pages.
    #[default]
    #[serde(rename = "default")]
    Paged,
    /// Rotate the items by one and always show the same window.
    #[serde(rename = "movableItems")]
    MovableItems,
}

/// The part of a resize event the paginator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// The resized window.
    pub view: Viewport,
}

/// The window that was resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// The width of the viewport in pixels.
    pub inner_width: u32,
}

/// Breakpoints, in pixels, of the items-per-page table.
const SMALL_BREAKPOINT: u32 = 1024;
const MEDIUM_BREAKPOINT: u32 = 1400;
const LARGE_BREAKPOINT: u32 = 1600;
const EXTRA_LARGE_BREAKPOINT: u32 = 2100;

/// Items per page between the medium and large breakpoints.
const BETWEEN_MEDIUM_AND_LARGE_ITEMS_PER_PAGE: usize = 3;

/// The default items per page between the large and extra large breakpoints.
pub const DEFAULT_LARGE_BREAKPOINT_ITEMS_PER_PAGE: usize = 3;

/// A window over a list of items whose size follows the viewport width.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Option<Vec<T>>,
    items_per_page: usize,
    current_page: usize,
    total_pages: usize,
    method: PaginationMethod,
    large_breakpoint_items_per_page: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(PaginationMethod::default())
    }
}

impl<T> Paginator<T> {
    /// Create a paginator with no items. Every accessor is safe to call
    /// before items arrive.
    pub fn new(method: PaginationMethod) -> Self {
        Self {
            items: None,
            items_per_page: 1,
            current_page: 1,
            total_pages: 0,
            method,
            large_breakpoint_items_per_page: DEFAULT_LARGE_BREAKPOINT_ITEMS_PER_PAGE,
        }
    }

    /// Set the items per page used between 1600 and 2100 pixels.
    pub fn with_large_breakpoint_items_per_page(mut self, items_per_page: usize) -> Self {
        self.large_breakpoint_items_per_page = items_per_page;
        self
    }

    /// How the paginator moves through items.
    pub fn method(&self) -> PaginationMethod {
        self.method
    }

    /// The window size chosen for the last viewport width.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The number of pages, zero when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// All items, in their current (possibly rotated) order.
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    /// Jump to `page`. Out of range pages, including 0, are accepted and
    /// corrected by the next call to [Paginator::update_pages_count].
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Choose the items per page for a viewport `width` pixels wide.
    ///
    /// | width            | items per page                     |
    /// |------------------|------------------------------------|
    /// | < 1024           | 1                                  |
    /// | 1024 ..= 1400    | `medium_count`                     |
    /// | 1401 .. 1600     | 3                                  |
    /// | 1600 .. 2100     | `large_breakpoint_items_per_page`  |
    /// | >= 2100          | `max_count`                        |
    pub fn update_items_per_page(&mut self, width: u32, medium_count: usize, max_count: usize) {
        self.items_per_page = if width < SMALL_BREAKPOINT {
            1
        } else if width <= MEDIUM_BREAKPOINT {
            medium_count
        } else if width < LARGE_BREAKPOINT {
            BETWEEN_MEDIUM_AND_LARGE_ITEMS_PER_PAGE
        } else if width < EXTRA_LARGE_BREAKPOINT {
            self.large_breakpoint_items_per_page
        } else {
            max_count
        };
    }

    /// Recount the pages. If the current page no longer exists, go back to
    /// the first page.
    pub fn update_pages_count(&mut self) {
        let len = self.items.as_ref().map_or(0, Vec::len);

        self.total_pages = if self.items_per_page == 0 {
            0
        } else {
            len.div_ceil(self.items_per_page)
        };

        if self.current_page == 0 || self.current_page > self.total_pages {
            self.current_page = 1;
        }
    }

    /// Resize the pages for a new viewport width.
    pub fn handle_width_change(&mut self, width: u32, medium_count: usize, max_count: usize) {
        self.update_items_per_page(width, medium_count, max_count);
        self.update_pages_count();
        tracing::debug!(
            "width {width}px: {} items per page, page {} of {}",
            self.items_per_page,
            self.current_page,
            self.total_pages
        );
    }

    /// Resize the pages for a window resize event.
    pub fn on_resize(&mut self, event: &ResizeEvent, medium_count: usize, max_count: usize) {
        self.handle_width_change(event.view.inner_width, medium_count, max_count);
    }

    /// Go back a page, or rotate the last item to the front in carousel mode.
    pub fn previous_page(&mut self) {
        match self.method {
            PaginationMethod::Paged => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                }
            }
            PaginationMethod::MovableItems => {
                if let Some(items) = self.items.as_mut().filter(|items| items.len() > 1) {
                    items.rotate_right(1);
                }
            }
        }
    }

    /// Go forward a page, or rotate the first item to the back in carousel mode.
    pub fn next_page(&mut self) {
        match self.method {
            PaginationMethod::Paged => {
                if self.current_page < self.total_pages {
                    self.current_page += 1;
                }
            }
            PaginationMethod::MovableItems => {
                if let Some(items) = self.items.as_mut().filter(|items| items.len() > 1) {
                    items.rotate_left(1);
                }
            }
        }
    }

    /// The items on the current page, or `None` before any items are set.
    pub fn paginated_items(&self) -> Option<&[T]> {
        let items = self.items.as_deref()?;
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .min(items.len());
        let end = start.saturating_add(self.items_per_page).min(items.len());

        Some(&items[start..end])
    }

    /// The item in the centre of the carousel window.
    ///
    /// This is the second item of the current page, or the first item when the
    /// page holds a single item. Returns `None` for an empty or unset list.
    pub fn current_item(&self) -> Option<&T> {
        let window = self.paginated_items()?;

        window.get(1).or_else(|| window.first())
    }

    /// The page links to show for the paged discipline.
    pub fn indicators(&self, max_pages: usize) -> Vec<PaginationIndicator> {
        create_pagination_indicators(self.current_page, self.total_pages, max_pages)
    }
}

impl<T: Clone> Paginator<T> {
    /// Store a copy of `items` and recount the pages.
    ///
    /// The current page is kept unless it no longer exists.
    pub fn set_paginated_array(&mut self, items: &[T]) {
        self.items = Some(items.to_vec());
        self.update_pages_count();
    }
}

/// An element of the page number strip under a paged list.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(usize),
    /// The current page.
    CurrPage(usize),
    /// Skipped page numbers.
    Ellipsis,
    /// A link to the next page.
    NextButton(usize),
    /// A link to the previous page.
    BackButton(usize),
}

/// Build the page number strip, showing at most `max_pages` page numbers
/// around the current page plus the first and last page.
pub fn create_pagination_indicators(
    curr_page: usize,
    page_count: usize,
    max_pages: usize,
) -> Vec<PaginationIndicator> {
    if page_count == 0 || max_pages == 0 {
        return Vec::new();
    }

    let curr_page = curr_page.clamp(1, page_count);
    let half = max_pages / 2;
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let visible = if page_count <= max_pages {
        1..=page_count
    } else if curr_page <= half {
        1..=max_pages
    } else if curr_page > page_count - half {
        (page_count - max_pages + 1)..=page_count
    } else {
        (curr_page - half)..=(curr_page + half).min(page_count)
    };
    let first_visible = *visible.start();
    let last_visible = *visible.end();

    let mut indicators = Vec::new();

    if curr_page > 1 {
        indicators.push(PaginationIndicator::BackButton(curr_page - 1));
    }

    if first_visible > 1 {
        indicators.push(PaginationIndicator::Page(1));
        if first_visible > 2 {
            indicators.push(PaginationIndicator::Ellipsis);
        }
    }

    indicators.extend(visible.map(map_page));

    if last_visible < page_count {
        if last_visible < page_count - 1 {
            indicators.push(PaginationIndicator::Ellipsis);
        }
        indicators.push(PaginationIndicator::Page(page_count));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
