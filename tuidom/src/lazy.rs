//! Item-granular virtualization for long columns.
//!
//! A [`LazyColumn`] only materializes the items that fit its viewport (plus a
//! few overscan items). Which items those are is tracked by a caller-owned
//! [`LazyListState`], which survives across frames and queues scroll requests
//! until the next build.

use std::ops::Range;

use crate::element::Element;
use crate::layout::{measure, LayoutResult};
use crate::types::{Overflow, Size};

/// Viewport assumed before the first layout pass reports a real one.
const FALLBACK_VIEWPORT: u16 = 200;

/// Actions that can be requested on a [`LazyListState`].
///
/// These are consumed on the next [`LazyColumn::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Move the first visible item by this many items (positive = down).
    Delta(i32),
    /// Scroll the least amount needed to show the item at this index.
    IntoView(usize),
    PageUp,
    PageDown,
    Home,
    End,
}

/// Scroll position of a lazy column, in items.
#[derive(Debug, Clone)]
pub struct LazyListState {
    first: usize,
    viewport: u16,
    gap: u16,
    estimate: u16,
    heights: Vec<Option<u16>>,
    rendered: Range<usize>,
    request: Option<ScrollRequest>,
}

impl Default for LazyListState {
    fn default() -> Self {
        Self {
            first: 0,
            viewport: 0,
            gap: 0,
            estimate: 1,
            heights: Vec::new(),
            rendered: 0..0,
            request: None,
        }
    }
}

impl LazyListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height assumed for items that have not been measured yet.
    pub fn with_estimate(mut self, rows: u16) -> Self {
        self.estimate = rows.max(1);
        self
    }

    /// Index of the first materialized item.
    pub fn first_visible(&self) -> usize {
        self.first
    }

    /// Items materialized by the last build.
    pub fn rendered_range(&self) -> Range<usize> {
        self.rendered.clone()
    }

    /// Item count seen by the last build.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    /// Record the visible height. Returns true if it changed, in which case the
    /// caller should rebuild so the right number of items is materialized.
    pub fn set_viewport(&mut self, rows: u16) -> bool {
        if self.viewport == rows {
            return false;
        }
        log::debug!("lazy viewport {} -> {rows}", self.viewport);
        self.viewport = rows;
        true
    }

    /// Read the viewport of the column `id` from a finished layout pass.
    pub fn sync_viewport(&mut self, layout: &LayoutResult, id: &str) -> bool {
        match layout.get(id) {
            Some(rect) => self.set_viewport(rect.height),
            None => false,
        }
    }

    pub fn scroll_by(&mut self, items: i32) {
        self.request = Some(ScrollRequest::Delta(items));
    }

    pub fn scroll_to_item(&mut self, index: usize) {
        self.request = Some(ScrollRequest::IntoView(index));
    }

    pub fn page_up(&mut self) {
        self.request = Some(ScrollRequest::PageUp);
    }

    pub fn page_down(&mut self) {
        self.request = Some(ScrollRequest::PageDown);
    }

    pub fn home(&mut self) {
        self.request = Some(ScrollRequest::Home);
    }

    pub fn end(&mut self) {
        self.request = Some(ScrollRequest::End);
    }

    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }

    /// Measured height of an item, or the estimate if it was never built.
    pub fn item_height(&self, index: usize) -> u16 {
        self.heights
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.estimate)
    }

    fn effective_viewport(&self) -> u16 {
        if self.viewport == 0 {
            FALLBACK_VIEWPORT
        } else {
            self.viewport
        }
    }

    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn height_with(&mut self, index: usize, measure: &mut dyn FnMut(usize) -> u16) -> u16 {
        if let Some(height) = self.heights[index] {
            return height;
        }
        let height = measure(index);
        self.heights[index] = Some(height);
        height
    }

    /// Number of items starting at `start` that fully fit the viewport, at least one.
    fn fitting_from(&mut self, start: usize, measure: &mut dyn FnMut(usize) -> u16) -> usize {
        let viewport = self.effective_viewport() as u32;
        let mut content = 0u32;
        let mut count = 0;
        for index in start..self.len() {
            if count > 0 {
                content += self.gap as u32;
            }
            content += self.height_with(index, measure) as u32;
            if count > 0 && content > viewport {
                break;
            }
            count += 1;
        }
        count.max(1)
    }

    /// Smallest first index that still shows `end` in full at the bottom.
    fn first_ending_at(&mut self, end: usize, measure: &mut dyn FnMut(usize) -> u16) -> usize {
        let viewport = self.effective_viewport() as u32;
        let mut content = self.height_with(end, measure) as u32;
        let mut first = end;
        while first > 0 {
            let next = content + self.gap as u32 + self.height_with(first - 1, measure) as u32;
            if next > viewport {
                break;
            }
            content = next;
            first -= 1;
        }
        first
    }

    fn set_len(&mut self, len: usize) {
        if len != self.heights.len() {
            self.heights.resize(len, None);
        }
        self.first = self.first.min(self.last_index());
    }

    fn process_request(&mut self, measure: &mut dyn FnMut(usize) -> u16) {
        let Some(request) = self.request.take() else {
            return;
        };
        if self.is_empty() {
            self.first = 0;
            return;
        }
        let last = self.last_index();
        self.first = match request {
            ScrollRequest::Delta(delta) => {
                (self.first as i64 + delta as i64).clamp(0, last as i64) as usize
            }
            ScrollRequest::IntoView(index) => {
                let index = index.min(last);
                if index < self.first {
                    index
                } else if index >= self.first + self.fitting_from(self.first, measure) {
                    self.first_ending_at(index, measure)
                } else {
                    self.first
                }
            }
            ScrollRequest::PageDown => (self.first + self.fitting_from(self.first, measure)).min(last),
            ScrollRequest::PageUp => match self.first {
                0 => 0,
                first => self.first_ending_at(first - 1, measure),
            },
            ScrollRequest::Home => 0,
            ScrollRequest::End => last,
        };
        log::trace!("lazy scroll {request:?} -> first item {}", self.first);
    }
}

/// Builder for a virtualized column.
///
/// ```ignore
/// let column = LazyColumn::new("coins")
///     .gap(2)
///     .build(coins.len(), &mut state, |i| coin_row(&coins[i]));
/// ```
#[derive(Debug, Clone)]
pub struct LazyColumn {
    id: String,
    gap: u16,
    overscan: usize,
}

impl LazyColumn {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gap: 0,
            overscan: 1,
        }
    }

    /// Rows between consecutive items.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Extra items materialized past the bottom of the viewport.
    pub fn overscan(mut self, items: usize) -> Self {
        self.overscan = items;
        self
    }

    /// Materialize the visible window of `count` items, calling `item` for
    /// each materialized index.
    ///
    /// When the items after the first visible one run out before the viewport
    /// is full, earlier items are pulled in so the column never ends on a blank
    /// tail while there is more above.
    pub fn build<F>(self, count: usize, state: &mut LazyListState, mut item: F) -> Element
    where
        F: FnMut(usize) -> Element,
    {
        state.gap = self.gap;
        state.set_len(count);
        state.process_request(&mut |index| measure(&item(index)).1);

        let viewport = state.effective_viewport() as u32;
        let gap = self.gap as u32;
        let mut start = state.first;
        let mut children = Vec::new();
        let mut content = 0u32;
        let mut extra = 0usize;
        let mut index = start;

        while index < count {
            let next_start = if children.is_empty() { 0 } else { content + gap };
            if next_start >= viewport {
                if extra == self.overscan {
                    break;
                }
                extra += 1;
            }
            let element = item(index);
            let (_, height) = measure(&element);
            state.heights[index] = Some(height);
            content = next_start + height as u32;
            children.push(element);
            index += 1;
        }

        if index == count {
            let mut before = Vec::new();
            while start > 0 {
                let element = item(start - 1);
                let (_, height) = measure(&element);
                state.heights[start - 1] = Some(height);
                let grown = content + gap + height as u32;
                if grown > viewport {
                    break;
                }
                content = grown;
                start -= 1;
                before.push(element);
            }
            if !before.is_empty() {
                before.reverse();
                before.append(&mut children);
                children = before;
            }
        }

        state.first = start;
        state.rendered = start..index;
        log::debug!(
            "lazy column '{}' materialized items {}..{} of {count}",
            self.id,
            start,
            index
        );

        Element::col()
            .id(self.id)
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(self.gap)
            .overflow_y(Overflow::Hidden)
            .scrollable(true)
            .children(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(state: &mut LazyListState, count: usize) -> Element {
        LazyColumn::new("lazy")
            .overscan(0)
            .build(count, state, |i| Element::text(format!("item {i}")))
    }

    #[test]
    fn fallback_viewport_before_first_layout() {
        let mut state = LazyListState::new();
        let column = rows(&mut state, 1000);
        assert_eq!(column.child_elements().len(), FALLBACK_VIEWPORT as usize);
    }

    #[test]
    fn page_down_moves_by_visible_items() {
        let mut state = LazyListState::new();
        state.set_viewport(10);
        rows(&mut state, 100);

        state.page_down();
        rows(&mut state, 100);
        assert_eq!(state.first_visible(), 10);

        state.page_up();
        rows(&mut state, 100);
        assert_eq!(state.first_visible(), 0);
    }

    #[test]
    fn end_keeps_last_page_full() {
        let mut state = LazyListState::new();
        state.set_viewport(10);
        rows(&mut state, 100);

        state.end();
        rows(&mut state, 100);
        assert_eq!(state.first_visible(), 90);
        assert_eq!(state.rendered_range(), 90..100);
    }

    #[test]
    fn shrinking_item_count_clamps_position() {
        let mut state = LazyListState::new();
        state.set_viewport(5);
        rows(&mut state, 50);
        state.end();
        rows(&mut state, 50);

        rows(&mut state, 3);
        assert_eq!(state.first_visible(), 0);
        assert_eq!(state.rendered_range(), 0..3);
    }
}
