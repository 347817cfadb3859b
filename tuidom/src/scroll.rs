use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::event::Event;
use crate::layout::LayoutResult;

/// Scroll offset for a scrollable element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Scroll offsets of scroll containers, kept by the application across frames.
///
/// Offsets are clamped against the content and viewport extents recorded by the
/// most recent layout pass.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: &str, x: u16, y: u16) {
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Scroll `id` by a delta, clamped to what its content allows.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, id: &str, dx: i32, dy: i32, layout: &LayoutResult) -> bool {
        let (Some((content_w, content_h)), Some((view_w, view_h))) =
            (layout.content_size(id), layout.viewport_size(id))
        else {
            return false;
        };

        let current = self.get(id);
        let max_x = content_w.saturating_sub(view_w) as i32;
        let max_y = content_h.saturating_sub(view_h) as i32;
        let next = ScrollOffset::new(
            (current.x as i32 + dx).clamp(0, max_x) as u16,
            (current.y as i32 + dy).clamp(0, max_y) as u16,
        );

        if next == current {
            return false;
        }
        log::trace!("scroll '{id}' to ({}, {})", next.x, next.y);
        self.offsets.insert(id.to_string(), next);
        true
    }

    /// Visible rows of a scroll container, for page-sized steps.
    pub fn viewport_height(&self, id: &str, layout: &LayoutResult) -> u16 {
        layout.viewport_size(id).map_or(0, |(_, h)| h)
    }

    /// Re-clamp stored offsets after a layout pass.
    ///
    /// Containers missing from `layout` keep their offset, so a screen that is
    /// swapped out and back in resumes where it was.
    pub fn clamp_all(&mut self, layout: &LayoutResult) {
        for (id, offset) in self.offsets.iter_mut() {
            let (Some((content_w, content_h)), Some((view_w, view_h))) =
                (layout.content_size(id), layout.viewport_size(id))
            else {
                continue;
            };
            offset.x = offset.x.min(content_w.saturating_sub(view_w));
            offset.y = offset.y.min(content_h.saturating_sub(view_h));
        }
    }

    /// Apply wheel events to the scroll containers they target.
    /// Returns the events that moved something.
    pub fn process_events(&mut self, events: &[Event], layout: &LayoutResult) -> Vec<Event> {
        let mut consumed = Vec::new();

        for event in events {
            if let Event::Scroll {
                target: Some(target),
                delta_x,
                delta_y,
                ..
            } = event
            {
                if self.scroll_by(target, *delta_x as i32, *delta_y as i32, layout) {
                    consumed.push(event.clone());
                }
            }
        }

        consumed
    }
}

/// Find the innermost scrollable element at the given coordinates.
pub fn find_scrollable_at(root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<String> {
    find_scrollable_recursive(root, layout, x as i32, y as i32)
}

fn is_scrollable(element: &Element) -> bool {
    element.scrollable || element.is_scroll_container()
}

fn find_scrollable_recursive(
    element: &Element,
    layout: &LayoutResult,
    x: i32,
    y: i32,
) -> Option<String> {
    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = find_scrollable_recursive(child, layout, x, y) {
                return Some(id);
            }
        }
    }

    is_scrollable(element).then(|| element.id.clone())
}
