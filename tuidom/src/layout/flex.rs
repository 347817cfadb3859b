use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Size};

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    log::trace!("layout pass placed {} elements", result.len());
    result
}

/// Natural (width, height) of an element before any parent constraints.
pub fn measure(element: &Element) -> (u16, u16) {
    (estimate_size(element, true), estimate_size(element, false))
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    // Apply margin - shrink available space and offset position
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.child_elements();

    let border_size = element.style.border.size();
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // Scrolling along the main axis: children keep their natural size and
    // the whole run is shifted by the (clamped) scroll offset.
    let scroll_main = if is_row {
        element.overflow_x.scrolls()
    } else {
        element.overflow_y.scrolls()
    };

    let gap_total = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);

    // First pass: fixed sizes and flex weights
    let mut fixed_total = 0u16;
    let mut flex_weight = 0u16;

    for child in children {
        let margin_main = main_margin(child, is_row);
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n + margin_main),
            Size::Auto => {
                fixed_total =
                    fixed_total.saturating_add(estimate_size(child, is_row) + margin_main)
            }
            Size::Fill | Size::Flex(_) if scroll_main => {
                fixed_total =
                    fixed_total.saturating_add(estimate_size(child, is_row) + margin_main)
            }
            Size::Fill => flex_weight += 1,
            Size::Flex(w) => flex_weight += w.max(1),
            Size::Percent(p) => {
                fixed_total =
                    fixed_total.saturating_add((main_size as f32 * p) as u16 + margin_main)
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));

    // Child main sizes (main, margin_before, margin_after)
    let mut child_sizes: Vec<(u16, u16, u16)> = Vec::with_capacity(children.len());
    let mut total_child_size = 0u16;

    for child in children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };

        let main = match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill | Size::Flex(_) if scroll_main => estimate_size(child, is_row),
            Size::Fill => share(remaining, 1, flex_weight),
            Size::Flex(w) => share(remaining, w.max(1), flex_weight),
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };

        let (min_main, max_main) = if is_row {
            (child.min_width, child.max_width)
        } else {
            (child.min_height, child.max_height)
        };
        let main = min_main.map_or(main, |m| main.max(m));
        let main = max_main.map_or(main, |m| main.min(m));

        child_sizes.push((main, margin_before, margin_after));
        total_child_size = total_child_size
            .saturating_add(main)
            .saturating_add(margin_before)
            .saturating_add(margin_after);
    }

    let total_with_gaps = total_child_size.saturating_add(gap_total);

    if element.is_scroll_container() {
        let content = if is_row {
            (total_with_gaps, cross_size)
        } else {
            (cross_size, total_with_gaps)
        };
        result.record_scroll(&element.id, content, (inner.width, inner.height));
    }

    if children.is_empty() {
        return;
    }

    let extra_space = main_size.saturating_sub(total_with_gaps);
    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra_space / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
        Justify::SpaceAround => {
            let spacing = extra_space / children.len() as u16;
            (spacing / 2, spacing + element.gap)
        }
    };

    let scroll = if scroll_main {
        let requested = if is_row {
            element.scroll_offset.0
        } else {
            element.scroll_offset.1
        };
        requested.min(total_with_gaps.saturating_sub(main_size))
    } else {
        0
    };

    // Second pass: assign rects
    let mut offset = start_offset as i32 - scroll as i32;

    for (child, &(main, margin_before, margin_after)) in children.iter().zip(&child_sizes) {
        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_align = child.align_self.unwrap_or(element.align);
        let available_cross = cross_size.saturating_sub(cross_margin_before + cross_margin_after);

        let child_cross_size = if is_row { child.height } else { child.width };
        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => available_cross,
            Size::Auto => {
                if child_align == Align::Stretch {
                    available_cross
                } else {
                    estimate_size(child, !is_row).min(available_cross)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };

        let (min_cross, max_cross) = if is_row {
            (child.min_height, child.max_height)
        } else {
            (child.min_width, child.max_width)
        };
        let cross = min_cross.map_or(cross, |m| cross.max(m));
        let cross = max_cross.map_or(cross, |m| cross.min(m));

        let clamped_main = if scroll_main {
            main
        } else {
            let room = main_size as i32 - (offset + margin_before as i32);
            main.min(room.max(0) as u16)
        };
        let clamped_cross = cross.min(available_cross);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_margin_before,
            Align::Center => {
                cross_margin_before + available_cross.saturating_sub(clamped_cross) / 2
            }
            Align::End => cross_margin_before + available_cross.saturating_sub(clamped_cross),
        };

        let main_pos = offset + margin_before as i32;
        let child_rect = if is_row {
            Rect::new(
                inner.x + main_pos,
                inner.y + cross_offset as i32,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset as i32,
                inner.y + main_pos,
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += (margin_before + main + margin_after) as i32 + between_gap as i32;
    }
}

fn share(remaining: u16, weight: u16, total: u16) -> u16 {
    if total == 0 {
        return 0;
    }
    (remaining as u32 * weight as u32 / total as u32) as u16
}

fn main_axis_size(child: &Element, is_row: bool) -> Size {
    if is_row {
        child.width
    } else {
        child.height
    }
}

fn main_margin(child: &Element, is_row: bool) -> u16 {
    if is_row {
        child.margin.horizontal_total()
    } else {
        child.margin.vertical_total()
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width).min(available),
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };

    let with_min = min.map_or(base, |m| base.max(m));
    let with_max = max.map_or(with_min, |m| with_min.min(m));

    with_max.min(available)
}

/// Natural size along one axis: fixed sizes win, otherwise content plus padding and border.
pub fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let own = if is_width {
        element.width
    } else {
        element.height
    };

    let base = match own {
        Size::Fixed(n) => n,
        _ => content_size(element, is_width),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };
    let base = min.map_or(base, |m| base.max(m));
    max.map_or(base, |m| base.min(m))
}

fn content_size(element: &Element, is_width: bool) -> u16 {
    let border_size = element.style.border.size() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Rule(_) => {
            if is_width {
                0
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| outer_estimate(c, is_width))
                    .fold(0u16, u16::saturating_add)
                    .saturating_add(gap_total)
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| outer_estimate(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content.saturating_add(padding).saturating_add(border_size)
}

fn outer_estimate(element: &Element, is_width: bool) -> u16 {
    let margin = if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    };
    estimate_size(element, is_width).saturating_add(margin)
}
