use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    find_clickable(layout, root, x, y).map(|element| element.id.clone())
}

/// Find the deepest element at the given coordinates, clickable or not.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x as i32, y as i32, &|_| true).map(|element| element.id.clone())
}

/// The deepest clickable element under the point. Later siblings win where
/// rects overlap, matching paint order.
pub fn find_clickable<'a>(
    layout: &LayoutResult,
    root: &'a Element,
    x: u16,
    y: u16,
) -> Option<&'a Element> {
    deepest(layout, root, x as i32, y as i32, &|element| element.clickable)
}

/// Invoke the click handlers along the hit path, innermost first.
///
/// The deepest clickable element under the point runs its handler, then the
/// click bubbles through every clickable ancestor, each handler running once.
/// Returns `true` when at least one handler ran.
pub fn dispatch_click(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> bool {
    let mut path = Vec::new();
    if !clickable_path(layout, root, x as i32, y as i32, &mut path) {
        return false;
    }

    let mut handled = false;
    for element in path.iter().rev().filter(|element| element.clickable) {
        match &element.on_click {
            Some(handler) => {
                log::debug!("click at ({x}, {y}) dispatched to '{}'", element.id);
                handler.call();
                handled = true;
            }
            None => log::trace!("'{}' is clickable but has no handler", element.id),
        }
    }
    handled
}

/// Push the elements from `element` down to the deepest clickable one under
/// the point. Leaves `path` untouched and returns false when there is none.
fn clickable_path<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: i32,
    y: i32,
    path: &mut Vec<&'a Element>,
) -> bool {
    match layout.get(&element.id) {
        Some(rect) if rect.contains(x, y) => {}
        _ => return false,
    }

    path.push(element);
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if clickable_path(layout, child, x, y, path) {
                return true;
            }
        }
    }
    if element.clickable {
        return true;
    }
    path.pop();
    false
}

fn deepest<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: i32,
    y: i32,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<&'a Element> {
    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(found) = deepest(layout, child, x, y, accept) {
                return Some(found);
            }
        }
    }

    accept(element).then_some(element)
}
