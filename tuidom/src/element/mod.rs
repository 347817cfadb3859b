mod content;
mod node;

pub use content::Content;
pub use node::{ClickHandler, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Visit every element in the tree in document order.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    if let Content::Children(children) = &root.content {
        for child in children {
            walk(child, visit);
        }
    }
}
