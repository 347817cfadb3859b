use std::fmt;
use std::sync::Arc;

use tuidom::{
    walk, Align, Color, Dp, Edges, Element, LazyColumn, LazyListState, Size, Style, TextStyle,
};

use crate::list::KList;

/// Gap between the children of the list column and between lazy items.
pub const ITEM_GAP: Dp = Dp(8.0);

/// Extra space below the header.
pub const HEADER_SPACING: Dp = Dp(16.0);

/// Space above and below each divider.
pub const DIVIDER_PADDING: Dp = Dp(4.0);

/// Data key carrying the [`Role`] of every element the list emits.
pub const ROLE_KEY: &str = "klist.role";

/// Data key carrying the item index on item wrappers.
pub const INDEX_KEY: &str = "klist.index";

/// What a tagged element is within a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    List,
    Header,
    Item,
    Divider,
    Spacer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::List => "list",
            Role::Header => "header",
            Role::Item => "item",
            Role::Divider => "divider",
            Role::Spacer => "spacer",
        }
    }

    /// Role tag of an element, if it has one.
    pub fn of(element: &Element) -> Option<Role> {
        match element.get_data(ROLE_KEY)?.as_str() {
            "list" => Some(Role::List),
            "header" => Some(Role::Header),
            "item" => Some(Role::Item),
            "divider" => Some(Role::Divider),
            "spacer" => Some(Role::Spacer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles of all tagged elements below `root` in document order, list containers excluded.
pub fn roles(root: &Element) -> Vec<Role> {
    let mut found = Vec::new();
    walk(root, &mut |element| {
        if let Some(role) = Role::of(element) {
            if role != Role::List {
                found.push(role);
            }
        }
    });
    found
}

fn tag(element: Element, role: Role) -> Element {
    element.data(ROLE_KEY, role.as_str())
}

impl<T: Send + Sync + 'static> KList<T> {
    /// Render every item eagerly into a plain column.
    ///
    /// The column has no scrolling of its own; put it inside a scroll container,
    /// possibly next to other lists.
    pub fn render(&self) -> Element {
        let root = Element::col();
        let id = self.id.clone().unwrap_or_else(|| root.id.clone());

        let mut root = tag(self.frame(root.id(id.clone())), Role::List);
        if let Some(header) = self.header_element(&id) {
            root = root.child(header);
        }

        let Some(renderer) = &self.renderer else {
            log::trace!("list '{id}' has no renderer, skipping {} items", self.items.len());
            return root;
        };

        let count = self.items.len();
        log::debug!("rendering list '{id}' eagerly: {count} items");
        for (index, value) in self.items.iter().enumerate() {
            root = root.child(self.item_element(&id, index, renderer(value)));
            if index + 1 == count {
                continue;
            }
            if self.dividers {
                root = root.child(divider(&id, index));
            }
            root = root.child(tag(
                Element::spacer(ITEM_GAP.rows()).id(format!("{id}-spacer-{index}")),
                Role::Spacer,
            ));
        }
        root
    }

    /// Render through a lazy column so only visible items are built.
    ///
    /// The returned column fills its parent and must not be nested in another
    /// scroll container. `state` keeps the scroll position between frames;
    /// feed it the column's laid-out height with [`LazyListState::sync_viewport`].
    pub fn render_virtualized(&self, state: &mut LazyListState) -> Element {
        let root = Element::col();
        let id = self.id.clone().unwrap_or_else(|| root.id.clone());

        let mut root = tag(
            self.frame(root.id(id.clone())).height(Size::Fill).gap(0),
            Role::List,
        );
        if let Some(header) = self.header_element(&id) {
            root = root.child(header);
        }

        let Some(renderer) = &self.renderer else {
            return root;
        };
        if self.items.is_empty() {
            return root;
        }

        let count = self.items.len();
        let column = LazyColumn::new(format!("{id}-items"))
            .gap(ITEM_GAP.rows())
            .build(count, state, |index| {
                let mut slot = Element::col()
                    .id(format!("{id}-slot-{index}"))
                    .width(Size::Fill)
                    .align(Align::Stretch)
                    .child(self.item_element(&id, index, renderer(&self.items[index])));
                if self.dividers && index + 1 != count {
                    slot = slot.child(divider(&id, index));
                }
                slot
            });
        log::debug!(
            "rendering list '{id}' lazily: items {:?} of {count}",
            state.rendered_range()
        );
        root.child(column)
    }

    fn frame(&self, root: Element) -> Element {
        root.width(Size::Fill)
            .padding(Edges::dp(self.padding))
            .gap(ITEM_GAP.rows())
            .align(Align::Stretch)
    }

    fn header_element(&self, id: &str) -> Option<Element> {
        let title = self.header.as_deref()?;
        Some(tag(
            Element::text(title)
                .id(format!("{id}-header"))
                .margin(Edges::bottom(HEADER_SPACING.rows()))
                .style(
                    Style::new()
                        .foreground(Color::var("primary"))
                        .text_style(TextStyle::new().bold()),
                ),
            Role::Header,
        ))
    }

    /// Wrap a rendered item; the wrapper is clickable only when a handler is set.
    fn item_element(&self, id: &str, index: usize, content: Element) -> Element {
        let wrapper = tag(
            Element::col()
                .id(format!("{id}-item-{index}"))
                .width(Size::Fill)
                .align(Align::Stretch)
                .data(INDEX_KEY, index.to_string())
                .child(content),
            Role::Item,
        );

        match &self.on_click {
            Some(handler) => {
                let handler = Arc::clone(handler);
                let items = Arc::clone(&self.items);
                wrapper.on_click(move || handler(&items[index]))
            }
            None => wrapper,
        }
    }
}

fn divider(id: &str, index: usize) -> Element {
    tag(
        Element::divider()
            .id(format!("{id}-divider-{index}"))
            .margin(Edges::vertical(DIVIDER_PADDING.rows())),
        Role::Divider,
    )
}
