use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Content;
use crate::types::{
    Align, Color, Direction, Edges, Justify, Overflow, Size, Style, TextAlign, TextWrap,
};

/// `name(value)` builder methods that overwrite a field.
macro_rules! setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $field(mut self, $field: $ty) -> Self {
                self.$field = $field;
                self
            }
        )*
    };
}

/// Builder methods for constraints that are unset by default.
macro_rules! optional_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $field(mut self, $field: $ty) -> Self {
                self.$field = Some($field);
                self
            }
        )*
    };
}

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tap handler attached to an element.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn() + Send + Sync>);

impl ClickHandler {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    // Flex item
    pub align_self: Option<Align>,

    // Overflow (separate X/Y for independent control)
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll_offset: (u16, u16),

    // Visual
    pub style: Style,

    // Text-specific
    pub text_wrap: TextWrap,
    pub text_align: TextAlign,

    // Interaction
    pub clickable: bool,
    /// Receives wheel and keyboard scroll events without being a scroll container.
    /// Virtualized lists use this and scroll by rebuilding instead.
    pub scrollable: bool,
    pub on_click: Option<ClickHandler>,

    // Custom data storage (roles, keys, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            align_self: None,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll_offset: (0, 0),
            style: Style::default(),
            text_wrap: TextWrap::NoWrap,
            text_align: TextAlign::Left,
            clickable: false,
            scrollable: false,
            on_click: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Thin horizontal rule spanning the available width.
    pub fn divider() -> Self {
        Self {
            id: generate_id("divider"),
            content: Content::Rule('─'),
            width: Size::Fill,
            height: Size::Fixed(1),
            style: Style::new().foreground(Color::var("divider")),
            ..Default::default()
        }
    }

    /// Empty block occupying `rows` rows in a column.
    pub fn spacer(rows: u16) -> Self {
        Self {
            id: generate_id("spacer"),
            width: Size::Fixed(0),
            height: Size::Fixed(rows),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    setters! {
        width: Size,
        height: Size,
        padding: Edges,
        margin: Edges,
        gap: u16,
        justify: Justify,
        align: Align,
        overflow_x: Overflow,
        overflow_y: Overflow,
        style: Style,
        text_wrap: TextWrap,
        text_align: TextAlign,
        clickable: bool,
        scrollable: bool,
    }

    optional_setters! {
        min_width: u16,
        max_width: u16,
        min_height: u16,
        max_height: u16,
        align_self: Align,
    }

    pub fn scroll_offset(mut self, x: u16, y: u16) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    /// Attach a tap handler covering the whole element and make it clickable.
    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(handler));
        self.clickable = true;
        self
    }

    /// Attach an already shared handler, or leave the element non-interactive on `None`.
    pub fn on_click_opt(mut self, handler: Option<ClickHandler>) -> Self {
        if let Some(handler) = handler {
            self.on_click = Some(handler);
            self.clickable = true;
        }
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, or an empty slice for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Scroll container on either axis.
    pub fn is_scroll_container(&self) -> bool {
        self.overflow_x.scrolls() || self.overflow_y.scrolls()
    }
}
