//! A small retained-mode terminal UI toolkit: build an [`Element`] tree, lay it
//! out into [`Rect`]s, paint it into a [`Buffer`] and route input back to the
//! elements under the pointer.

pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod lazy;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, walk, ClickHandler, Content, Element};
pub use event::{translate, Event, Key, Modifiers, MouseButton, SCROLL_STEP};
pub use hit::{dispatch_click, find_clickable, hit_test, hit_test_any};
pub use layout::{layout, measure, LayoutResult, Rect};
pub use lazy::{LazyColumn, LazyListState, ScrollRequest};
pub use render::render_to_buffer;
pub use scroll::{find_scrollable_at, ScrollOffset, ScrollState};
pub use terminal::Terminal;
pub use types::*;
