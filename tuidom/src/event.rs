use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEventKind,
};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;
use crate::scroll::find_scrollable_at;

/// Rows moved by one wheel notch.
pub const SCROLL_STEP: i16 = 3;

/// Terminal input with pointer events already routed to an element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button press, targeted at the deepest clickable element
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Wheel movement, targeted at the innermost scroll container
    Scroll {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    Resize { width: u16, height: u16 },
}

/// Keys the toolkit distinguishes. Anything else is dropped by [`translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<CtMouseButton> for MouseButton {
    fn from(button: CtMouseButton) -> Self {
        match button {
            CtMouseButton::Left => MouseButton::Left,
            CtMouseButton::Right => MouseButton::Right,
            CtMouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// Turn a raw terminal event into a targeted [`Event`].
///
/// Key releases, mouse moves and drags are dropped.
pub fn translate(event: &CrosstermEvent, root: &Element, layout: &LayoutResult) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            Key::from_code(key.code).map(|code| Event::Key {
                key: code,
                modifiers: key.modifiers.into(),
            })
        }
        CrosstermEvent::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            let scroll = |delta_x: i16, delta_y: i16| Event::Scroll {
                target: find_scrollable_at(root, layout, x, y),
                x,
                y,
                delta_x,
                delta_y,
            };
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    target: hit_test(layout, root, x, y),
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::ScrollDown => Some(scroll(0, SCROLL_STEP)),
                MouseEventKind::ScrollUp => Some(scroll(0, -SCROLL_STEP)),
                MouseEventKind::ScrollRight => Some(scroll(SCROLL_STEP, 0)),
                MouseEventKind::ScrollLeft => Some(scroll(-SCROLL_STEP, 0)),
                _ => None,
            }
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
