use std::time::Duration;

use tuidom::{
    dispatch_click, translate, Align, Color, Edges, Element, Event, Key, LayoutResult,
    LazyListState, MouseButton, ScrollState, Size, Style, Terminal, TextStyle, TextWrap,
};

use crate::error::Result;
use crate::screens::{self, Screen, ADVANCED_SCROLL, MULTIPLE_SCROLL};
use crate::theme::KListTheme;
use crate::toast::Toasts;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Upper bound on layout passes per frame while lazy viewports settle.
const MAX_SETTLE_PASSES: usize = 3;

const HELP: &str = "1-4/Tab switch · ↑↓ PgUp PgDn Home End scroll · click an item · q quit";

/// State of the interactive demo between frames.
pub struct App {
    screen: Screen,
    scroll: ScrollState,
    home: LazyListState,
    single: LazyListState,
    toasts: Toasts,
    running: bool,
}

/// Where scroll input goes on the current screen.
enum ScrollTarget<'a> {
    Region(&'static str),
    Lazy(&'a mut LazyListState),
}

impl App {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            scroll: ScrollState::new(),
            home: LazyListState::new().with_estimate(5),
            single: LazyListState::new().with_estimate(5),
            toasts: Toasts::new(),
            running: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tab bar, the active screen and a status line.
    pub fn view(&mut self) -> Element {
        let body = match self.screen {
            Screen::Multiple => {
                screens::multiple(&self.toasts, self.scroll.get(MULTIPLE_SCROLL).y)
            }
            Screen::Home => screens::home(&mut self.home),
            Screen::Advanced => screens::advanced(self.scroll.get(ADVANCED_SCROLL).y),
            Screen::Single => screens::single(&mut self.single),
        };

        Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .align(Align::Stretch)
            .style(Style::new().background(Color::var("background")))
            .child(self.tab_bar())
            .child(
                Element::col()
                    .id("body")
                    .width(Size::Fill)
                    .height(Size::Fill)
                    .align(Align::Stretch)
                    .child(body),
            )
            .child(self.status_line())
    }

    fn tab_bar(&self) -> Element {
        let tabs = Screen::ALL.iter().enumerate().map(|(i, screen)| {
            let label = Element::text(format!(" {} {} ", i + 1, screen.title()))
                .id(format!("tab-{}", screen.name()));
            if *screen == self.screen {
                label.style(
                    Style::new()
                        .background(Color::var("surface"))
                        .foreground(Color::var("primary"))
                        .text_style(TextStyle::new().bold()),
                )
            } else {
                label.style(Style::new().foreground(Color::var("muted")))
            }
        });

        Element::row()
            .id("tabs")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .gap(1)
            .children(tabs)
    }

    fn status_line(&self) -> Element {
        let (text, style) = match self.toasts.current() {
            Some(message) => (
                message,
                Style::new()
                    .background(Color::var("toast"))
                    .foreground(Color::var("foreground")),
            ),
            None => (
                HELP.to_string(),
                Style::new().foreground(Color::var("muted")),
            ),
        };

        Element::text(text)
            .id("status")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .text_wrap(TextWrap::Truncate)
            .style(style)
    }

    /// Feed a finished layout back into lazy lists and scroll offsets.
    ///
    /// Returns true when a lazy list saw a new viewport and the frame should
    /// be built again.
    pub fn sync(&mut self, layout: &LayoutResult) -> bool {
        self.scroll.clamp_all(layout);
        let (state, list) = match self.screen {
            Screen::Home => (&mut self.home, screens::home_list()),
            Screen::Single => (&mut self.single, screens::single_list()),
            Screen::Multiple | Screen::Advanced => return false,
        };
        list.lazy_column_id()
            .is_some_and(|id| state.sync_viewport(layout, &id))
    }

    fn scroll_target(&mut self) -> ScrollTarget<'_> {
        match self.screen {
            Screen::Multiple => ScrollTarget::Region(MULTIPLE_SCROLL),
            Screen::Advanced => ScrollTarget::Region(ADVANCED_SCROLL),
            Screen::Home => ScrollTarget::Lazy(&mut self.home),
            Screen::Single => ScrollTarget::Lazy(&mut self.single),
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        if screen != self.screen {
            log::info!("switching to {screen} screen");
            self.screen = screen;
        }
    }

    /// Apply one event. `root` and `layout` must be from the frame the event
    /// was translated against.
    pub fn handle(&mut self, event: &Event, root: &Element, layout: &LayoutResult) {
        match event {
            Event::Key { key, modifiers } => match key {
                Key::Char('c') if modifiers.ctrl => self.running = false,
                Key::Char('q') | Key::Escape => self.running = false,
                Key::Char(c) => {
                    if let Some(screen) = Screen::from_key(*c) {
                        self.switch_to(screen);
                    }
                }
                Key::Tab => self.switch_to(self.screen.next()),
                Key::BackTab => self.switch_to(self.screen.previous()),
                Key::Up | Key::Down | Key::PageUp | Key::PageDown | Key::Home | Key::End => {
                    self.scroll_key(*key, layout)
                }
                _ => {}
            },
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
                ..
            } => {
                if !dispatch_click(layout, root, *x, *y) {
                    log::trace!("click at ({x}, {y}) hit nothing");
                }
            }
            Event::Scroll {
                target: Some(target),
                delta_x,
                delta_y,
                ..
            } => match self.scroll_target() {
                ScrollTarget::Lazy(state) => state.scroll_by(delta_y.signum() as i32),
                ScrollTarget::Region(_) => {
                    self.scroll
                        .scroll_by(target, *delta_x as i32, *delta_y as i32, layout);
                }
            },
            Event::Resize { width, height } => {
                log::debug!("resize to {width}x{height}");
            }
            _ => {}
        }
    }

    fn scroll_key(&mut self, key: Key, layout: &LayoutResult) {
        match self.scroll_target() {
            ScrollTarget::Lazy(state) => match key {
                Key::Up => state.scroll_by(-1),
                Key::Down => state.scroll_by(1),
                Key::PageUp => state.page_up(),
                Key::PageDown => state.page_down(),
                Key::Home => state.home(),
                Key::End => state.end(),
                _ => {}
            },
            ScrollTarget::Region(id) => {
                let page = self.scroll.viewport_height(id, layout).max(1) as i32;
                let dy = match key {
                    Key::Up => -1,
                    Key::Down => 1,
                    Key::PageUp => -page,
                    Key::PageDown => page,
                    Key::Home => -(u16::MAX as i32),
                    Key::End => u16::MAX as i32,
                    _ => 0,
                };
                self.scroll.scroll_by(id, 0, dy, layout);
            }
        }
    }
}

/// Run the interactive demo until the user quits.
pub fn run(screen: Screen) -> Result<()> {
    let mut terminal = Terminal::new(KListTheme::new())?;
    let mut app = App::new(screen);
    log::info!("demo started on {screen} screen");

    while app.is_running() {
        let mut root = app.view();
        terminal.render(&root)?;
        for _ in 0..MAX_SETTLE_PASSES {
            if !app.sync(terminal.layout()) {
                break;
            }
            root = app.view();
            terminal.render(&root)?;
        }

        for raw in terminal.poll(Some(POLL_INTERVAL))? {
            if let Some(event) = translate(&raw, &root, terminal.layout()) {
                app.handle(&event, &root, terminal.layout());
            }
        }
    }

    log::info!("demo exited from {} screen", app.screen());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuidom::{layout, Modifiers, Rect};

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    fn frame(app: &mut App) -> (Element, LayoutResult) {
        let mut root = app.view();
        let mut result = layout(&root, Rect::from_size(60, 30));
        while app.sync(&result) {
            root = app.view();
            result = layout(&root, Rect::from_size(60, 30));
        }
        (root, result)
    }

    #[test]
    fn quits_on_q_escape_and_ctrl_c() {
        for event in [
            key(Key::Char('q')),
            key(Key::Escape),
            Event::Key {
                key: Key::Char('c'),
                modifiers: Modifiers::ctrl(),
            },
        ] {
            let mut app = App::new(Screen::Home);
            let (root, result) = frame(&mut app);
            app.handle(&event, &root, &result);
            assert!(!app.is_running());
        }
    }

    #[test]
    fn number_keys_and_tab_switch_screens() {
        let mut app = App::new(Screen::Multiple);
        let (root, result) = frame(&mut app);

        app.handle(&key(Key::Char('3')), &root, &result);
        assert_eq!(app.screen(), Screen::Advanced);
        app.handle(&key(Key::Tab), &root, &result);
        assert_eq!(app.screen(), Screen::Single);
        app.handle(&key(Key::BackTab), &root, &result);
        assert_eq!(app.screen(), Screen::Advanced);
        app.handle(&key(Key::Char('x')), &root, &result);
        assert_eq!(app.screen(), Screen::Advanced);
    }

    #[test]
    fn arrow_keys_scroll_eager_screen() {
        let mut app = App::new(Screen::Multiple);
        let (root, result) = frame(&mut app);

        app.handle(&key(Key::Down), &root, &result);
        assert_eq!(app.scroll.get(MULTIPLE_SCROLL).y, 1);
        app.handle(&key(Key::End), &root, &result);
        let bottom = app.scroll.get(MULTIPLE_SCROLL).y;
        assert!(bottom > 1);
        app.handle(&key(Key::Home), &root, &result);
        assert_eq!(app.scroll.get(MULTIPLE_SCROLL).y, 0);
    }

    #[test]
    fn page_down_moves_lazy_list() {
        let mut app = App::new(Screen::Single);
        let (root, result) = frame(&mut app);
        assert!(app.single.viewport() > 0);

        app.handle(&key(Key::PageDown), &root, &result);
        frame(&mut app);
        assert!(app.single.first_visible() > 0);

        app.handle(&key(Key::Home), &root, &result);
        frame(&mut app);
        assert_eq!(app.single.first_visible(), 0);
    }

    #[test]
    fn clicking_a_loser_shows_toast() {
        let mut app = App::new(Screen::Multiple);
        let root = app.view();
        let result = layout(&root, Rect::from_size(60, 200));
        let rect = *result.get("losers-item-0").unwrap();

        app.handle(
            &Event::Click {
                target: None,
                x: rect.x as u16 + 2,
                y: rect.y as u16 + 1,
                button: MouseButton::Left,
            },
            &root,
            &result,
        );

        let toast = app.toasts.current().unwrap();
        assert!(toast.starts_with("Clicked on "), "{toast}");
    }

    #[test]
    fn scroll_offset_survives_screen_switch() {
        let mut app = App::new(Screen::Multiple);
        let (root, result) = frame(&mut app);
        app.handle(&key(Key::PageDown), &root, &result);
        let offset = app.scroll.get(MULTIPLE_SCROLL).y;
        assert!(offset > 0);

        app.handle(&key(Key::Char('2')), &root, &result);
        frame(&mut app);
        app.handle(&key(Key::Char('1')), &root, &result);
        frame(&mut app);
        assert_eq!(app.scroll.get(MULTIPLE_SCROLL).y, offset);
    }
}
