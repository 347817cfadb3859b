use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle, Theme};

/// Raw-mode alternate-screen terminal with mouse capture.
///
/// Frames are painted into an off-screen [`Buffer`]; only cells that differ
/// from the previous frame are written out.
pub struct Terminal {
    out: io::Stdout,
    front: Buffer,
    back: Buffer,
    last_layout: LayoutResult,
    theme: Box<dyn Theme>,
}

impl Terminal {
    pub fn new(theme: impl Theme + 'static) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        queue!(out, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;
        out.flush()?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");
        Ok(Self {
            out,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
            theme: Box::new(theme),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// Wait up to `timeout` for input, then drain everything already queued.
    /// `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        let mut events = Vec::new();
        if ready {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Lay out and draw `root`, writing only the cells that changed since the last frame.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.front = Buffer::new(width, height);
            self.back = Buffer::new(width, height);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        self.back.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.back, self.theme.as_ref());

        let mut pen = Pen::default();
        for (x, y, cell) in self.back.diff(&self.front) {
            pen.draw(&mut self.out, x, y, cell)?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;

        std::mem::swap(&mut self.front, &mut self.back);
        Ok(&self.last_layout)
    }

    /// Layout of the last rendered frame.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.out, DisableMouseCapture, cursor::Show, LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Cursor and SGR state of the output stream during one flush.
#[derive(Default)]
struct Pen {
    next: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: Option<TextStyle>,
}

impl Pen {
    fn draw(&mut self, out: &mut impl Write, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if cell.wide_continuation {
            return Ok(());
        }
        if self.next != Some((x, y)) {
            queue!(out, cursor::MoveTo(x, y))?;
        }
        if self.style != Some(cell.style) {
            // Resetting attributes also resets colours.
            queue!(out, SetAttribute(Attribute::Reset))?;
            for attribute in attributes(cell.style) {
                queue!(out, SetAttribute(attribute))?;
            }
            self.style = Some(cell.style);
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_crossterm(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        write!(out, "{}", cell.char)?;
        let advance = char_width(cell.char).max(1) as u16;
        self.next = Some((x.saturating_add(advance), y));
        Ok(())
    }
}

fn attributes(style: TextStyle) -> impl Iterator<Item = Attribute> {
    [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
        (style.underline, Attribute::Underlined),
    ]
    .into_iter()
    .filter_map(|(on, attribute)| on.then_some(attribute))
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
