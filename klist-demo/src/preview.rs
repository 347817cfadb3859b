//! One-shot rendering of a screen to plain text, for terminals without mouse
//! support and for snapshot-style checks.

use std::io::{self, Write};

use tuidom::{layout, render_to_buffer, Buffer, Rect};

use crate::app::App;
use crate::error::Result;
use crate::screens::Screen;
use crate::theme::KListTheme;

/// Lay out and paint `screen` at the given size.
///
/// Lazy lists get one extra pass once their viewport is known.
pub fn render_screen(screen: Screen, width: u16, height: u16) -> Buffer {
    let mut app = App::new(screen);
    let area = Rect::from_size(width, height);

    let mut root = app.view();
    let mut result = layout(&root, area);
    if app.sync(&result) {
        root = app.view();
        result = layout(&root, area);
    }

    let mut buffer = Buffer::new(width, height);
    render_to_buffer(&root, &result, &mut buffer, &KListTheme::new());
    buffer
}

/// Print `screen` to stdout.
pub fn run(screen: Screen, (width, height): (u16, u16)) -> Result<()> {
    log::info!("previewing {screen} at {width}x{height}");
    let buffer = render_screen(screen, width, height);
    let mut out = io::stdout().lock();
    for line in buffer.to_lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
