use crate::buffer::{Buffer, Cell, DEFAULT_FG};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Color, ColorContext, Rgb, TextWrap, Theme};

/// Paint a laid-out element tree into `buf`, resolving colour variables through `theme`.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer, theme: &dyn Theme) {
    let screen = Rect::from_size(buf.width(), buf.height());
    let mut painter = Painter {
        buf,
        colors: ColorContext::new(theme),
        elements: 0,
    };
    render_element(element, layout, screen, &mut painter);
    log::trace!("rendered {} elements", painter.elements);
}

struct Painter<'a> {
    buf: &'a mut Buffer,
    colors: ColorContext<'a>,
    elements: usize,
}

impl Painter<'_> {
    /// Resolved colour and its opacity.
    fn resolve(&self, color: Option<&Color>) -> Option<(Rgb, f32)> {
        let resolved = self.colors.resolve(color?)?;
        Some((resolved.to_rgb(), resolved.opacity()))
    }

    fn foreground(&self, element: &Element) -> (Rgb, f32) {
        self.resolve(element.style.foreground.as_ref())
            .or_else(|| self.resolve(Some(&Color::var("foreground"))))
            .unwrap_or((DEFAULT_FG, 1.0))
    }

    fn cell_mut(&mut self, clip: &Rect, x: i32, y: i32) -> Option<&mut Cell> {
        if !clip.contains(x, y) {
            return None;
        }
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buf.get_mut(x, y)
    }
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.size();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn render_element(element: &Element, layout: &LayoutResult, clip: Rect, p: &mut Painter) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    p.elements += 1;

    let visible = rect.intersect(&clip);
    if !visible.is_empty() {
        paint_background(element, visible, p);
        paint_border(element, rect, clip, p);
        match &element.content {
            Content::Text(text) => paint_text(text, element, rect, clip, p),
            Content::Rule(ch) => paint_rule(*ch, element, rect, clip, p),
            Content::Children(_) | Content::None => {}
        }
    }

    if let Content::Children(children) = &element.content {
        let child_clip = if element.overflow_x.clips() || element.overflow_y.clips() {
            inner_rect(element, rect).intersect(&clip)
        } else {
            clip
        };
        for child in children {
            render_element(child, layout, child_clip, p);
        }
    }

    if element.overflow_y.scrolls() && !visible.is_empty() {
        paint_scrollbar(element, rect, layout, clip, p);
    }
}

fn paint_background(element: &Element, visible: Rect, p: &mut Painter) {
    let Some((bg, alpha)) = p.resolve(element.style.background.as_ref()) else {
        return;
    };
    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            if let Some(cell) = p.cell_mut(&visible, x, y) {
                cell.bg = bg.over(cell.bg, alpha);
            }
        }
    }
}

fn paint_text(text: &str, element: &Element, rect: Rect, clip: Rect, p: &mut Painter) {
    let (fg, alpha) = p.foreground(element);
    let inner = inner_rect(element, rect);
    let area = inner.intersect(&clip);
    if area.is_empty() {
        return;
    }
    let available = inner.width as usize;

    for (line_index, line) in text.lines().enumerate() {
        let y = inner.y + line_index as i32;
        if y >= inner.bottom() {
            break;
        }

        let line = match element.text_wrap {
            TextWrap::Truncate => truncate_to_width(line, available),
            TextWrap::NoWrap => line.to_string(),
        };
        let mut x = inner.x + align_offset(display_width(&line), available, element.text_align) as i32;

        for ch in line.chars() {
            let width = char_width(ch).max(1) as i32;
            if x + width > inner.right() {
                break;
            }
            if let Some(cell) = p.cell_mut(&area, x, y) {
                cell.char = ch;
                cell.fg = fg.over(cell.bg, alpha);
                cell.style = element.style.text_style;
                cell.wide_continuation = false;
            }
            if width == 2 {
                if let Some(cell) = p.cell_mut(&area, x + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}

fn paint_rule(ch: char, element: &Element, rect: Rect, clip: Rect, p: &mut Painter) {
    let (fg, alpha) = p.foreground(element);
    let inner = inner_rect(element, rect);
    let area = inner.intersect(&clip);
    for x in area.left()..area.right() {
        if let Some(cell) = p.cell_mut(&area, x, inner.y) {
            cell.char = ch;
            cell.fg = fg.over(cell.bg, alpha);
            cell.style = element.style.text_style;
        }
    }
}

fn paint_border(element: &Element, rect: Rect, clip: Rect, p: &mut Painter) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = p
        .resolve(element.style.foreground.as_ref())
        .or_else(|| p.resolve(Some(&Color::var("border"))))
        .map(|(rgb, _)| rgb)
        .unwrap_or(DEFAULT_FG);

    let (left, right, top, bottom) = (rect.left(), rect.right() - 1, rect.top(), rect.bottom() - 1);
    let mut set = |x: i32, y: i32, ch: char| {
        if let Some(cell) = p.cell_mut(&clip, x, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    };

    set(left, top, tl);
    set(right, top, tr);
    set(left, bottom, bl);
    set(right, bottom, br);

    for x in (left + 1)..right {
        set(x, top, h);
        set(x, bottom, h);
    }

    for y in (top + 1)..bottom {
        set(left, y, v);
        set(right, y, v);
    }
}

/// One-column track on the container's right edge, only when content overflows.
fn paint_scrollbar(element: &Element, rect: Rect, layout: &LayoutResult, clip: Rect, p: &mut Painter) {
    let (Some((_, content)), Some((_, viewport))) = (
        layout.content_size(&element.id),
        layout.viewport_size(&element.id),
    ) else {
        return;
    };
    if content <= viewport || viewport == 0 || rect.width == 0 {
        return;
    }

    let max_offset = content - viewport;
    let offset = element.scroll_offset.1.min(max_offset);
    let track = rect.height;
    let thumb = ((track as u32 * viewport as u32) / content as u32).max(1) as u16;
    let thumb_start =
        ((offset as u32 * track.saturating_sub(thumb) as u32) / max_offset as u32) as u16;

    let x = rect.right() - 1;
    let track_fg = p
        .resolve(Some(&Color::var("divider")))
        .map(|(rgb, _)| rgb)
        .unwrap_or(DEFAULT_FG);
    let thumb_fg = p
        .resolve(Some(&Color::var("muted")))
        .map(|(rgb, _)| rgb)
        .unwrap_or(DEFAULT_FG);

    for row in 0..track {
        let in_thumb = row >= thumb_start && row < thumb_start + thumb;
        if let Some(cell) = p.cell_mut(&clip, x, rect.y + row as i32) {
            cell.char = if in_thumb { '┃' } else { '│' };
            cell.fg = if in_thumb { thumb_fg } else { track_fg };
            cell.wide_continuation = false;
        }
    }
}
