use tuidom::{
    layout, render_to_buffer, Border, Buffer, Color, DefaultTheme, Edges, Element, EmptyTheme,
    Overflow, Rect, Rgb, Size, Style, TextWrap,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf, &EmptyTheme);
    buf
}

// ============================================================================
// Text and backgrounds
// ============================================================================

#[test]
fn test_text_is_painted_at_its_rect() {
    let root = Element::col()
        .id("root")
        .padding(Edges::new(1, 0, 0, 2))
        .child(Element::text("Bitcoin"));

    let buf = render(&root, 20, 4);
    assert_eq!(buf.find_text("Bitcoin"), Some((2, 1)));
}

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(255, 0, 0)));

    let buf = render(&root, 10, 5);
    assert_eq!(buf.get(3, 1).unwrap().bg, Rgb::new(255, 0, 0));
    assert_eq!(buf.get(4, 1).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_translucent_background_blends() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(2))
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::rgb(200, 100, 0).alpha(0.5)));

    let buf = render(&root, 2, 1);
    let bg = buf.get(0, 0).unwrap().bg;
    // Alpha goes through OKLCH, so allow a rounding step.
    assert!(bg.r.abs_diff(100) <= 1, "r = {}", bg.r);
    assert!(bg.g.abs_diff(50) <= 1, "g = {}", bg.g);
    assert!(bg.b <= 1, "b = {}", bg.b);
}

#[test]
fn test_truncated_text_ends_with_ellipsis() {
    let root = Element::row().id("root").width(Size::Fixed(6)).child(
        Element::text("Ethereum Classic")
            .width(Size::Fill)
            .text_wrap(TextWrap::Truncate),
    );

    let buf = render(&root, 20, 1);
    assert_eq!(buf.row_text(0), "Ether…");
}

#[test]
fn test_wide_characters_take_two_cells() {
    let root = Element::text("🚀 Top").id("root");

    let buf = render(&root, 20, 1);
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.row_text(0), "🚀 Top");
    assert_eq!(buf.find_text("Top"), Some((3, 0)));
}

#[test]
fn test_theme_variables_resolve_foreground() {
    let root = Element::text("x")
        .id("root")
        .style(Style::new().foreground(Color::var("muted")));
    let theme = DefaultTheme::new();
    let expected = theme.muted.to_rgb();

    let layout = layout(&root, Rect::from_size(4, 1));
    let mut buf = Buffer::new(4, 1);
    render_to_buffer(&root, &layout, &mut buf, &theme);

    assert_eq!(buf.get(0, 0).unwrap().fg, expected);
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn test_divider_draws_a_rule() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(5))
        .child(Element::text("a"))
        .child(Element::divider())
        .child(Element::text("b"));

    let buf = render(&root, 10, 3);
    assert_eq!(buf.to_lines(), vec!["a", "─────", "b"]);
}

#[test]
fn test_rounded_border() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));

    let buf = render(&root, 4, 3);
    assert_eq!(buf.to_lines(), vec!["╭──╮", "│  │", "╰──╯"]);
}

// ============================================================================
// Overflow and scrolling
// ============================================================================

fn list(offset: u16, overflow: Overflow) -> Element {
    Element::col()
        .id("root")
        .child(
            Element::col()
                .id("list")
                .width(Size::Fixed(10))
                .height(Size::Fixed(3))
                .overflow_y(overflow)
                .scroll_offset(0, offset)
                .children((0..6).map(|i| Element::text(format!("row {i}")))),
        )
        .child(Element::text("footer"))
}

#[test]
fn test_overflow_hidden_clips_children() {
    let buf = render(&list(0, Overflow::Hidden), 12, 6);
    assert_eq!(buf.row_text(2), "row 2");
    assert_eq!(buf.row_text(3), "footer");
    assert_eq!(buf.find_text("row 3"), None);
}

#[test]
fn test_text_clipped_to_narrow_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(4))
        .child(Element::text("overflowing").id("t"));

    // Layout clamps the text to its parent and paint stops at the rect edge.
    let buf = render(&root, 12, 1);
    assert_eq!(buf.row_text(0), "over");
}

#[test]
fn test_scroll_offset_moves_children() {
    let buf = render(&list(2, Overflow::Scroll), 12, 6);
    assert_eq!(buf.find_text("row 2"), Some((0, 0)));
    assert_eq!(buf.find_text("row 1"), None, "scrolled above the viewport");
    assert_eq!(buf.find_text("row 5"), None, "below the viewport");
}

#[test]
fn test_scroll_renders_scrollbar() {
    let buf = render(&list(0, Overflow::Scroll), 12, 6);
    let column: String = (0..3).map(|y| buf.get(9, y).unwrap().char).collect();
    assert_eq!(column, "┃││");
}

#[test]
fn test_no_scrollbar_when_content_fits() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .overflow_y(Overflow::Scroll)
        .child(Element::text("only"));

    let buf = render(&root, 10, 3);
    assert_eq!(buf.get(9, 0).unwrap().char, ' ');
}
