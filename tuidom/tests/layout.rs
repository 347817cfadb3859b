use tuidom::{layout, Align, Edges, Element, Justify, LayoutResult, Overflow, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Margin and padding
// ============================================================================

#[test]
fn test_margin_top_left() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50))
        .margin(Edges::new(5, 0, 0, 10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10, "margin left");
    assert_eq!(rect.y, 5, "margin top");
    assert_eq!(rect.width, 50);
    assert_eq!(rect.height, 50);
}

#[test]
fn test_child_margin_in_column() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("child1")
                .height(Size::Fixed(20))
                .margin(Edges::new(5, 0, 5, 0)),
        )
        .child(Element::box_().id("child2").height(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    let child1 = layout.get("child1").unwrap();
    assert_eq!(child1.y, 5);
    assert_eq!(child1.height, 20);

    let child2 = layout.get("child2").unwrap();
    assert_eq!(child2.y, 30, "5 + 20 + 5");
}

#[test]
fn test_padding_offsets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(20))
        .padding(Edges::symmetric(2, 4))
        .child(Element::text("hello").id("t"));

    let layout = layout_root(&root, 80, 24);
    let t = layout.get("t").unwrap();
    assert_eq!((t.x, t.y), (4, 2));
}

// ============================================================================
// Main axis sizing
// ============================================================================

#[test]
fn test_fill_children_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .child(Element::box_().id("fixed").width(Size::Fixed(40)))
        .child(Element::box_().id("a").width(Size::Fill))
        .child(Element::box_().id("b").width(Size::Fill));

    let layout = layout_root(&root, 100, 10);

    assert_eq!(layout.get("a").unwrap().width, 30);
    assert_eq!(layout.get("b").unwrap().width, 30);
    assert_eq!(layout.get("b").unwrap().x, 70);
}

#[test]
fn test_flex_weights() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(90))
        .height(Size::Fixed(10))
        .child(Element::box_().id("one").width(Size::Flex(1)))
        .child(Element::box_().id("two").width(Size::Flex(2)));

    let layout = layout_root(&root, 90, 10);

    assert_eq!(layout.get("one").unwrap().width, 30);
    assert_eq!(layout.get("two").unwrap().width, 60);
}

#[test]
fn test_gap_between_children() {
    let root = Element::col()
        .id("root")
        .gap(2)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"))
        .child(Element::text("c").id("c"));

    let layout = layout_root(&root, 20, 20);

    assert_eq!(layout.get("a").unwrap().y, 0);
    assert_eq!(layout.get("b").unwrap().y, 3);
    assert_eq!(layout.get("c").unwrap().y, 6);
    assert_eq!(layout.get("root").unwrap().height, 7, "auto height includes gaps");
}

#[test]
fn test_justify_end() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .justify(Justify::End)
        .child(Element::text("abc").id("t"));

    let layout = layout_root(&root, 20, 1);
    assert_eq!(layout.get("t").unwrap().x, 17);
}

#[test]
fn test_stretch_fills_cross_axis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(30))
        .align(Align::Stretch)
        .child(Element::text("x").id("t"));

    let layout = layout_root(&root, 30, 5);
    assert_eq!(layout.get("t").unwrap().width, 30);
}

// ============================================================================
// Min/Max constraints
// ============================================================================

#[test]
fn test_min_width() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(20))
        .min_width(50);

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().width, 50);
}

#[test]
fn test_max_height_caps_fill() {
    let root = Element::box_().id("root").height(Size::Fill).max_height(8);

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().height, 8);
}

// ============================================================================
// Divider and spacer primitives
// ============================================================================

#[test]
fn test_divider_spans_width_and_one_row() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(24))
        .child(Element::divider().id("rule"));

    let layout = layout_root(&root, 40, 10);
    let rule = layout.get("rule").unwrap();
    assert_eq!(rule.width, 24);
    assert_eq!(rule.height, 1);
}

#[test]
fn test_spacer_occupies_rows() {
    let root = Element::col()
        .id("root")
        .child(Element::text("above").id("above"))
        .child(Element::spacer(2).id("gap"))
        .child(Element::text("below").id("below"));

    let layout = layout_root(&root, 40, 10);
    assert_eq!(layout.get("gap").unwrap().height, 2);
    assert_eq!(layout.get("below").unwrap().y, 3);
}

// ============================================================================
// Scroll containers
// ============================================================================

fn scroller(offset: u16) -> Element {
    Element::col()
        .id("scroll")
        .width(Size::Fixed(20))
        .height(Size::Fixed(4))
        .overflow_y(Overflow::Scroll)
        .scroll_offset(0, offset)
        .children((0..10).map(|i| Element::text(format!("line {i}")).id(format!("line-{i}"))))
}

#[test]
fn test_scroll_container_records_extents() {
    let layout = layout_root(&scroller(0), 20, 10);

    assert_eq!(layout.content_size("scroll"), Some((20, 10)));
    assert_eq!(layout.viewport_size("scroll"), Some((20, 4)));
}

#[test]
fn test_scroll_offset_shifts_children_above_origin() {
    let layout = layout_root(&scroller(3), 20, 10);

    assert_eq!(layout.get("line-0").unwrap().y, -3);
    assert_eq!(layout.get("line-3").unwrap().y, 0);
    assert_eq!(layout.get("line-3").unwrap().height, 1, "children keep natural size");
}

#[test]
fn test_scroll_offset_is_clamped_to_content() {
    let layout = layout_root(&scroller(50), 20, 10);

    assert_eq!(layout.get("line-6").unwrap().y, 0, "max offset is 10 - 4");
}

#[test]
fn test_non_scrolling_children_are_clamped() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .child(Element::box_().id("big").height(Size::Fixed(8)));

    let layout = layout_root(&root, 10, 10);
    assert_eq!(layout.get("big").unwrap().height, 3);
    assert_eq!(layout.content_size("root"), None);
}

// ============================================================================
// Measuring
// ============================================================================

#[test]
fn test_measure_nested_column() {
    let card = Element::col()
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("Bitcoin"))
        .child(Element::text("$45250.50"));

    assert_eq!(tuidom::measure(&card), (11, 5));
}
