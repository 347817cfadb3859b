use klist::KList;
use tuidom::{Dp, Element, IntoDp};

fn label(n: &u32) -> Element {
    Element::text(n.to_string())
}

#[test]
fn test_default_configuration() {
    let list = KList::new();

    assert_eq!(list.padding(), Dp::ZERO);
    assert_eq!(list.header(), None);
    assert!(list.items().is_empty());
    assert!(!list.has_renderer());
    assert!(!list.has_click_handler());
    assert!(!list.shows_dividers());
    assert_eq!(list.id(), None);
}

#[test]
fn test_free_entry_points() {
    assert_eq!(klist::padding(10.dp()).padding(), 10.dp());
    assert_eq!(klist::header("Top Gainers").header(), Some("Top Gainers"));
}

#[test]
fn test_last_value_wins() {
    let list = KList::new()
        .with_padding(4.dp())
        .with_header("first")
        .with_padding(12.dp())
        .with_header("second");

    assert_eq!(list.padding(), 12.dp());
    assert_eq!(list.header(), Some("second"));
}

#[test]
fn test_independent_mutators_commute() {
    let a = KList::new()
        .with_padding(16.dp())
        .with_header("Coins")
        .with_dividers()
        .with_items(vec![1u32, 2, 3], label);
    let b = KList::new()
        .with_dividers()
        .with_header("Coins")
        .with_items(vec![1u32, 2, 3], label)
        .with_padding(16.dp());

    assert_eq!(a.padding(), b.padding());
    assert_eq!(a.header(), b.header());
    assert_eq!(a.items(), b.items());
    assert_eq!(a.shows_dividers(), b.shows_dividers());
    assert_eq!(a.has_renderer(), b.has_renderer());
}

#[test]
fn test_every_mutator_returns_a_new_value() {
    let base = KList::new().with_items(vec![7u32], label);

    let headed = base.with_header("h");
    let divided = base.with_dividers();
    let clickable = base.with_click_handler(|_: &u32| {});
    let named = base.with_id("named");

    assert_eq!(base.header(), None);
    assert!(!base.shows_dividers());
    assert!(!base.has_click_handler());
    assert_eq!(base.id(), None);

    assert_eq!(headed.header(), Some("h"));
    assert!(divided.shows_dividers());
    assert!(clickable.has_click_handler());
    assert_eq!(named.id(), Some("named"));
    assert_eq!(named.items(), &[7]);
}

#[test]
fn test_items_keep_their_order() {
    let list = KList::new().with_items(vec!["c", "a", "b"], |s: &&str| Element::text(*s));
    assert_eq!(list.items(), &["c", "a", "b"]);
}

#[test]
fn test_with_items_retypes_and_drops_handler() {
    let numbers = KList::new()
        .with_items(vec![1u32], label)
        .with_click_handler(|_: &u32| {});
    assert!(numbers.has_click_handler());

    let words = numbers.with_items(vec!["one".to_string()], |s: &String| Element::text(s));
    assert!(!words.has_click_handler());
    assert!(words.has_renderer());
    assert_eq!(words.items(), &["one".to_string()]);

    let words = words.with_click_handler(|_: &String| {});
    assert!(words.has_click_handler());
}

#[test]
fn test_negative_padding_is_stored_uninterpreted() {
    let list = KList::new().with_padding(Dp(-8.0));
    assert_eq!(list.padding().value(), -8.0);
}

#[test]
fn test_lazy_column_id_follows_list_id() {
    assert_eq!(KList::new().lazy_column_id(), None);
    assert_eq!(
        KList::new().with_id("coins").lazy_column_id(),
        Some("coins-items".to_string())
    );
}
