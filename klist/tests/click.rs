use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use klist::{simple_item, KList, Role};
use tuidom::{
    dispatch_click, find_element, layout, ClickHandler, Element, LayoutResult, LazyListState, Rect,
};

fn items() -> Vec<String> {
    ["First Item", "Second Item", "Third Item"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn center_of(result: &LayoutResult, id: &str) -> (u16, u16) {
    let rect = result.get(id).unwrap();
    (
        (rect.x + rect.width as i32 / 2) as u16,
        (rect.y + rect.height as i32 / 2) as u16,
    )
}

#[test]
fn test_click_invokes_handler_once_with_item_value() {
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();

    let tree = KList::new()
        .with_id("simple")
        .with_items(items(), |s| simple_item(s, None))
        .with_click_handler(move |item: &String| sink.lock().unwrap().push(item.clone()))
        .render();
    let result = layout(&tree, Rect::from_size(40, 30));

    let (x, y) = center_of(&result, "simple-item-1");
    assert!(dispatch_click(&result, &tree, x, y));

    assert_eq!(*clicked.lock().unwrap(), vec!["Second Item".to_string()]);
}

#[test]
fn test_item_callback_and_list_handler_both_run_once() {
    let item_hits = Arc::new(AtomicUsize::new(0));
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let (counter, sink) = (item_hits.clone(), clicked.clone());

    let tree = KList::new()
        .with_id("both")
        .with_items(items(), move |s| {
            let counter = counter.clone();
            simple_item(
                s,
                Some(ClickHandler::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
            )
        })
        .with_click_handler(move |item: &String| sink.lock().unwrap().push(item.clone()))
        .render();
    let result = layout(&tree, Rect::from_size(40, 30));

    let (x, y) = center_of(&result, "both-item-2");
    assert!(dispatch_click(&result, &tree, x, y));

    assert_eq!(item_hits.load(Ordering::SeqCst), 1);
    assert_eq!(*clicked.lock().unwrap(), vec!["Third Item".to_string()]);
}

#[test]
fn test_no_handler_means_no_interactive_wrapper() {
    let tree = KList::new()
        .with_id("plain")
        .with_items(items(), |s| simple_item(s, None))
        .render();
    let result = layout(&tree, Rect::from_size(40, 30));

    let wrapper = find_element(&tree, "plain-item-0").unwrap();
    assert_eq!(Role::of(wrapper), Some(Role::Item));
    assert!(!wrapper.clickable);

    let (x, y) = center_of(&result, "plain-item-0");
    assert!(!dispatch_click(&result, &tree, x, y));
}

#[test]
fn test_clicks_between_items_hit_nothing() {
    let count = Arc::new(Mutex::new(0));
    let hits = count.clone();
    let tree = KList::new()
        .with_id("gaps")
        .with_items(items(), |s| simple_item(s, None))
        .with_click_handler(move |_: &String| *hits.lock().unwrap() += 1)
        .render();
    let result = layout(&tree, Rect::from_size(40, 30));

    let spacer = result.get("gaps-spacer-0").unwrap();
    assert!(!dispatch_click(&result, &tree, 1, spacer.y as u16));
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn test_virtualized_click_reaches_handler() {
    let clicked = Arc::new(Mutex::new(None));
    let sink = clicked.clone();
    let list = KList::new()
        .with_id("lazy")
        .with_items(0..100, |i: &i32| Element::text(format!("row {i}")))
        .with_click_handler(move |i: &i32| *sink.lock().unwrap() = Some(*i));

    let mut state = LazyListState::new();
    state.set_viewport(10);
    state.scroll_to_item(40);
    let tree = list.render_virtualized(&mut state);
    let result = layout(&tree, Rect::from_size(20, 10));

    let (x, y) = center_of(&result, "lazy-item-40");
    assert!(dispatch_click(&result, &tree, x, y));
    assert_eq!(*clicked.lock().unwrap(), Some(40));
}
