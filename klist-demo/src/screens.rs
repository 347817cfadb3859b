//! The four demo compositions.

use std::fmt;
use std::str::FromStr;

use klist::{coin_item, simple_item, Coin, KList};
use tuidom::{Align, Edges, Element, IntoDp, LazyListState, Overflow, Size, Style, TextStyle};

use crate::error::DemoError;
use crate::sample::{all_coins, simple_strings, top_gainers, top_losers};
use crate::toast::Toasts;

pub const MULTIPLE_SCROLL: &str = "multiple-scroll";
pub const ADVANCED_SCROLL: &str = "advanced-scroll";
pub const HOME_LIST: &str = "home";
pub const SINGLE_LIST: &str = "single";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Three eagerly rendered lists sharing one scroll container.
    #[default]
    Multiple,
    /// One virtualized list of gainers.
    Home,
    /// Two eagerly rendered sections in one scroll container.
    Advanced,
    /// Every coin in one virtualized list.
    Single,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Multiple, Screen::Home, Screen::Advanced, Screen::Single];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Multiple => "multiple",
            Screen::Home => "home",
            Screen::Advanced => "advanced",
            Screen::Single => "single",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Multiple => "Multiple lists",
            Screen::Home => "Home",
            Screen::Advanced => "Advanced",
            Screen::Single => "All coins",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Screen {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// `'1'` through `'4'`.
    pub fn from_key(key: char) -> Option<Screen> {
        let index = key.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DemoError::UnknownScreen(s.to_string()))
    }
}

fn coin_card(coin: &Coin) -> Element {
    coin_item(coin, None)
}

fn section_title(text: &str) -> Element {
    Element::text(text).style(
        Style::new()
            .foreground(tuidom::Color::var("muted"))
            .text_style(TextStyle::new().bold()),
    )
}

fn scroll_region(id: &str, offset: u16) -> Element {
    Element::col()
        .id(id)
        .width(Size::Fill)
        .height(Size::Fill)
        .align(Align::Stretch)
        .overflow_y(Overflow::Scroll)
        .scroll_offset(0, offset)
}

/// Gainers, clickable losers and a divided string list, all eager, in one scroll region.
pub fn multiple(toasts: &Toasts, offset: u16) -> Element {
    let losers_toasts = toasts.clone();
    let simple_toasts = toasts.clone();

    scroll_region(MULTIPLE_SCROLL, offset)
        .padding(Edges::dp(16.dp()))
        .gap(32.dp().rows())
        .child(section_title("Example 1: Top Gainers"))
        .child(
            klist::padding(10.dp())
                .with_id("gainers")
                .with_header("Top Gainers")
                .with_items(top_gainers(), coin_card)
                .render(),
        )
        .child(section_title("Example 2: Clickable List"))
        .child(
            klist::padding(16.dp())
                .with_id("losers")
                .with_header("Top Losers (Clickable)")
                .with_items(top_losers(), coin_card)
                .with_click_handler(move |coin: &Coin| {
                    losers_toasts.show(format!("Clicked on {}", coin.name))
                })
                .render(),
        )
        .child(section_title("Example 3: Simple List with Dividers"))
        .child(
            klist::padding(12.dp())
                .with_id("simple")
                .with_header("Simple Items")
                .with_items(simple_strings(), |item| simple_item(item, None))
                .with_click_handler(move |item: &String| {
                    simple_toasts.show(format!("Selected: {item}"))
                })
                .with_dividers()
                .render(),
        )
}

pub fn home_list() -> KList<Coin> {
    klist::padding(16.dp())
        .with_id(HOME_LIST)
        .with_header("Coins")
        .with_items(top_gainers(), coin_card)
}

pub fn home(state: &mut LazyListState) -> Element {
    home_list().render_virtualized(state)
}

/// Top three gainers, a 24dp gap, then the losers with dividers.
pub fn advanced(offset: u16) -> Element {
    scroll_region(ADVANCED_SCROLL, offset)
        .child(
            klist::padding(16.dp())
                .with_id("advanced-gainers")
                .with_header("🚀 Top Gainers")
                .with_items(top_gainers().into_iter().take(3), coin_card)
                .render(),
        )
        .child(Element::spacer(24.dp().rows()))
        .child(
            klist::padding(16.dp())
                .with_id("advanced-losers")
                .with_header("📉 Top Losers")
                .with_items(top_losers(), coin_card)
                .with_dividers()
                .render(),
        )
}

pub fn single_list() -> KList<Coin> {
    klist::padding(16.dp())
        .with_id(SINGLE_LIST)
        .with_header("All Cryptocurrencies")
        .with_items(all_coins(), coin_card)
}

pub fn single(state: &mut LazyListState) -> Element {
    single_list().render_virtualized(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klist::{roles, Role};

    #[test]
    fn screen_names_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }
        assert!(matches!(
            "nope".parse::<Screen>(),
            Err(DemoError::UnknownScreen(name)) if name == "nope"
        ));
    }

    #[test]
    fn keys_and_tab_order() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Multiple));
        assert_eq!(Screen::from_key('4'), Some(Screen::Single));
        assert_eq!(Screen::from_key('0'), None);
        assert_eq!(Screen::from_key('5'), None);
        assert_eq!(Screen::Single.next(), Screen::Multiple);
        assert_eq!(Screen::Multiple.previous(), Screen::Single);
    }

    #[test]
    fn multiple_screen_holds_three_lists() {
        let tree = multiple(&Toasts::new(), 0);
        let found = roles(&tree);

        assert_eq!(found.iter().filter(|r| **r == Role::Header).count(), 3);
        assert_eq!(found.iter().filter(|r| **r == Role::Item).count(), 8 + 4 + 5);
        assert_eq!(found.iter().filter(|r| **r == Role::Divider).count(), 4);
    }

    #[test]
    fn advanced_screen_takes_three_gainers() {
        let tree = advanced(0);
        let gainers = tuidom::find_element(&tree, "advanced-gainers").unwrap();
        let items = roles(gainers).into_iter().filter(|r| *r == Role::Item).count();
        assert_eq!(items, 3);
    }
}
