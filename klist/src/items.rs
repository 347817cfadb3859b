use tuidom::{
    Align, Border, ClickHandler, Color, Dp, Edges, Element, Justify, Size, Style, TextStyle,
    TextWrap,
};

/// Colour of a non-negative change.
pub const GAIN_COLOR: u32 = 0x4CAF50;

/// Colour of a negative change.
pub const LOSS_COLOR: u32 = 0xE53E3E;

const CARD_PADDING: Dp = Dp(16.0);
const BADGE_PADDING: Dp = Dp(8.0);

/// A cryptocurrency quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
}

impl Coin {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        price: f64,
        change_percent: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            price,
            change_percent,
        }
    }
}

/// Green for gains (zero included), red for losses.
pub fn change_color(change_percent: f64) -> Color {
    if change_percent >= 0.0 {
        Color::hex(GAIN_COLOR)
    } else {
        Color::hex(LOSS_COLOR)
    }
}

/// `+5.67%` for gains, `-8.45%` for losses.
pub fn change_label(change_percent: f64) -> String {
    if change_percent >= 0.0 {
        format!("+{change_percent}%")
    } else {
        format!("{change_percent}%")
    }
}

/// Card showing a coin's name and symbol on the left, price and change on the right.
pub fn coin_item(coin: &Coin, on_click: Option<ClickHandler>) -> Element {
    let color = change_color(coin.change_percent);

    let identity = Element::col()
        .width(Size::Flex(1))
        .child(
            Element::text(&coin.name)
                .text_wrap(TextWrap::Truncate)
                .style(Style::new().text_style(TextStyle::new().bold())),
        )
        .child(Element::text(&coin.symbol).style(Style::new().foreground(Color::var("muted"))));

    let quote = Element::col()
        .align(Align::End)
        .child(
            Element::text(coin.price.to_string())
                .style(Style::new().text_style(TextStyle::new().bold())),
        )
        .child(
            Element::text(change_label(coin.change_percent))
                .padding(Edges::horizontal(BADGE_PADDING.cols()))
                .style(
                    Style::new()
                        .foreground(color.clone())
                        .background(color.alpha(0.1)),
                ),
        );

    Element::row()
        .width(Size::Fill)
        .padding(Edges::horizontal(CARD_PADDING.cols()))
        .justify(Justify::SpaceBetween)
        .align(Align::Center)
        .gap(1)
        .style(
            Style::new()
                .background(Color::var("surface"))
                .border(Border::Rounded),
        )
        .data("coin", coin.id.clone())
        .child(identity)
        .child(quote)
        .on_click_opt(on_click)
}

/// Rounded surface with a single line of text.
pub fn simple_item(text: &str, on_click: Option<ClickHandler>) -> Element {
    Element::box_()
        .width(Size::Fill)
        .padding(Edges::horizontal(CARD_PADDING.cols()))
        .style(
            Style::new()
                .background(Color::var("surface"))
                .border(Border::Rounded),
        )
        .child(Element::text(text).text_wrap(TextWrap::Truncate))
        .on_click_opt(on_click)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_change_counts_as_gain() {
        assert_eq!(change_label(0.0), "+0%");
        assert_eq!(change_color(0.0).to_rgb(), Color::hex(GAIN_COLOR).to_rgb());
    }
}
