//! Fluent, immutable list configuration on top of `tuidom`.
//!
//! ```ignore
//! let list = klist::padding(16.dp())
//!     .with_header("Coins")
//!     .with_items(coins, |coin| coin_item(coin, None))
//!     .with_click_handler(|coin: &Coin| log::info!("{}", coin.name));
//!
//! let tree = list.render();
//! ```
//!
//! Every `with_*` call returns a fresh [`KList`]; the receiver is left as it was.
//! [`KList::render`] unrolls all items eagerly and is meant to sit inside a
//! scroll container shared with other content. [`KList::render_virtualized`]
//! only materializes what is visible and must be the sole scrolling element
//! of its screen.

mod items;
mod list;
mod render;

pub use items::{change_color, change_label, coin_item, simple_item, Coin, GAIN_COLOR, LOSS_COLOR};
pub use list::{header, padding, ItemClickHandler, ItemRenderer, KList};
pub use render::{roles, Role, DIVIDER_PADDING, HEADER_SPACING, INDEX_KEY, ITEM_GAP, ROLE_KEY};
