mod color;
mod dp;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorOp, Rgb};
pub use dp::{Dp, IntoDp, DP_PER_COLUMN, DP_PER_ROW};
pub use edges::Edges;
pub use enums::{Align, Border, Direction, Justify, Overflow, Size, TextAlign, TextStyle, TextWrap};
pub use style::Style;
pub use theme::{ColorContext, DefaultTheme, EmptyTheme, Theme};
