use palette::{Clamp, IntoColor, Oklab, Oklch, Srgb};

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Var(String),
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Alpha(f32),
    Mix(Color, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `self` at `alpha` opacity over `under`.
    pub fn over(self, under: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let channel = |top: u8, bottom: u8| {
            (top as f32 * alpha + bottom as f32 * (1.0 - alpha)).round() as u8
        };
        Rgb::new(
            channel(self.r, under.r),
            channel(self.g, under.g),
            channel(self.b, under.b),
        )
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// `0xRRGGBB`.
    pub fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    pub fn alpha(self, a: f32) -> Self {
        self.with_op(ColorOp::Alpha(a))
    }

    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Whether this colour can be converted without a theme.
    pub fn is_concrete(&self) -> bool {
        matches!(self, Self::Oklch { .. } | Self::Rgb { .. })
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } => *a,
            _ => 1.0,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
            // needs ColorContext to resolve
            Self::Var(_) | Self::Derived { .. } => Rgb::default(),
        }
    }

    /// OKLCH components (l, c, h, alpha) of a concrete colour.
    pub(crate) fn components(&self) -> (f32, f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, a } => (*l, *c, *h, *a),
            Self::Rgb { r, g, b } => {
                let srgb: Srgb = Srgb::new(*r, *g, *b).into_format();
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_degrees(), 1.0)
            }
            Self::Var(_) | Self::Derived { .. } => (0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Apply one operation to a concrete colour. `other` must already be resolved for `Mix`.
    pub(crate) fn apply(&self, op: &ColorOp) -> Color {
        let (l, c, h, a) = self.components();
        match op {
            ColorOp::Lighten(v) => Color::oklcha((l + v).min(1.0), c, h, a),
            ColorOp::Darken(v) => Color::oklcha((l - v).max(0.0), c, h, a),
            ColorOp::Alpha(v) => Color::oklcha(l, c, h, v.clamp(0.0, 1.0)),
            ColorOp::Mix(other, t) => mix_oklab(self, other, *t),
        }
    }
}

fn mix_oklab(from: &Color, to: &Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (l1, c1, h1, a1) = from.components();
    let (l2, c2, h2, a2) = to.components();
    let start: Oklab = Oklch::new(l1, c1, h1).into_color();
    let end: Oklab = Oklch::new(l2, c2, h2).into_color();
    let mixed = Oklab::new(
        start.l + (end.l - start.l) * t,
        start.a + (end.a - start.a) * t,
        start.b + (end.b - start.b) * t,
    );
    let oklch: Oklch = mixed.into_color();
    Color::oklcha(
        oklch.l,
        oklch.chroma,
        oklch.hue.into_degrees(),
        a1 + (a2 - a1) * t,
    )
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.clamp().into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Color::hex(0x4CAF50).to_rgb(), Rgb::new(0x4C, 0xAF, 0x50));
    }

    #[test]
    fn rgb_survives_oklch_round_trip() {
        let green = Color::hex(0x4CAF50);
        let (l, c, h, _) = green.components();
        let back = Color::oklch(l, c, h).to_rgb();
        assert!((back.g as i16 - 0xAF).abs() <= 1);
        assert!((back.r as i16 - 0x4C).abs() <= 1);
    }

    #[test]
    fn over_blends_towards_background() {
        let red = Rgb::new(200, 0, 0);
        let blended = red.over(Rgb::new(0, 0, 0), 0.5);
        assert_eq!(blended, Rgb::new(100, 0, 0));
        assert_eq!(red.over(Rgb::new(10, 10, 10), 1.0), red);
    }

    #[test]
    fn ops_accumulate_on_derived() {
        let color = Color::var("primary").lighten(0.1).alpha(0.5);
        match color {
            Color::Derived { ops, .. } => assert_eq!(ops.len(), 2),
            other => panic!("expected derived color, got {other:?}"),
        }
    }
}
