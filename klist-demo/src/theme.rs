use tuidom::{Color, Theme};

/// Dark purple palette used by every demo screen.
pub struct KListTheme {
    background: Color,
    foreground: Color,
    surface: Color,
    border: Color,
    primary: Color,
    muted: Color,
    divider: Color,
    toast: Color,
}

impl KListTheme {
    pub fn new() -> Self {
        Self {
            background: Color::hex(0x1C1B1F),
            foreground: Color::hex(0xE6E1E5),
            surface: Color::hex(0x2B2930),
            border: Color::hex(0x49454F),
            primary: Color::hex(0xD0BCFF),
            muted: Color::hex(0xCAC4D0),
            divider: Color::var("border").lighten(0.1),
            toast: Color::hex(0xD0BCFF).alpha(0.25),
        }
    }
}

impl Default for KListTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for KListTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            "divider" => Some(&self.divider),
            "toast" => Some(&self.toast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuidom::ColorContext;

    #[test]
    fn every_variable_resolves() {
        let theme = KListTheme::new();
        let ctx = ColorContext::new(&theme);
        for name in [
            "background", "foreground", "surface", "border", "primary", "muted", "divider", "toast",
        ] {
            assert!(ctx.resolve(&Color::var(name)).is_some(), "{name}");
        }
    }
}
