use crate::types::Color;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Default empty theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Minimal default theme providing basic readable colors.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub muted: Color,
    pub divider: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.0, c: 0.0, h: 0.0, a: 1.0 },
            foreground: Color::Oklch { l: 1.0, c: 0.0, h: 0.0, a: 1.0 },
            surface: Color::Oklch { l: 0.15, c: 0.0, h: 0.0, a: 1.0 },
            border: Color::Oklch { l: 0.4, c: 0.0, h: 0.0, a: 1.0 },
            primary: Color::Oklch { l: 0.9, c: 0.0, h: 0.0, a: 1.0 },
            muted: Color::Oklch { l: 0.65, c: 0.0, h: 0.0, a: 1.0 },
            divider: Color::Oklch { l: 0.3, c: 0.0, h: 0.0, a: 1.0 },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            "divider" => Some(&self.divider),
            _ => None,
        }
    }
}

/// Maximum depth when a theme variable refers to another variable.
const MAX_VAR_DEPTH: usize = 8;

/// Context for resolving color variables and derived colors.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete Color (no Var or Derived variants).
    /// Unknown variables resolve to `None`.
    pub fn resolve(&self, color: &Color) -> Option<Color> {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: usize) -> Option<Color> {
        if depth > MAX_VAR_DEPTH {
            log::warn!("color variable chain too deep: {}", color_name(color));
            return None;
        }
        match color {
            Color::Oklch { .. } | Color::Rgb { .. } => Some(color.clone()),
            Color::Var(name) => {
                let Some(found) = self.theme.resolve(name) else {
                    log::debug!("unresolved color variable '{name}'");
                    return None;
                };
                self.resolve_depth(found, depth + 1)
            }
            Color::Derived { base, ops } => {
                let mut current = self.resolve_depth(base, depth + 1)?;
                for op in ops {
                    current = match op {
                        crate::types::ColorOp::Mix(other, t) => {
                            let other = self.resolve_depth(other, depth + 1)?;
                            current.apply(&crate::types::ColorOp::Mix(other, *t))
                        }
                        op => current.apply(op),
                    };
                }
                Some(current)
            }
        }
    }
}

fn color_name(color: &Color) -> &str {
    match color {
        Color::Var(name) => name,
        _ => "<derived>",
    }
}
