use simplelog::LevelFilter;

use crate::error::{DemoError, Result};
use crate::screens::Screen;

/// Terminal size used by `--preview` when none is given.
pub const DEFAULT_PREVIEW_SIZE: (u16, u16) = (60, 40);

pub const USAGE: &str = "\
usage: klist-demo [SCREEN] [--verbose]
       klist-demo --preview SCREEN [WIDTHxHEIGHT]

screens: multiple (default), home, advanced, single

keys: 1-4 or Tab switch screens, arrows/PgUp/PgDn/Home/End scroll,
      click items, q or Esc quits";

/// Options for one run of the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub screen: Screen,
    /// Render once to stdout at this size instead of starting the UI.
    pub preview: Option<(u16, u16)>,
    pub log_level: LevelFilter,
    pub help: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            preview: None,
            log_level: LevelFilter::Debug,
            help: false,
        }
    }
}

impl DemoConfig {
    /// Parse command-line arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.help = true,
                "-v" | "--verbose" => config.log_level = LevelFilter::Trace,
                "--preview" => {
                    let screen = args.next().ok_or(DemoError::MissingArgument("--preview"))?;
                    config.screen = screen.parse()?;
                    let size = match args.next_if(|next| !next.starts_with('-')) {
                        Some(size) => parse_size(&size)?,
                        None => DEFAULT_PREVIEW_SIZE,
                    };
                    config.preview = Some(size);
                }
                "--screen" => {
                    let screen = args.next().ok_or(DemoError::MissingArgument("--screen"))?;
                    config.screen = screen.parse()?;
                }
                other if other.starts_with('-') => {
                    return Err(DemoError::UnexpectedArgument(other.to_string()))
                }
                screen => config.screen = screen.parse()?,
            }
        }

        Ok(config)
    }
}

/// `60x40` style sizes; both sides must be non-zero.
fn parse_size(value: &str) -> Result<(u16, u16)> {
    let bad = || DemoError::BadPreviewSize(value.to_string());
    let (width, height) = value.split_once(['x', 'X']).ok_or_else(bad)?;
    let width: u16 = width.trim().parse().map_err(|_| bad())?;
    let height: u16 = height.trim().parse().map_err(|_| bad())?;
    if width == 0 || height == 0 {
        return Err(bad());
    }
    Ok((width, height))
}
