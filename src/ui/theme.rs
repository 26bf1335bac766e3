use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the CLI status lines
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub ok: Style,
    pub failure: Style,
    pub accent: Style,
    pub label: Style,
}

impl Theme {
    /// Colored when `console` allows it (TTY, `CLICOLOR`, `NO_COLOR`), plain otherwise
    pub fn new(colored: bool) -> Self {
        if !colored {
            let plain = Style::new();
            return Self {
                title: plain,
                ok: plain,
                failure: plain,
                accent: plain,
                label: plain,
            };
        }
        Self {
            title: Style::new().cyan().bold(),
            ok: Style::new().green().bold(),
            failure: Style::new().red().bold(),
            accent: Style::new().magenta(),
            label: Style::new().dimmed(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::new(console::colors_enabled()))
}
