use ratatui::style::Color;

pub use crate::prefs::Scheme;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub tint: Color,           // Buttons, enabled icons
    pub muted: Color,          // Grey
    pub disabled: Color,       // Undo/redo at the ends of history
    pub section_bg: Color,
    pub selected_border: Color,
    pub border_normal: Color,
    pub highlight: Color,      // Gold marker for the forced theme
    pub button_fg: Color,
    pub score_button: Color,
    pub bunco_button: Color,   // Red
    pub clear_button: Color,   // Grey
    pub success: Color,
}

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(17, 24, 28),
    tint: Color::Rgb(10, 126, 164),
    muted: Color::Rgb(104, 112, 118),
    disabled: Color::Rgb(153, 153, 153),
    section_bg: Color::Rgb(242, 242, 247),
    selected_border: Color::Rgb(10, 126, 164),
    border_normal: Color::Rgb(198, 198, 200),
    highlight: Color::Rgb(255, 215, 0),
    button_fg: Color::Rgb(255, 255, 255),
    score_button: Color::Rgb(0, 122, 255),
    bunco_button: Color::Rgb(255, 59, 48),
    clear_button: Color::Rgb(142, 142, 147),
    success: Color::Rgb(52, 199, 89),
};

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(21, 23, 24),
    fg: Color::Rgb(236, 237, 238),
    tint: Color::Rgb(255, 255, 255),
    muted: Color::Rgb(155, 161, 166),
    disabled: Color::Rgb(102, 102, 102),
    section_bg: Color::Rgb(28, 28, 30),
    selected_border: Color::Rgb(10, 126, 164),
    border_normal: Color::Rgb(72, 72, 74),
    highlight: Color::Rgb(255, 215, 0),
    button_fg: Color::Rgb(255, 255, 255),
    score_button: Color::Rgb(10, 132, 255),
    bunco_button: Color::Rgb(255, 69, 58),
    clear_button: Color::Rgb(99, 99, 102),
    success: Color::Rgb(48, 209, 88),
};

impl Theme {
    pub fn for_scheme(scheme: Scheme) -> &'static Theme {
        match scheme {
            Scheme::Light => &LIGHT_THEME,
            Scheme::Dark => &DARK_THEME,
        }
    }
}

/// Parse a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background palette index: 7 and 15 are light,
/// any other number is dark.
pub fn scheme_from_colorfgbg(value: &str) -> Option<Scheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        7 | 15 => Scheme::Light,
        _ => Scheme::Dark,
    })
}

/// The terminal's reported scheme, falling back to light
pub fn detect_system_scheme() -> Scheme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| scheme_from_colorfgbg(&value))
        .unwrap_or_default()
}
