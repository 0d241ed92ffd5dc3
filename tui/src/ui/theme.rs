use ratatui::style::{Color, Modifier, Style};

/// Slate-and-blue dashboard theme.
///
/// Base aesthetic:
/// - soft grey foreground on a near-black blue background
/// - one blue accent for focus and titles
/// - green reserved for the success banner
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const FG: Color = Color::Rgb(201, 209, 217);
    pub const FG_DIM: Color = Color::Rgb(139, 148, 158);
    pub const FG_MUTED: Color = Color::Rgb(75, 82, 92);

    // Accents
    pub const ACCENT_BLUE: Color = Color::Rgb(88, 166, 255);
    pub const ACCENT_GREEN: Color = Color::Rgb(63, 185, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Titles (bold blue).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/placeholder text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The focused widget row.
    pub fn focus() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .bg(Color::Rgb(21, 28, 41))
            .add_modifier(Modifier::BOLD)
    }

    /// The banner under a fresh prediction.
    pub fn success() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }
}
