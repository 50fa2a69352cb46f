use crate::config::THEME_NAMES;
use crate::model::LineKind;
use ratatui::style::{Color, Modifier, Style};

/// Colors for the landing terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // Screen
    pub bg: Color,
    pub fg: Color,

    // Line kinds
    pub input_echo_fg: Color,
    pub system_fg: Color,
    pub header_fg: Color,
    pub error_fg: Color,
    pub success_fg: Color,
    pub emphasis_fg: Color,

    // Chrome
    pub title_fg: Color,
    pub title_bg: Color,
    pub prompt_fg: Color,
    pub booting_fg: Color,
}

impl Theme {
    /// Green phosphor
    pub fn matrix() -> Self {
        Self {
            name: "matrix".to_string(),

            bg: Color::Rgb(0, 0, 0),
            fg: Color::Rgb(0, 200, 70),

            input_echo_fg: Color::Rgb(180, 255, 200),
            system_fg: Color::Rgb(0, 150, 55),
            header_fg: Color::Rgb(0, 255, 100),
            error_fg: Color::Rgb(255, 80, 80),
            success_fg: Color::Rgb(80, 255, 120),
            emphasis_fg: Color::Rgb(220, 255, 120),

            title_fg: Color::Rgb(0, 0, 0),
            title_bg: Color::Rgb(0, 200, 70),
            prompt_fg: Color::Rgb(0, 255, 100),
            booting_fg: Color::Rgb(0, 120, 45),
        }
    }

    /// Amber monochrome
    pub fn amber() -> Self {
        Self {
            name: "amber".to_string(),

            bg: Color::Rgb(20, 12, 0),
            fg: Color::Rgb(255, 176, 0),

            input_echo_fg: Color::Rgb(255, 220, 140),
            system_fg: Color::Rgb(200, 130, 0),
            header_fg: Color::Rgb(255, 200, 60),
            error_fg: Color::Rgb(255, 90, 40),
            success_fg: Color::Rgb(255, 210, 90),
            emphasis_fg: Color::Rgb(255, 235, 180),

            title_fg: Color::Rgb(20, 12, 0),
            title_bg: Color::Rgb(255, 176, 0),
            prompt_fg: Color::Rgb(255, 200, 60),
            booting_fg: Color::Rgb(150, 100, 0),
        }
    }

    /// Terminal default colors, distinguished by modifiers only
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),

            bg: Color::Reset,
            fg: Color::Reset,

            input_echo_fg: Color::Reset,
            system_fg: Color::DarkGray,
            header_fg: Color::Reset,
            error_fg: Color::Reset,
            success_fg: Color::Reset,
            emphasis_fg: Color::Reset,

            title_fg: Color::Reset,
            title_bg: Color::Reset,
            prompt_fg: Color::Reset,
            booting_fg: Color::DarkGray,
        }
    }

    /// Look a theme up by name. Unknown names fall back to `matrix`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "amber" => Self::amber(),
            "mono" => Self::mono(),
            "matrix" => Self::matrix(),
            other => {
                tracing::warn!("Unknown theme '{}', using matrix", other);
                Self::matrix()
            }
        }
    }

    pub fn available_themes() -> Vec<String> {
        THEME_NAMES.iter().map(|s| s.to_string()).collect()
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .bg(self.title_bg)
            .add_modifier(Modifier::BOLD | self.reverse_for_mono())
    }

    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.prompt_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for one output line
    pub fn style_for(&self, kind: LineKind) -> Style {
        let base = self.base_style();
        match kind {
            LineKind::InputEcho => base.fg(self.input_echo_fg).add_modifier(Modifier::BOLD),
            LineKind::System => base.fg(self.system_fg).add_modifier(Modifier::DIM),
            LineKind::Header => base.fg(self.header_fg).add_modifier(Modifier::BOLD),
            LineKind::Error => base.fg(self.error_fg).add_modifier(Modifier::BOLD),
            LineKind::Success => base.fg(self.success_fg),
            LineKind::Emphasis => base.fg(self.emphasis_fg).add_modifier(Modifier::ITALIC),
            LineKind::Plain => base,
        }
    }

    // Mono has no colors to tell the title bar apart, so it is drawn reversed
    fn reverse_for_mono(&self) -> Modifier {
        if self.title_bg == Color::Reset {
            Modifier::REVERSED
        } else {
            Modifier::empty()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}
