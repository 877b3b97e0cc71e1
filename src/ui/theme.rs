use fltk::enums::Color;

use crate::app::highlight::TokenPalette;
use crate::app::report::{Priority, Severity};

/// Color source for both themes, including the token palette used by the
/// JSON highlighter. Widgets are built with these colors; toggling the
/// theme rebuilds the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn window_bg(&self) -> Color {
        if self.dark {
            Color::from_rgb(25, 25, 25)
        } else {
            Color::from_rgb(240, 240, 240)
        }
    }

    pub fn menu_bg(&self) -> Color {
        if self.dark {
            Color::from_rgb(35, 35, 35)
        } else {
            Color::from_rgb(240, 240, 240)
        }
    }

    pub fn card_bg(&self) -> Color {
        if self.dark {
            Color::from_rgb(38, 38, 42)
        } else {
            Color::White
        }
    }

    pub fn text(&self) -> Color {
        if self.dark {
            Color::from_rgb(220, 220, 220)
        } else {
            Color::from_rgb(30, 30, 30)
        }
    }

    pub fn muted_text(&self) -> Color {
        if self.dark {
            Color::from_rgb(150, 150, 150)
        } else {
            Color::from_rgb(100, 100, 100)
        }
    }

    /// Header banner, loosely the original report's violet gradient.
    pub fn header_bg(&self) -> Color {
        if self.dark {
            Color::from_rgb(52, 58, 96)
        } else {
            Color::from_rgb(102, 126, 234)
        }
    }

    pub fn header_text(&self) -> Color {
        Color::White
    }

    /// Backdrop behind the raw-data viewer card.
    pub fn backdrop(&self) -> Color {
        Color::from_rgb(18, 18, 22)
    }

    /// Acknowledgment green of the copy button.
    pub fn copy_ack(&self) -> Color {
        Color::from_rgb(40, 167, 69)
    }

    pub fn accent(&self) -> Color {
        if self.dark {
            Color::from_rgb(90, 110, 200)
        } else {
            Color::from_rgb(102, 126, 234)
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Critical => Color::from_rgb(220, 53, 69),
            Severity::Warning => Color::from_rgb(255, 143, 0),
            Severity::Info => Color::from_rgb(23, 162, 184),
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => Color::from_rgb(220, 53, 69),
            Priority::Medium => Color::from_rgb(255, 143, 0),
            Priority::Low => Color::from_rgb(40, 167, 69),
        }
    }

    /// Background and text hex colors for the raw-data viewer body.
    pub fn viewer_colors(&self) -> (&'static str, &'static str) {
        if self.dark {
            ("#1e1e1e", "#d4d4d4")
        } else {
            ("#fdfdfd", "#1e1e1e")
        }
    }

    pub fn token_palette(&self) -> TokenPalette {
        if self.dark {
            TokenPalette {
                key: "#9cdcfe",
                string: "#ce9178",
                number: "#b5cea8",
                boolean: "#569cd6",
                null: "#c586c0",
            }
        } else {
            TokenPalette {
                key: "#0451a5",
                string: "#a31515",
                number: "#098658",
                boolean: "#0000ff",
                null: "#795e26",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_ne!(
            Theme::new(true).token_palette(),
            Theme::new(false).token_palette()
        );
    }

    #[test]
    fn test_priority_follows_severity_colors() {
        let theme = Theme::new(false);
        assert_eq!(
            theme.priority_color(Priority::High),
            theme.severity_color(Severity::Critical)
        );
        assert_eq!(
            theme.priority_color(Priority::Medium),
            theme.severity_color(Severity::Warning)
        );
    }
}
