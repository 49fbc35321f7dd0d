//! Terminal colorization for cleanup listings
//!
//! Applies ANSI escape codes using crossterm.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Role of a line in cleanup output, mapped to a color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    /// A file that will be removed: Yellow
    Candidate,
    /// A file that was removed: Green
    Deleted,
    /// A file that could not be removed: Red
    Failed,
    /// Totals and headers: Cyan
    Summary,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Candidate => Color::Yellow,
            Tone::Deleted => Color::Green,
            Tone::Failed => Color::Red,
            Tone::Summary => Color::Cyan,
        }
    }
}

/// Colorizes text when enabled, passes it through otherwise
#[derive(Copy, Clone, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enable colors only when stdout is a terminal and NO_COLOR is unset
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::new(false);
        }
        Self::new(std::io::stdout().is_tty())
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            format!("{}", text.with(tone.color()))
        } else {
            text.to_string()
        }
    }
}
