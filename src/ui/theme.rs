//! Chrome theme for the terminal UI.
//!
//! These colors style the form, panels and status bar around the card
//! preview. The card itself is styled by the card theme registry, not by
//! this palette.

use ratatui::style::Color;

/// Chrome colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Accent color (borders, highlights)
    pub accent: Color,
    /// Border/label color of the focused input
    pub input_focus: Color,
    /// Dimmed text (hints, secondary info)
    pub dimmed: Color,
    /// More dimmed text (labels, tertiary info)
    pub dimmed_alt: Color,
    /// Status color for a successful export
    pub success: Color,
    /// Status color for a failed export
    pub failure: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    /// Slate theme - default
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),      // #0d1116
            foreground: Color::Rgb(229, 234, 241),   // #e5eaf1
            accent: Color::Rgb(180, 83, 9),          // #b45309 (amber)
            input_focus: Color::Rgb(180, 83, 9),     // #b45309
            dimmed: Color::Rgb(156, 163, 175),       // #9ca3af
            dimmed_alt: Color::Rgb(107, 114, 128),   // #6b7280
            success: Color::Rgb(34, 197, 94),        // #22c55e
            failure: Color::Rgb(239, 68, 68),        // #ef4444
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),      // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),   // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),       // #88c0d0 (nord8)
            input_focus: Color::Rgb(235, 203, 139),  // #ebcb8b (nord13)
            dimmed: Color::Rgb(216, 222, 233),       // #d8dee9 (nord4)
            dimmed_alt: Color::Rgb(76, 86, 106),     // #4c566a (nord3)
            success: Color::Rgb(163, 190, 140),      // #a3be8c (nord14)
            failure: Color::Rgb(191, 97, 106),       // #bf616a (nord11)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "slate" | "default" => Some(Self::slate()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("slate").is_some());
        assert!(Theme::from_preset("default").is_some());
        assert!(Theme::from_preset("NORD").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }
}
