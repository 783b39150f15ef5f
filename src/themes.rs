//! Card theme registry.
//!
//! A fixed, ordered mapping from theme name to the style bundle the preview
//! and the exporter share. The registry is built once at startup and never
//! mutated; the UI only ever offers names taken from it, so lookup by an
//! unknown name is a bug in the caller, not a runtime condition.
//!
//! Adding a theme means adding one entry to `ThemeRegistry::builtin` - no
//! other component carries per-theme logic.

/// Base alpha of the accent circle; each theme scales it with its
/// `accent_opacity` level.
pub const ACCENT_BASE_ALPHA: f32 = 0.2;

/// Plain RGB color, shared by the TUI preview and the SVG exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#6366f1`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend towards `other`; `t` is clamped to 0..=1.
    pub fn lerp(&self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Visual style bundle for one card theme.
///
/// Everything theme-dependent about the card lives here: the renderers apply
/// these tokens and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct CardStyle {
    /// Card text color.
    pub text: Rgb,
    /// Surface gradient start (top-left).
    pub surface_from: Rgb,
    /// Surface gradient end (bottom-right).
    pub surface_to: Rgb,
    /// Opacity level of the accent circle.
    pub accent_opacity: f32,
    /// Chip (CVV pill) background color.
    pub chip_bg: Rgb,
    /// Chip background opacity over the surface.
    pub chip_opacity: f32,
    /// Chip text color.
    pub chip_text: Rgb,
}

/// A named card theme.
#[derive(Debug, Clone)]
pub struct CardTheme {
    pub name: &'static str,
    pub style: CardStyle,
}

/// Ordered, immutable set of card themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<CardTheme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// The built-in themes, in selector order.
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                CardTheme {
                    name: "Vibrant",
                    style: CardStyle {
                        text: Rgb::new(255, 255, 255),
                        surface_from: Rgb::new(99, 102, 241), // #6366f1 (indigo)
                        surface_to: Rgb::new(236, 72, 153),   // #ec4899 (pink)
                        accent_opacity: 0.7,
                        chip_bg: Rgb::new(255, 255, 255),
                        chip_opacity: 0.2,
                        chip_text: Rgb::new(255, 255, 255),
                    },
                },
                CardTheme {
                    name: "Midnight",
                    style: CardStyle {
                        text: Rgb::new(255, 255, 255),
                        surface_from: Rgb::new(30, 41, 59),  // #1e293b (slate)
                        surface_to: Rgb::new(71, 85, 105),   // #475569
                        accent_opacity: 0.6,
                        chip_bg: Rgb::new(255, 255, 255),
                        chip_opacity: 0.2,
                        chip_text: Rgb::new(255, 255, 255),
                    },
                },
                CardTheme {
                    name: "Glass",
                    style: CardStyle {
                        text: Rgb::new(15, 23, 42),           // #0f172a (slate, dark)
                        surface_from: Rgb::new(248, 250, 252), // #f8fafc
                        surface_to: Rgb::new(226, 232, 240),   // #e2e8f0
                        accent_opacity: 0.4,
                        chip_bg: Rgb::new(255, 255, 255),
                        chip_opacity: 0.4,
                        chip_text: Rgb::new(15, 23, 42),
                    },
                },
            ],
        }
    }

    /// Name of the first (default) theme.
    pub fn first_name(&self) -> &'static str {
        self.themes[0].name
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Style bundle for `name`.
    ///
    /// Panics on an unknown name: every name in circulation comes from this
    /// registry, so a miss is a caller bug.
    pub fn style(&self, name: &str) -> &CardStyle {
        self.themes
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.style)
            .unwrap_or_else(|| panic!("card theme {name:?} is not in the registry"))
    }

    /// Position of `name` in selector order, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.name == name)
    }

    /// Next/previous theme name relative to `name`, wrapping at both ends.
    /// An unknown starting name lands on the first theme.
    pub fn cycle(&self, name: &str, step: isize) -> &'static str {
        let len = self.themes.len() as isize;
        let at = self.position(name).unwrap_or(0) as isize;
        let next = (at + step).rem_euclid(len);
        self.themes[next as usize].name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let reg = ThemeRegistry::builtin();
        assert_eq!(reg.position("Vibrant"), Some(0));
        assert_eq!(reg.position("Midnight"), Some(1));
        assert_eq!(reg.position("Glass"), Some(2));
        assert_eq!(reg.first_name(), "Vibrant");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_style_lookup() {
        let reg = ThemeRegistry::builtin();
        let vibrant = reg.style("Vibrant");
        assert_eq!(vibrant.surface_from.hex(), "#6366f1");
        let glass = reg.style("Glass");
        assert_eq!(glass.chip_opacity, 0.4);
    }

    #[test]
    #[should_panic(expected = "not in the registry")]
    fn test_unknown_name_panics() {
        ThemeRegistry::builtin().style("Nope");
    }

    #[test]
    fn test_cycle_wraps() {
        let reg = ThemeRegistry::builtin();
        assert_eq!(reg.cycle("Vibrant", 1), "Midnight");
        assert_eq!(reg.cycle("Glass", 1), "Vibrant");
        assert_eq!(reg.cycle("Vibrant", -1), "Glass");
        assert_eq!(reg.cycle("Midnight", -1), "Vibrant");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), b); // clamped
    }
}
