//! Card preview widget.
//!
//! Renders a [`CardFace`] into the terminal buffer: diagonal surface
//! gradient, accent dot, chip row (CVV pill + brand label), the number
//! through the middle and the cardholder/expiry row along the bottom.
//!
//! All colors come from the active theme's style bundle; the terminal has no
//! alpha channel, so translucency is approximated by blending against the
//! local surface color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::face::{CardFace, BRAND_LABEL, HOLDER_LABEL, VALID_LABEL};
use crate::themes::{CardStyle, Rgb, ACCENT_BASE_ALPHA};

/// Preview size in cells, roughly the 360x220 card at terminal cell aspect.
pub const CARD_COLS: u16 = 44;
pub const CARD_ROWS: u16 = 12;

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Card preview widget
pub struct CardPreview<'a> {
    face: &'a CardFace,
    style: &'a CardStyle,
}

impl<'a> CardPreview<'a> {
    pub fn new(face: &'a CardFace, style: &'a CardStyle) -> Self {
        Self { face, style }
    }
}

impl<'a> Widget for CardPreview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 6 {
            return;
        }

        // Surface gradient
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(to_color(surface_at(self.style, area, x, y)));
                }
            }
        }

        let left = area.x + 2;
        let right_margin = 2u16;

        // Top row: accent dot left, chip pill + brand right
        let top = area.y + 1;
        let accent_alpha = ACCENT_BASE_ALPHA * self.style.accent_opacity;
        put_text(buf, self.style, area, left, top, "●", TextFill::Faded(WHITE, accent_alpha), false);

        let brand_w = BRAND_LABEL.width() as u16;
        let brand_x = area.x + area.width - right_margin - brand_w;
        put_text(buf, self.style, area, brand_x, top, BRAND_LABEL, TextFill::Faded(self.style.text, 0.9), false);

        let pill = format!(" {} ", self.face.cvv_tag);
        let pill_w = pill.width() as u16;
        let pill_x = brand_x.saturating_sub(2 + pill_w);
        put_text(buf, self.style, area, pill_x, top, &pill, TextFill::Chip, false);

        // Number
        let number_y = area.y + area.height / 2 - 1;
        let number = truncate(&self.face.number, (area.width - 4) as usize);
        put_text(buf, self.style, area, left, number_y, &number, TextFill::Solid(self.style.text), true);

        // Bottom rows: labels, then values
        let label_y = area.y + area.height - 4;
        let value_y = area.y + area.height - 3;

        put_text(buf, self.style, area, left, label_y, HOLDER_LABEL, TextFill::Faded(self.style.text, 0.8), false);
        let name = truncate(&self.face.name, (area.width - 4) as usize);
        put_text(buf, self.style, area, left, value_y, &name, TextFill::Solid(self.style.text), true);

        let valid_x = area.x + area.width - right_margin - VALID_LABEL.width() as u16;
        put_text(buf, self.style, area, valid_x, label_y, VALID_LABEL, TextFill::Faded(self.style.text, 0.8), false);
        let expiry_x = area.x + area.width - right_margin - self.face.expiry.width() as u16;
        put_text(buf, self.style, area, expiry_x, value_y, &self.face.expiry, TextFill::Solid(self.style.text), true);
    }
}

/// How a run of text sits on the surface.
#[derive(Clone, Copy)]
enum TextFill {
    /// Full-strength foreground on the gradient.
    Solid(Rgb),
    /// Foreground blended towards the local surface color.
    Faded(Rgb, f32),
    /// Chip pill: composited chip background, chip text color.
    Chip,
}

/// Surface gradient color at an absolute cell position.
fn surface_at(style: &CardStyle, area: Rect, x: u16, y: u16) -> Rgb {
    let dx = (x - area.x) as f32 / area.width.saturating_sub(1).max(1) as f32;
    let dy = (y - area.y) as f32 / area.height.saturating_sub(1).max(1) as f32;
    style.surface_from.lerp(style.surface_to, (dx + dy) / 2.0)
}

/// Write `text` starting at (x, y), styling each cell against the gradient
/// underneath it. Stops at the card edge.
fn put_text(
    buf: &mut Buffer,
    style: &CardStyle,
    area: Rect,
    x: u16,
    y: u16,
    text: &str,
    fill: TextFill,
    bold: bool,
) {
    if y >= area.y + area.height {
        return;
    }

    let mut cx = x;
    for c in text.chars() {
        let w = c.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if cx < area.x {
            cx += w;
            continue;
        }
        if cx + w > area.x + area.width {
            break;
        }

        let surface = surface_at(style, area, cx, y);
        let (fg, bg) = match fill {
            TextFill::Solid(color) => (color, surface),
            TextFill::Faded(color, alpha) => (surface.lerp(color, alpha), surface),
            TextFill::Chip => (
                style.chip_text,
                surface.lerp(style.chip_bg, style.chip_opacity),
            ),
        };

        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_symbol(c.to_string().as_str());
            let mut cell_style = Style::default().fg(to_color(fg)).bg(to_color(bg));
            if bold {
                cell_style = cell_style.add_modifier(Modifier::BOLD);
            }
            cell.set_style(cell_style);
        }
        cx += w;
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::CardDraft;
    use crate::themes::ThemeRegistry;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_preview(draft: &CardDraft) -> Buffer {
        let face = CardFace::compose(draft);
        let registry = ThemeRegistry::builtin();
        let style = *registry.style(&draft.theme);

        let mut terminal = Terminal::new(TestBackend::new(CARD_COLS, CARD_ROWS)).unwrap();
        terminal
            .draw(|f| f.render_widget(CardPreview::new(&face, &style), f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_placeholders_render() {
        let mut draft = CardDraft::default();
        draft.set_name("");
        draft.set_number("");
        draft.set_expiry("");
        draft.set_cvv("");

        let text = buffer_text(&render_preview(&draft));
        assert!(text.contains("#### #### #### ####"));
        assert!(text.contains("Your Name"));
        assert!(text.contains("MM/YY"));
        assert!(text.contains("CVV: ---"));
        assert!(text.contains("VIRTUAL"));
    }

    #[test]
    fn test_sample_renders() {
        let text = buffer_text(&render_preview(&CardDraft::sample()));
        assert!(text.contains("4444 3333 2222 1111"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("CVV: 123"));
        assert!(text.contains("CARDHOLDER"));
        assert!(text.contains("VALID THRU"));
    }

    #[test]
    fn test_gradient_spans_surface() {
        let buf = render_preview(&CardDraft::sample());
        let top_left = buf.cell((0, 0)).unwrap().bg;
        let bottom_right = buf
            .cell((CARD_COLS - 1, CARD_ROWS - 1))
            .unwrap()
            .bg;
        assert_ne!(top_left, bottom_right);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
    }
}
