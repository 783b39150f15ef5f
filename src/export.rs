//! PNG export of the card preview.
//!
//! Self-contained pipeline with no coupling to UI state: the caller hands in
//! an owned [`CardFace`] snapshot plus its style bundle, and gets back the
//! path of the written file. The scene is described as SVG, rasterized with
//! resvg into a tiny-skia pixel buffer at a fixed 2x scale, and encoded to
//! PNG with the `image` crate.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::face::{CardFace, BRAND_LABEL, HOLDER_LABEL, VALID_LABEL};
use crate::themes::{CardStyle, ACCENT_BASE_ALPHA};

/// Card size in logical units (the preview's aspect ratio).
pub const CARD_WIDTH: f32 = 360.0;
pub const CARD_HEIGHT: f32 = 220.0;

/// Raster scale factor. 2x keeps the output sharp on high-density displays.
pub const EXPORT_SCALE: f32 = 2.0;

/// Card padding in logical units.
const PAD: f32 = 24.0;

/// Errors that can occur while exporting.
///
/// All of these are non-fatal: the caller reports them and the app keeps
/// running.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build the card scene: {0}")]
    Scene(#[from] usvg::Error),
    #[error("failed to allocate a {0}x{1} pixel buffer")]
    Raster(u32, u32),
    #[error("failed to encode PNG: {0}")]
    Encode(String),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the card and write `virtual-card-<slug>.png` into `out_dir`.
///
/// `name_seed` is the raw cardholder name (not the placeholder-substituted
/// face value); blank seeds fall back to the literal `virtual-card`.
pub fn export_card(
    face: &CardFace,
    style: &CardStyle,
    out_dir: &Path,
    name_seed: &str,
) -> Result<PathBuf, ExportError> {
    let svg = card_svg(face, style);
    let png = rasterize_svg(&svg, EXPORT_SCALE)?;

    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name(name_seed));
    std::fs::write(&path, png)?;

    tracing::info!("Exported card to {}", path.display());
    Ok(path)
}

/// Download-style file name: `virtual-card-<slug>.png`.
pub fn file_name(name_seed: &str) -> String {
    format!("virtual-card-{}.png", slug(name_seed))
}

/// Lowercased, hyphen-joined cardholder name; `virtual-card` when blank.
fn slug(name_seed: &str) -> String {
    let words: Vec<&str> = name_seed.split_whitespace().collect();
    if words.is_empty() {
        return "virtual-card".to_string();
    }
    words.join("-").to_lowercase()
}

/// Build the SVG scene for the card.
///
/// Mirrors the preview layout: gradient surface with rounded corners, accent
/// circle and chip row on top, the number through the middle, cardholder and
/// expiry along the bottom edge.
fn card_svg(face: &CardFace, style: &CardStyle) -> String {
    let text = style.text.hex();
    let chip_text = style.chip_text.hex();
    let right = CARD_WIDTH - PAD;

    // Chip pill geometry; text metrics are not available here, so the pill
    // width is estimated from the character count at the 12px font size.
    let brand_width = 7.5 * BRAND_LABEL.chars().count() as f32;
    let pill_chars = face.cvv_tag.chars().count() as f32;
    let pill_w = 14.0 + 6.0 * pill_chars;
    let pill_h = 22.0;
    let pill_x = right - brand_width - 12.0 - pill_w;
    let pill_y = 26.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    // Surface: diagonal gradient, rounded corners
    svg.push_str(&format!(
        r#"<defs><linearGradient id="surface" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/></linearGradient></defs>"#,
        from = style.surface_from.hex(),
        to = style.surface_to.hex(),
    ));
    svg.push_str(&format!(
        r#"<rect width="{w}" height="{h}" rx="16" fill="url(#surface)"/>"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    // Accent circle, top-left
    svg.push_str(&format!(
        r##"<circle cx="40" cy="40" r="16" fill="#ffffff" opacity="{:.2}"/>"##,
        ACCENT_BASE_ALPHA * style.accent_opacity,
    ));

    // Chip pill + brand label, top-right
    svg.push_str(&format!(
        r#"<rect x="{pill_x:.1}" y="{pill_y}" width="{pill_w:.1}" height="{pill_h}" rx="6" fill="{bg}" opacity="{op:.2}"/>"#,
        bg = style.chip_bg.hex(),
        op = style.chip_opacity,
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.1}" y="{y}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="{chip_text}">{tag}</text>"#,
        x = pill_x + pill_w / 2.0,
        y = pill_y + 15.0,
        tag = xml_escape(&face.cvv_tag),
    ));
    svg.push_str(&format!(
        r#"<text x="{right}" y="43" text-anchor="end" font-family="sans-serif" font-size="13" fill="{text}" opacity="0.9">{brand}</text>"#,
        brand = BRAND_LABEL,
    ));

    // Number
    svg.push_str(&format!(
        r#"<text x="{PAD}" y="122" font-family="monospace" font-size="21" letter-spacing="3" fill="{text}">{number}</text>"#,
        number = xml_escape(&face.number),
    ));

    // Bottom row: cardholder on the left, expiry on the right
    svg.push_str(&format!(
        r#"<text x="{PAD}" y="166" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="{text}" opacity="0.8">{label}</text>"#,
        label = HOLDER_LABEL,
    ));
    svg.push_str(&format!(
        r#"<text x="{PAD}" y="186" font-family="sans-serif" font-size="15" font-weight="600" fill="{text}">{name}</text>"#,
        name = xml_escape(&face.name),
    ));
    svg.push_str(&format!(
        r#"<text x="{right}" y="166" text-anchor="end" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="{text}" opacity="0.8">{label}</text>"#,
        label = VALID_LABEL,
    ));
    svg.push_str(&format!(
        r#"<text x="{right}" y="186" text-anchor="end" font-family="sans-serif" font-size="15" font-weight="600" fill="{text}">{expiry}</text>"#,
        expiry = xml_escape(&face.expiry),
    ));

    svg.push_str("</svg>");
    svg
}

/// Parse and rasterize the scene at `scale`, returning PNG bytes.
fn rasterize_svg(svg: &str, scale: f32) -> Result<Vec<u8>, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)?;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Raster(width, height))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    encode_rgba_to_png(&pixmap)
}

/// Encode a premultiplied pixmap as PNG bytes.
fn encode_rgba_to_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img: image::RgbaImage =
        image::ImageBuffer::from_raw(pixmap.width(), pixmap.height(), rgba)
            .ok_or_else(|| ExportError::Encode("invalid RGBA buffer dimensions".into()))?;

    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    Ok(buf)
}

/// Escape text content for embedding in the SVG scene.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::CardDraft;
    use crate::themes::ThemeRegistry;
    use image::GenericImageView;

    #[test]
    fn test_slug() {
        assert_eq!(slug("John Doe"), "john-doe");
        assert_eq!(slug("  John   Doe "), "john-doe");
        assert_eq!(slug(""), "virtual-card");
        assert_eq!(slug("   "), "virtual-card");
        assert_eq!(slug("Ada"), "ada");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("  John   Doe "), "virtual-card-john-doe.png");
        assert_eq!(file_name(""), "virtual-card-virtual-card.png");
    }

    #[test]
    fn test_svg_contains_face_content() {
        let face = CardFace::compose(&CardDraft::sample());
        let registry = ThemeRegistry::builtin();
        let style = registry.style("Midnight");
        let svg = card_svg(&face, style);

        assert!(svg.contains("4444 3333 2222 1111"));
        assert!(svg.contains("John Doe"));
        assert!(svg.contains("12/34"));
        assert!(svg.contains("CVV: 123"));
        assert!(svg.contains("VIRTUAL"));
        assert!(svg.contains(&style.surface_from.hex()));
        assert!(svg.contains(&style.surface_to.hex()));
    }

    #[test]
    fn test_svg_escapes_name() {
        let mut draft = CardDraft::sample();
        draft.set_name("A <&> B");
        let face = CardFace::compose(&draft);
        let registry = ThemeRegistry::builtin();
        let style = registry.style("Vibrant");
        let svg = card_svg(&face, style);

        assert!(svg.contains("A &lt;&amp;&gt; B"));
        assert!(!svg.contains("A <&> B"));
    }

    #[test]
    fn test_rasterize_dimensions_and_magic() {
        let face = CardFace::compose(&CardDraft::sample());
        let registry = ThemeRegistry::builtin();
        let style = registry.style("Vibrant");
        let png = rasterize_svg(&card_svg(&face, style), EXPORT_SCALE).unwrap();

        // PNG magic bytes
        assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.dimensions(), (720, 440));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = std::env::temp_dir().join("cardsmith-export-test");
        let face = CardFace::compose(&CardDraft::sample());
        let registry = ThemeRegistry::builtin();
        let style = registry.style("Glass");

        let path = export_card(&face, style, &dir, "John Doe").unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("virtual-card-john-doe.png")
        );
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        std::fs::remove_file(&path).ok();
    }
}
