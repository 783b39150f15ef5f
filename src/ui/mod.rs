//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw.rs` - Main draw functions
//! - `theme.rs` - Chrome color themes and presets
//! - `card_preview.rs` - Card preview widget

pub mod card_preview;
mod draw;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use card_preview::CardPreview;
pub use theme::Theme;
