//! The in-memory card being designed.
//!
//! `CardDraft` is the single source of truth: every UI element is a
//! projection of it, and every field mutates independently through its
//! setter. Nothing here is persisted; closing the app discards the draft.

use crate::format::{format_card_number, format_cvv, format_expiry};
use crate::themes::ThemeRegistry;

/// Maximum cardholder name length in characters.
pub const NAME_MAX_CHARS: usize = 26;

/// The five editable fields.
///
/// Setters for number/expiry/cvv route through the formatters, so the
/// digit-and-separator invariant holds no matter what the caller feeds in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    /// Always a valid `ThemeRegistry` name.
    pub theme: String,
}

impl Default for CardDraft {
    /// Startup values: a pre-filled demo card on the first theme.
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            number: "1234 5678 9012 3456".to_string(),
            expiry: "12/34".to_string(),
            cvv: "123".to_string(),
            theme: ThemeRegistry::builtin().first_name().to_string(),
        }
    }
}

impl CardDraft {
    /// The fixed sample card. Loaded as one atomic replacement of all five
    /// fields - callers assign the whole struct, never field by field.
    pub fn sample() -> Self {
        Self {
            name: "John Doe".to_string(),
            number: "4444 3333 2222 1111".to_string(),
            expiry: "12/34".to_string(),
            cvv: "123".to_string(),
            theme: "Midnight".to_string(),
        }
    }

    /// Set the cardholder name, capped at [`NAME_MAX_CHARS`] characters.
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.chars().take(NAME_MAX_CHARS).collect();
    }

    pub fn set_number(&mut self, raw: &str) {
        self.number = format_card_number(raw);
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = format_expiry(raw);
    }

    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = format_cvv(raw);
    }

    /// Set the theme. The caller guarantees `name` came from the registry.
    pub fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
    }
}
