//! Pure projection of a [`CardDraft`] into the strings the card shows.
//!
//! Both the TUI preview widget and the SVG exporter consume a `CardFace`,
//! so the on-screen card and the exported image can never disagree about
//! content. Placeholders are applied here and nowhere else.

use crate::draft::CardDraft;

/// Placeholder shown for an empty card number.
pub const NUMBER_PLACEHOLDER: &str = "#### #### #### ####";
/// Placeholder shown for an empty cardholder name.
pub const NAME_PLACEHOLDER: &str = "Your Name";
/// Placeholder shown for an empty expiry.
pub const EXPIRY_PLACEHOLDER: &str = "MM/YY";
/// Placeholder shown for an empty CVV.
pub const CVV_PLACEHOLDER: &str = "---";

/// Brand label in the card's top-right corner.
pub const BRAND_LABEL: &str = "VIRTUAL";
/// Label above the cardholder name.
pub const HOLDER_LABEL: &str = "CARDHOLDER";
/// Label above the expiry.
pub const VALID_LABEL: &str = "VALID THRU";

/// Display-ready card content. Owned strings so a snapshot can be handed to
/// the export worker without borrowing the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    pub number: String,
    pub name: String,
    pub expiry: String,
    /// The chip line, always in `CVV: <value>` form.
    pub cvv_tag: String,
}

impl CardFace {
    /// Project the draft, substituting placeholders for empty fields.
    pub fn compose(draft: &CardDraft) -> Self {
        let or = |value: &str, placeholder: &str| {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            number: or(&draft.number, NUMBER_PLACEHOLDER),
            name: or(&draft.name, NAME_PLACEHOLDER),
            expiry: or(&draft.expiry, EXPIRY_PLACEHOLDER),
            cvv_tag: format!("CVV: {}", or(&draft.cvv, CVV_PLACEHOLDER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_draft() -> CardDraft {
        let mut draft = CardDraft::default();
        draft.set_name("");
        draft.set_number("");
        draft.set_expiry("");
        draft.set_cvv("");
        draft
    }

    #[test]
    fn test_placeholders_for_empty_fields() {
        let face = CardFace::compose(&empty_draft());
        assert_eq!(face.number, "#### #### #### ####");
        assert_eq!(face.name, "Your Name");
        assert_eq!(face.expiry, "MM/YY");
        assert_eq!(face.cvv_tag, "CVV: ---");
    }

    #[test]
    fn test_filled_fields_pass_through() {
        let face = CardFace::compose(&CardDraft::sample());
        assert_eq!(face.number, "4444 3333 2222 1111");
        assert_eq!(face.name, "John Doe");
        assert_eq!(face.expiry, "12/34");
        assert_eq!(face.cvv_tag, "CVV: 123");
    }

    #[test]
    fn test_projection_is_pure() {
        let draft = CardDraft::sample();
        assert_eq!(CardFace::compose(&draft), CardFace::compose(&draft));
    }
}
