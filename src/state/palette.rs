//! Field palette defaults

use super::model::{FieldDraft, FieldKind};

/// Options seeded into a freshly added choice field
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

impl FieldDraft {
    /// Draft a palette click adds to the form
    pub fn from_palette(kind: FieldKind) -> Self {
        let label = kind.label();
        let placeholder = match kind {
            FieldKind::Textarea => "Enter your message...".to_string(),
            _ => format!("Enter {}...", label.to_lowercase()),
        };

        let draft = FieldDraft::new(kind, label).placeholder(&placeholder).step(1);
        if kind.is_choice() {
            draft.options(DEFAULT_OPTIONS)
        } else {
            draft
        }
    }
}

/// One draft per field kind, in palette order
pub fn palette() -> Vec<FieldDraft> {
    FieldKind::ALL.into_iter().map(FieldDraft::from_palette).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_covers_every_kind() {
        let kinds: Vec<_> = palette().into_iter().map(|d| d.kind).collect();
        assert_eq!(kinds, FieldKind::ALL.to_vec());
    }

    #[test]
    fn test_choice_drafts_get_three_options() {
        let draft = FieldDraft::from_palette(FieldKind::Radio);
        assert_eq!(
            draft.options,
            Some(vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string()
            ])
        );
    }

    #[test]
    fn test_plain_drafts_have_no_options() {
        assert!(FieldDraft::from_palette(FieldKind::Email).options.is_none());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            FieldDraft::from_palette(FieldKind::Textarea).placeholder.as_deref(),
            Some("Enter your message...")
        );
        assert_eq!(
            FieldDraft::from_palette(FieldKind::Date).placeholder.as_deref(),
            Some("Enter date picker...")
        );
    }

    #[test]
    fn test_drafts_default_to_first_step_and_optional() {
        let draft = FieldDraft::from_palette(FieldKind::Text);
        assert_eq!(draft.step, Some(1));
        assert!(!draft.required);
        assert_eq!(draft.label, "Text Input");
    }
}
