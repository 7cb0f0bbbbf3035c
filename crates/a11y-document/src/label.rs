//! Human-readable labels for document and directory names.
//!
//! Names come from file stems and directory names such as `alert-notification`. Labels
//! replace hyphens with spaces and title-case each word: `Alert Notification`.

/// Markdown extension stripped from the end of a name before labelling.
const MD_SUFFIX: &str = ".md";

/// Formats a file or directory name as a readable label.
///
/// The algorithm:
/// 1. Replace every hyphen with a space
/// 2. Strip a trailing `.md` if present
/// 3. Title-case: a letter following a non-letter (or starting the name) is upper-cased,
///    every other letter is lower-cased
///
/// Non-letters are kept as-is, so `tab_bar` becomes `Tab_Bar` and `2fa` becomes `2Fa`.
pub fn format_label(name: &str) -> String {
    let spaced = name.replace('-', " ");
    let stem = spaced.strip_suffix(MD_SUFFIX).unwrap_or(&spaced);

    let mut label = String::with_capacity(stem.len());
    let mut at_word_start = true;
    for c in stem.chars() {
        if at_word_start {
            label.extend(c.to_uppercase());
        } else {
            label.extend(c.to_lowercase());
        }
        at_word_start = !c.is_alphabetic();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_label() {
        assert_eq!(format_label("modal-dialog"), "Modal Dialog");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_label("button"), "Button");
    }

    #[test]
    fn test_strips_md_suffix() {
        assert_eq!(format_label("alert-notification.md"), "Alert Notification");
    }

    #[test]
    fn test_lowercases_rest_of_word() {
        assert_eq!(format_label("iOS-developer-NOTES"), "Ios Developer Notes");
    }

    #[test]
    fn test_digits_and_punctuation() {
        assert_eq!(format_label("how-to-test"), "How To Test");
        assert_eq!(format_label("h1-heading"), "H1 Heading");
        assert_eq!(format_label("checkbox-(group)"), "Checkbox (Group)");
        assert_eq!(format_label("2fa-code"), "2Fa Code");
    }

    #[test]
    fn test_words_start_after_any_non_letter() {
        assert_eq!(format_label("tab_bar"), "Tab_Bar");
        assert_eq!(format_label("don't-panic"), "Don'T Panic");
        assert_eq!(format_label("v2beta"), "V2Beta");
    }

    #[test]
    fn test_consecutive_hyphens_keep_spacing() {
        assert_eq!(format_label("skip--link"), "Skip  Link");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_label(""), "");
    }
}
