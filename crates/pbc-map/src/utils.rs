//! Text normalization shared by the scorers and column detection.

/// Canonicalizes free text for comparison.
///
/// Lowercases, replaces every character other than alphanumerics,
/// whitespace, `-` and `/` with a space, collapses whitespace runs and
/// trims. "A/C" keeps its slash while "P&M" becomes "p m", so both sides
/// of a comparison split on the same boundaries. Never fails: empty,
/// punctuation-only and non-Latin input all produce a (possibly empty)
/// string, and the result is a fixed point.
pub fn normalize_text(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch.is_whitespace() || ch == '-' || ch == '/' {
                ch
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace tokens sorted and re-joined with single spaces.
pub(crate) fn sorted_tokens(normalized: &str) -> String {
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_text("  Sundry   Debtors "), "sundry debtors");
        assert_eq!(normalize_text("Bank - SBI Current A/C"), "bank - sbi current a/c");
    }

    #[test]
    fn test_normalize_replaces_punctuation() {
        assert_eq!(normalize_text("P&M"), "p m");
        assert_eq!(normalize_text("Cash."), "cash");
        assert_eq!(normalize_text("(Rent), Office"), "rent office");
        assert_eq!(normalize_text("under_score"), "under score");
    }

    #[test]
    fn test_normalize_degenerate_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("&&!!"), "");
    }

    #[test]
    fn test_normalize_keeps_non_latin_letters() {
        assert_eq!(normalize_text("КАССА  Банк"), "касса банк");
        assert_eq!(normalize_text("ÉQUIPEMENT"), "équipement");
    }

    #[test]
    fn test_sorted_tokens() {
        assert_eq!(sorted_tokens("current account sbi"), "account current sbi");
        assert_eq!(sorted_tokens(""), "");
    }
}
