//! Two-rune ligatures that are laid out as a single glyph.

/// Every pair the layout merges into one glyph
pub const LIGATURES: [&str; 10] = ["->", "=>", "<-", "<=", "==", "!=", "&&", "||", "++", "--"];

/// True if `first` followed by `second` renders as one ligature glyph
pub fn is_ligature(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('-', '>')
            | ('=', '>')
            | ('<', '-')
            | ('<', '=')
            | ('=', '=')
            | ('!', '=')
            | ('&', '&')
            | ('|', '|')
            | ('+', '+')
            | ('-', '-')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_agrees_with_table() {
        for lig in LIGATURES {
            let mut chars = lig.chars();
            let (a, b) = (chars.next().unwrap(), chars.next().unwrap());
            assert!(is_ligature(a, b), "{lig} should be a ligature");
        }
    }

    #[test]
    fn test_non_ligatures() {
        assert!(!is_ligature('>', '-'));
        assert!(!is_ligature('=', '<'));
        assert!(!is_ligature('a', 'b'));
        assert!(!is_ligature('-', ' '));
    }
}
