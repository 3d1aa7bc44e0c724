//! Utility functions for classifying unicode characters
use unicode_general_category::{get_general_category, GeneralCategory};

pub const ZERO_WIDTH_NON_JOINER: char = '\u{200c}';
/// Joins the characters on either side of it into a single unit, as in emoji sequences.
pub const ZERO_WIDTH_JOINER: char = '\u{200d}';

/// How a character is treated when splitting non-ASCII text ahead of dictionary matching.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharKind {
    /// Separates tokens and is dropped.
    Space,
    /// Always a token of its own. Also covers control and format characters.
    Punct,
    /// Cased letters and numbers. Consecutive characters form a single token.
    Alnum,
    /// Attaches to the preceding character.
    Modifier,
    /// Ideographs, kana, and other uncased letters, which are left to the dictionary.
    Word,
}

impl CharKind {
    /// Classifies a character by its general category.
    pub fn of(c: char) -> CharKind {
        use GeneralCategory::*;
        if c.is_whitespace() {
            return CharKind::Space;
        }
        if is_modifier(c) || c == ZERO_WIDTH_NON_JOINER || c == ZERO_WIDTH_JOINER {
            return CharKind::Modifier;
        }
        match get_general_category(c) {
            SpaceSeparator | LineSeparator | ParagraphSeparator => CharKind::Space,
            Control | Format | ConnectorPunctuation | DashPunctuation | OpenPunctuation
            | ClosePunctuation | InitialPunctuation | FinalPunctuation | OtherPunctuation
            | MathSymbol | CurrencySymbol | OtherSymbol => CharKind::Punct,
            UppercaseLetter | LowercaseLetter | TitlecaseLetter | DecimalNumber
            | LetterNumber | OtherNumber => CharKind::Alnum,
            _ => CharKind::Word,
        }
    }
}

/// Checks if a character is a base character or a modifier. A character is considered a modifier
/// if it is in one of the following unicode classes:
/// - Lm (Letter, Modifier)
/// - Mc (Mark, Spacing Combining)
/// - Me (Mark, Enclosing)
/// - Mn (Mark, Non-Spacing)
/// - Sk (Symbol, Modifier)
/// Or, if it is a superscript or subscript
pub fn is_modifier(c: char) -> bool {
    matches!(c,
        // check against superscript 1, 2, and 3
        '\u{b9}' | '\u{b2}' | '\u{b3}'
        // check against superscripts and subscripts block
        | '\u{2070}'..='\u{209f}'
    ) ||
        // otherwise, check if c is in the named classes
        matches!(get_general_category(c),
            GeneralCategory::ModifierLetter
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::NonspacingMark
            | GeneralCategory::ModifierSymbol
        )
}
