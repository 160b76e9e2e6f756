use super::token::Punct;
use unicode_general_category::{get_general_category, GeneralCategory};

/// How the tokenizer treats a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Punctuation(Punct),
    Alphanumeric,
    Other,
}

/// Classify `c`. Checked in order: whitespace, punctuation, alphanumeric.
pub fn classify(c: char) -> CharClass {
    if is_separator(c) {
        CharClass::Whitespace
    } else if let Some(p) = Punct::from_char(c) {
        CharClass::Punctuation(p)
    } else if is_word_char(c) {
        CharClass::Alphanumeric
    } else {
        CharClass::Other
    }
}

/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which carry bidi class B/S and split words too.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Letters and numbers by general category (L* and N*).
///
/// Narrower than `char::is_alphanumeric`: combining marks that are
/// `Other_Alphabetic` (vowel signs, viramas) are not word characters.
fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;

    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}
