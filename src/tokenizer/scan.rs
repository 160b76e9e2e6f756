use std::iter::Fuse;

use super::classify::{classify, CharClass};
use super::token::{Punct, Token};

/// Lazy tokenizer over a stream of characters.
///
/// Single forward pass, no lookahead. Yields the same sequence as [`tokenize`]
/// regardless of how the characters are chunked upstream.
#[derive(Debug, Clone)]
pub struct Tokens<I> {
    chars: Fuse<I>,
    word: String,
    /// Punctuation seen while a word was pending; emitted right after it.
    pending: Option<Punct>,
}

impl<I: Iterator<Item = char>> Tokens<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.fuse(),
            word: String::new(),
            pending: None,
        }
    }

    /// Emit the accumulated word lowercased and clear the buffer, keeping its
    /// allocation for the next word.
    fn flush_word(&mut self) -> Token {
        let token = Token::Word(self.word.to_lowercase());
        self.word.clear();
        token
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokens<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(p) = self.pending.take() {
            return Some(Token::Punctuation(p));
        }

        while let Some(c) = self.chars.next() {
            match classify(c) {
                CharClass::Whitespace => {
                    if !self.word.is_empty() {
                        return Some(self.flush_word());
                    }
                }
                CharClass::Punctuation(p) => {
                    if self.word.is_empty() {
                        return Some(Token::Punctuation(p));
                    }
                    self.pending = Some(p);
                    return Some(self.flush_word());
                }
                CharClass::Alphanumeric => self.word.push(c),
                CharClass::Other => {}
            }
        }

        // End of input: the trailing word keeps its original case.
        if self.word.is_empty() {
            None
        } else {
            Some(Token::Word(std::mem::take(&mut self.word)))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let (_, upper) = self.chars.size_hint();
        let tail = usize::from(!self.word.is_empty());
        (pending, upper.and_then(|n| n.checked_add(pending + tail)))
    }
}

/// Tokenize a whole buffer.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokens::new(text.chars()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        tokenize(text).iter().map(Token::to_string).collect()
    }

    #[test]
    fn test_tokenize_sentence_with_punctuation() {
        assert_eq!(lines("Hello, World!"), vec!["hello", ",", "world", "!"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(lines("  multiple   spaces  "), vec!["multiple", "spaces"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_only_input() {
        assert!(tokenize(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn test_tokenize_hyphen_splits_words() {
        assert_eq!(lines("a-b"), vec!["a", "-", "b"]);
    }

    /// Test that the word flushed at end of input keeps its case.
    #[test]
    fn test_tokenize_final_word_keeps_case() {
        assert_eq!(tokenize("CAPS"), vec![Token::Word("CAPS".to_string())]);
    }

    #[test]
    fn test_tokenize_final_word_after_other_words_keeps_case() {
        assert_eq!(lines("Big Bad WOLF"), vec!["big", "bad", "WOLF"]);
    }

    /// Test that a trailing newline makes the last word a regular, lowercased one.
    #[test]
    fn test_tokenize_word_before_trailing_whitespace_is_lowercased() {
        assert_eq!(lines("CAPS\n"), vec!["caps"]);
    }

    #[test]
    fn test_tokenize_word_before_trailing_punctuation_is_lowercased() {
        assert_eq!(lines("END."), vec!["end", "."]);
    }

    #[test]
    fn test_tokenize_digits_are_word_characters() {
        assert_eq!(lines("word1 word2."), vec!["word1", "word2", "."]);
    }

    /// Test that dropped characters neither end nor extend a word.
    #[test]
    fn test_tokenize_drops_unknown_without_breaking_word() {
        assert_eq!(lines("wo@rd "), vec!["word"]);
        assert_eq!(lines("it's done "), vec!["its", "done"]);
    }

    #[test]
    fn test_tokenize_unknown_only_input() {
        assert!(tokenize("@#$%^&*()?;:\u{1f600}").is_empty());
    }

    #[test]
    fn test_tokenize_consecutive_punctuation() {
        assert_eq!(lines("wait...!"), vec!["wait", ".", ".", ".", "!"]);
        assert_eq!(lines("--"), vec!["-", "-"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(lines("Größe Ärger, Ωmega "), vec!["größe", "ärger", ",", "ωmega"]);
    }

    /// Test that ASCII separator control characters end a word.
    #[test]
    fn test_tokenize_information_separator_splits_words() {
        assert_eq!(lines("a\u{1c}b"), vec!["a", "b"]);
        assert_eq!(lines("rec1\u{1e}rec2\u{1f}x "), vec!["rec1", "rec2", "x"]);
    }

    /// Test that combining vowel signs and viramas are dropped from words.
    #[test]
    fn test_tokenize_drops_combining_marks() {
        assert_eq!(lines("नमस्ते दुनिया "), vec!["नमसत", "दनय"]);
    }

    #[test]
    fn test_tokenize_punctuation_is_typed() {
        assert_eq!(
            tokenize("a,"),
            vec![Token::Word("a".to_string()), Token::Punctuation(Punct::Comma)]
        );
    }

    #[test]
    fn test_tokens_iterator_matches_tokenize() {
        let text = "One, two - THREE! four.five six";
        let streamed: Vec<Token> = Tokens::new(text.chars()).collect();
        assert_eq!(streamed, tokenize(text));
    }

    /// Test that chunk boundaries do not change the result.
    #[test]
    fn test_tokens_iterator_chunked_input_matches_whole_buffer() {
        let text = "Chunked input, split at awkward places. Really!";
        let chunks = [&text[..3], &text[3..17], &text[17..18], &text[18..]];
        let streamed: Vec<Token> =
            Tokens::new(chunks.iter().flat_map(|chunk| chunk.chars())).collect();
        assert_eq!(streamed, tokenize(text));
    }

    #[test]
    fn test_tokens_iterator_is_exhausted_after_final_flush() {
        let mut tokens = Tokens::new("tail".chars());
        assert_eq!(tokens.next(), Some(Token::Word("tail".to_string())));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    /// Test that an unbounded upstream hint yields no upper bound rather than
    /// overflowing.
    #[test]
    fn test_size_hint_saturating_upstream() {
        let chars = "a,".chars().chain(std::iter::repeat('x').take(usize::MAX));
        let mut tokens = Tokens::new(chars);
        assert_eq!(tokens.next(), Some(Token::Word("a".to_string())));
        assert_eq!(tokens.size_hint(), (1, None));
    }

    #[test]
    fn test_size_hint_upper_bound_holds() {
        let text = "a, b";
        let tokens = Tokens::new(text.chars());
        let (_, upper) = tokens.size_hint();
        assert!(upper.unwrap() >= tokenize(text).len());
    }
}
