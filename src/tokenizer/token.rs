use std::fmt;

/// One of the four punctuation marks that become tokens of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    Period,
    Exclamation,
    Comma,
    Hyphen,
}

impl Punct {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Punct::Period),
            '!' => Some(Punct::Exclamation),
            ',' => Some(Punct::Comma),
            '-' => Some(Punct::Hyphen),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Punct::Period => '.',
            Punct::Exclamation => '!',
            Punct::Comma => ',',
            Punct::Hyphen => '-',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Punct::Period => ".",
            Punct::Exclamation => "!",
            Punct::Comma => ",",
            Punct::Hyphen => "-",
        }
    }
}

/// A single output token; written to the sink as one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of alphanumeric characters. Lowercased, except when it is the
    /// trailing word flushed at end of input.
    Word(String),
    Punctuation(Punct),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(text) => text,
            Token::Punctuation(p) => p.as_str(),
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Punctuation(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Punct> for Token {
    fn from(p: Punct) -> Self {
        Token::Punctuation(p)
    }
}
