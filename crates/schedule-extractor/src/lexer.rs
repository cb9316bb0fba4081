//! Tokenizer for availability text.
//!
//! Splits lowercased input into words, numbers, colons and other punctuation.
//! Whitespace only separates tokens; every token keeps its byte span so the
//! rules can tell `20h` (adjacent) from `20 h` (not adjacent).

/// The kind of a lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of alphabetic characters. `segunda-feira` style compounds stay whole.
    Word(String),
    /// A run of ASCII digits, leading zeros preserved.
    Number(String),
    Colon,
    Punct(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Token {
    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_word(&self, expected: &str) -> bool {
        self.word() == Some(expected)
    }

    pub fn is_colon(&self) -> bool {
        self.kind == TokenKind::Colon
    }

    /// True when `self` starts exactly where `prev` ends.
    pub fn follows(&self, prev: &Token) -> bool {
        self.start == prev.end
    }
}

const FEIRA_SUFFIX: &str = "-feira";

/// Tokenize `text`. The caller lowercases first; the lexer does not fold case.
///
/// A letter run glued to a preceding number and starting with `h` is split
/// into the hour suffix and the remainder, so `20has23h` lexes as
/// `20`, `h`, `as`, `23`, `h`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        if c.is_ascii_digit() {
            let end = scan_while(text, pos, |c| c.is_ascii_digit());
            tokens.push(Token {
                kind: TokenKind::Number(text[pos..end].to_string()),
                start: pos,
                end,
            });
            pos = end;
            continue;
        }

        if c.is_alphabetic() {
            let mut end = scan_while(text, pos, char::is_alphabetic);
            if has_feira_suffix(text, end) {
                end += FEIRA_SUFFIX.len();
            }

            let after_number = tokens
                .last()
                .is_some_and(|prev| prev.end == pos && prev.number().is_some());
            let run = &text[pos..end];
            if after_number && run.len() > 1 && run.starts_with('h') {
                tokens.push(Token {
                    kind: TokenKind::Word("h".to_string()),
                    start: pos,
                    end: pos + 1,
                });
                tokens.push(Token {
                    kind: TokenKind::Word(run[1..].to_string()),
                    start: pos + 1,
                    end,
                });
            } else {
                tokens.push(Token {
                    kind: TokenKind::Word(run.to_string()),
                    start: pos,
                    end,
                });
            }
            pos = end;
            continue;
        }

        let kind = if c == ':' {
            TokenKind::Colon
        } else {
            TokenKind::Punct(c)
        };
        let end = pos + c.len_utf8();
        tokens.push(Token {
            kind,
            start: pos,
            end,
        });
        pos = end;
    }

    tokens
}

/// Byte offset of the first char at or after `from` that fails `pred`.
fn scan_while(text: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}

/// Whether `-feira` starts at `at` and is not followed by more letters.
fn has_feira_suffix(text: &str, at: usize) -> bool {
    let rest = &text[at..];
    rest.starts_with(FEIRA_SUFFIX)
        && !rest[FEIRA_SUFFIX.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic)
}
