//! Markup lexer producing a flat token stream

use tracing::debug;

use crate::lexer::cursor::Cursor;
use crate::lexer::token::Token;

/// Lexer that tokenizes bracket-tag markup.
///
/// Input is assumed well formed; the lexer only reacts to `<` and
/// silently ignores stray text between tags, so it never fails.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the document text
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input.as_bytes()),
        }
    }

    /// Tokenize the whole document into an ordered token sequence
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(b) = self.cursor.bump() {
            if b != b'<' {
                continue;
            }

            self.cursor.skip_whitespace();
            if self.cursor.peek() == Some(b'/') {
                self.cursor.bump();
                let raw = self.cursor.capture_until(&[b'>']);
                let name: String = raw.split_whitespace().collect();
                tokens.push(Token::TagClose { name });
            } else {
                let header = self.cursor.capture_until(&[b'>']);
                lex_header(&header, &mut tokens);
            }
        }

        debug!(tokens = tokens.len(), "tokenized document");
        tokens
    }
}

/// Split a tag header (the text between `<` and `>`) into an open-tag
/// token and its attribute tokens.
///
/// A header with no space anywhere is a bare tag name, even if it
/// pathologically contains `=` without spaces. Known limitation.
fn lex_header(header: &str, tokens: &mut Vec<Token>) {
    if !header.as_bytes().contains(&b' ') {
        tokens.push(Token::TagOpen {
            name: header.to_string(),
        });
        return;
    }

    let mut cursor = Cursor::new(header.as_bytes());
    let name = cursor.capture_until(&[b' ', b'>']);
    tokens.push(Token::TagOpen { name });

    loop {
        if cursor.is_eof() {
            break;
        }
        cursor.skip_whitespace();

        let name = cursor.capture_until(&[b' ', b'=', b'>']);
        match cursor.last_stop() {
            None | Some(b'>') => break,
            Some(b' ') => cursor.skip_whitespace(),
            Some(_) => {}
        }

        // now at (or before) '='; the value sits between the next pair of quotes
        cursor.skip_to_any(&[b'"']);
        let value = cursor.capture_until(&[b'"']);
        tokens.push(Token::Attribute { name, value });

        // move past the closing quote
        cursor.bump();
    }
}

/// Tokenize a markup document
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
