use std::iter::Peekable;
use std::str::Chars;

use serde::Serialize;

use crate::token::{BracePair, Token};

/// A 1-based source position. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(line: usize, col: usize) -> Self {
        Span { line, col }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Line-oriented character cursor.
///
/// Text is fed one line at a time (as returned by `BufRead::read_line`) and
/// the cursor keeps the running position across calls. `\n`, `\r\n` and a
/// lone `\r` each end a line.
pub struct Lexer {
    pair: BracePair,
    line: usize,
    col: usize,
    lines: usize,
}

impl Lexer {
    pub fn new(pair: BracePair) -> Self {
        Lexer {
            pair,
            line: 1,
            col: 1,
            lines: 0,
        }
    }

    /// Number of lines that contained at least one character.
    pub fn lines(&self) -> usize {
        self.lines
    }

    fn span(&self) -> Span {
        Span {
            line: self.line,
            col: self.col,
        }
    }

    fn advance(&mut self, ch: char, next: Option<char>) {
        if self.col == 1 {
            self.lines += 1;
        }
        match ch {
            '\n' => self.newline(),
            '\r' if next != Some('\n') => self.newline(),
            _ => self.col += 1,
        }
    }

    fn newline(&mut self) {
        self.line += 1;
        self.col = 1;
    }

    /// Returns the tracked tokens of `text` in order, advancing the cursor
    /// past each consumed character. Dropping the iterator early leaves the
    /// cursor at the last token returned.
    pub fn line<'a>(&'a mut self, text: &'a str) -> LineTokens<'a> {
        LineTokens {
            lexer: self,
            chars: text.chars().peekable(),
        }
    }
}

pub struct LineTokens<'a> {
    lexer: &'a mut Lexer,
    chars: Peekable<Chars<'a>>,
}

impl Iterator for LineTokens<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        loop {
            let ch = self.chars.next()?;
            let span = self.lexer.span();
            let next = self.chars.peek().copied();
            self.lexer.advance(ch, next);

            if let Some(token) = self.lexer.pair.classify(ch) {
                return Some(Spanned { token, span });
            }
        }
    }
}
