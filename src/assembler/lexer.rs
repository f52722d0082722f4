//! Lexical analysis for 6502 assembly source.
//!
//! Converts source text into a stream of typed tokens, separating
//! character-level concerns (what is a number? where does a comment end?)
//! from the parser's syntactic ones (is this a valid instruction?).
//!
//! Numbers are parsed eagerly: `$42` becomes `HexNumber(0x42)` here, so the
//! parser never re-reads digit strings. Comments (`;` to end of line) and
//! horizontal whitespace are consumed by the lexer and never reach the
//! parser; newlines are kept because the grammar is line-oriented.

use super::{AssemblyError, AssemblyErrorKind};

/// Classification of lexical tokens in 6502 assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    /// Mnemonics, labels, symbol references. Case is preserved; mnemonic
    /// matching normalizes later, label matching never does.
    Identifier(String),

    /// Decimal number literal (0-65535).
    DecimalNumber(u16),
    /// Hexadecimal number literal with `$` prefix, parsed.
    HexNumber(u16),
    /// Binary number literal with `%` prefix, parsed.
    BinaryNumber(u16),

    /// Colon `:` - label definition suffix.
    Colon,
    /// Comma `,` - indexed addressing separator.
    Comma,
    /// Hash `#` - immediate mode prefix.
    Hash,
    /// Left parenthesis `(` - indirect addressing open.
    LParen,
    /// Right parenthesis `)` - indirect addressing close.
    RParen,
    /// Dot `.` - directive prefix.
    Dot,

    /// Line terminator (CRLF and LF both normalize to one token).
    Newline,
    /// End of input marker.
    Eof,
}

/// A single lexical token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,

    /// Source line number (1-indexed for user display).
    pub line: usize,

    /// Column offset within the line (0-indexed).
    pub column: usize,
}

/// Lexer state for converting source text into tokens.
struct Lexer<'a> {
    source: &'a str,
    chars: std::str::CharIndices<'a>,
    current: Option<(usize, char)>,
    line: usize,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Lexer<'a> {
        let mut chars = source.char_indices();
        let current = chars.next();
        Lexer {
            source,
            chars,
            current,
            line: 1,
            line_start: 0,
        }
    }

    fn advance(&mut self) {
        self.current = self.chars.next();
    }

    fn peek(&self) -> Option<char> {
        self.current.map(|(_, ch)| ch)
    }

    fn column(&self) -> usize {
        match self.current {
            Some((pos, _)) => pos - self.line_start,
            None => self.source.len() - self.line_start,
        }
    }

    fn error(&self, message: String) -> AssemblyError {
        AssemblyError::new(AssemblyErrorKind::Syntax, self.line, message)
    }

    fn token(&self, token_type: TokenType, column: usize) -> Token {
        Token {
            token_type,
            line: self.line,
            column,
        }
    }

    /// Scans an identifier: [a-zA-Z][a-zA-Z0-9_]*
    fn scan_identifier(&mut self, column: usize) -> Token {
        let mut identifier = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenType::Identifier(identifier), column)
    }

    /// Scans digits in the given radix and parses them into a u16.
    fn scan_number(&mut self, radix: u32, prefix: &str) -> Result<u16, AssemblyError> {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_digit(radix) {
                digits.push(ch);
                self.advance();
            } else if ch.is_ascii_alphanumeric() {
                return Err(self.error(format!("invalid digit '{}' in number", ch)));
            } else {
                break;
            }
        }

        if digits.is_empty() {
            return Err(self.error(format!("'{}' must be followed by digits", prefix)));
        }

        u16::from_str_radix(&digits, radix).map_err(|_| {
            self.error(format!("number {}{} does not fit in 16 bits", prefix, digits))
        })
    }

    fn next_token(&mut self) -> Result<Option<Token>, AssemblyError> {
        let Some(ch) = self.peek() else {
            return Ok(None);
        };
        let column = self.column();

        match ch {
            ' ' | '\t' => {
                while matches!(self.peek(), Some(' ') | Some('\t')) {
                    self.advance();
                }
                self.next_token()
            }

            '\n' | '\r' => {
                self.advance();
                if ch == '\r' && self.peek() == Some('\n') {
                    self.advance();
                }
                let token = self.token(TokenType::Newline, column);
                self.line += 1;
                self.line_start = self
                    .current
                    .map(|(pos, _)| pos)
                    .unwrap_or(self.source.len());
                Ok(Some(token))
            }

            // Comment runs to end of line; the newline itself is kept.
            ';' => {
                while !matches!(self.peek(), None | Some('\n') | Some('\r')) {
                    self.advance();
                }
                self.next_token()
            }

            '$' => {
                self.advance();
                let value = self.scan_number(16, "$")?;
                Ok(Some(self.token(TokenType::HexNumber(value), column)))
            }

            '%' => {
                self.advance();
                let value = self.scan_number(2, "%")?;
                Ok(Some(self.token(TokenType::BinaryNumber(value), column)))
            }

            '0'..='9' => {
                let value = self.scan_number(10, "")?;
                Ok(Some(self.token(TokenType::DecimalNumber(value), column)))
            }

            'a'..='z' | 'A'..='Z' => Ok(Some(self.scan_identifier(column))),

            ':' | ',' | '#' | '(' | ')' | '.' => {
                self.advance();
                let token_type = match ch {
                    ':' => TokenType::Colon,
                    ',' => TokenType::Comma,
                    '#' => TokenType::Hash,
                    '(' => TokenType::LParen,
                    ')' => TokenType::RParen,
                    _ => TokenType::Dot,
                };
                Ok(Some(self.token(token_type, column)))
            }

            _ => Err(self.error(format!("unexpected character '{}'", ch))),
        }
    }
}

/// Tokenizes assembly source text.
///
/// Stops at the first lexical fault and reports it with its line number.
pub fn tokenize(source: &str) -> Result<Vec<Token>, AssemblyError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    tokens.push(Token {
        token_type: TokenType::Eof,
        line: lexer.line,
        column: lexer.column(),
    });

    Ok(tokens)
}

/// Token cursor with lookahead for the parser.
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// The current token without consuming it. The stream always ends with
    /// `Eof`, so peeking past the end keeps returning it.
    pub fn peek(&self) -> &TokenType {
        &self.current().token_type
    }

    /// Looks ahead `n` tokens without consuming.
    pub fn peek_n(&self, n: usize) -> &TokenType {
        let index = (self.position + n).min(self.tokens.len() - 1);
        &self.tokens[index].token_type
    }

    /// Consumes and returns the current token.
    pub fn consume(&mut self) -> Token {
        let token = self.current().clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    /// Source line of the current token.
    pub fn line(&self) -> usize {
        self.current().line
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }
}
