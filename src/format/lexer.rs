use std::{iter::Peekable, str::Chars};

use crate::error::{ParseError, ParseResult};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Str(String),
    Number(f64),
    Colon,
    LBrace,
    RBrace,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

/**
 * Splits component text into tokens. Comments (`#` to end of line) and
 * whitespace are dropped, string escapes are decoded here so the parser only
 * ever sees final string contents.
 */
pub(crate) fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer {
        chars: text.chars().peekable(),
        line: 1,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '#' {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Option<Token>> {
        self.skip_trivia();
        let line = self.line;
        let Some(&c) = self.chars.peek() else {
            return Ok(None);
        };
        let kind = match c {
            ':' => {
                self.bump();
                TokenKind::Colon
            }
            '{' => {
                self.bump();
                TokenKind::LBrace
            }
            '}' => {
                self.bump();
                TokenKind::RBrace
            }
            '"' | '\'' => {
                self.bump();
                TokenKind::Str(self.string(c)?)
            }
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                TokenKind::Number(self.number()?)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&c) = self.chars.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '_') {
                        break;
                    }
                    ident.push(c);
                    self.bump();
                }
                TokenKind::Ident(ident)
            }
            other => {
                return Err(ParseError::syntax(
                    line,
                    format!("unexpected character '{}'", other.escape_debug()),
                ));
            }
        };
        Ok(Some(Token { kind, line }))
    }

    fn number(&mut self) -> ParseResult<f64> {
        let line = self.line;
        let mut raw = String::new();
        if let Some(&sign) = self.chars.peek() {
            if sign == '-' || sign == '+' {
                raw.push(sign);
                self.bump();
            }
        }
        while let Some(&c) = self.chars.peek() {
            let exponent_sign =
                (c == '-' || c == '+') && matches!(raw.chars().last(), Some('e' | 'E'));
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || exponent_sign {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        // protobuf text allows an `f` suffix on floats
        if let Some(&('f' | 'F')) = self.chars.peek() {
            self.bump();
        }
        if let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                raw.push(c);
                return Err(ParseError::syntax(
                    line,
                    format!("invalid number '{raw}...', unexpected '{c}' after digits"),
                ));
            }
        }
        raw.parse::<f64>()
            .map_err(|_| ParseError::syntax(line, format!("invalid number '{raw}'")))
    }

    /// Reads the rest of a string literal after the opening `quote`.
    fn string(&mut self, quote: char) -> ParseResult<String> {
        let start = self.line;
        let mut bytes: Vec<u8> = Vec::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(ParseError::syntax(start, "unterminated string literal"));
            };
            match c {
                c if c == quote => break,
                '\n' => {
                    return Err(ParseError::syntax(start, "newline inside string literal"));
                }
                '\\' => self.escape(&mut bytes)?,
                c => {
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        String::from_utf8(bytes)
            .map_err(|_| ParseError::syntax(start, "string literal is not valid UTF-8"))
    }

    fn escape(&mut self, bytes: &mut Vec<u8>) -> ParseResult<()> {
        let line = self.line;
        let Some(c) = self.bump() else {
            return Err(ParseError::syntax(line, "unterminated escape sequence"));
        };
        let byte = match c {
            'n' => b'\n',
            't' => b'\t',
            'r' => b'\r',
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0c,
            'v' => 0x0b,
            '"' => b'"',
            '\'' => b'\'',
            '\\' => b'\\',
            '?' => b'?',
            'x' | 'X' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    match self.chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            self.bump();
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err(ParseError::syntax(line, "\\x escape without hex digits"));
                }
                value as u8
            }
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.bump();
                        }
                        None => break,
                    }
                }
                if value > 0xff {
                    return Err(ParseError::syntax(line, "octal escape out of range"));
                }
                value as u8
            }
            other => {
                return Err(ParseError::syntax(
                    line,
                    format!("unknown escape sequence '\\{}'", other.escape_debug()),
                ));
            }
        };
        bytes.push(byte);
        Ok(())
    }
}
