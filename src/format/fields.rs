//! Generic field tree for the block-structured text format.
//!
//! The tree knows nothing about components: it only records names, scalar
//! values and nested blocks in source order. Component records are built on
//! top of it and so is the lazy view of a component's `data` payload.

use crate::{
    error::{ParseError, ParseResult},
    format::lexer::{Token, TokenKind, tokenize},
};

/// A single `name: value` or `name { ... }` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    /// 1-based line of the field name.
    pub line: usize,
    pub value: FieldValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    Block(Vec<Field>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Decoded string, with adjacent literals already concatenated.
    Str(String),
    Number(f64),
    /// Bare identifier such as `true` or an enum value.
    Ident(String),
}

impl Field {
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match &self.value {
            FieldValue::Scalar(Scalar::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&[Field]> {
        match &self.value {
            FieldValue::Block(fields) => Some(fields),
            _ => None,
        }
    }

    /// First child field called `name`, if this field is a block.
    pub fn child(&self, name: &str) -> Option<&Field> {
        self.as_block()?.iter().find(|f| f.name == name)
    }
}

/// Parses `text` into its top-level fields.
pub fn parse_fields(text: &str) -> ParseResult<Vec<Field>> {
    let tokens = tokenize(text)?;
    let mut parser = FieldParser { tokens, pos: 0 };
    parser.block(None)
}

struct FieldParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl FieldParser {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Reads fields until the closing brace of a block opened on `opened_at`,
    /// or until end of input for the top level (`opened_at == None`).
    fn block(&mut self, opened_at: Option<usize>) -> ParseResult<Vec<Field>> {
        let mut fields = Vec::new();
        loop {
            let Some(token) = self.next() else {
                return match opened_at {
                    Some(line) => Err(ParseError::syntax(
                        line,
                        "block is never closed, expected '}'",
                    )),
                    None => Ok(fields),
                };
            };
            match token.kind {
                TokenKind::RBrace if opened_at.is_some() => return Ok(fields),
                TokenKind::RBrace => {
                    return Err(ParseError::syntax(token.line, "unexpected '}'"));
                }
                TokenKind::Ident(name) => {
                    let value = self.value(token.line)?;
                    fields.push(Field {
                        name,
                        line: token.line,
                        value,
                    });
                }
                other => {
                    return Err(ParseError::syntax(
                        token.line,
                        format!("expected a field name, found {}", describe(&other)),
                    ));
                }
            }
        }
    }

    fn value(&mut self, name_line: usize) -> ParseResult<FieldValue> {
        let Some(token) = self.next() else {
            return Err(ParseError::syntax(name_line, "unexpected end of input after field name"));
        };
        match token.kind {
            TokenKind::LBrace => Ok(FieldValue::Block(self.block(Some(token.line))?)),
            TokenKind::Colon => {
                let Some(token) = self.next() else {
                    return Err(ParseError::syntax(name_line, "unexpected end of input after ':'"));
                };
                match token.kind {
                    TokenKind::LBrace => Ok(FieldValue::Block(self.block(Some(token.line))?)),
                    TokenKind::Str(first) => Ok(FieldValue::Scalar(Scalar::Str(self.adjacent(first)))),
                    TokenKind::Number(n) => Ok(FieldValue::Scalar(Scalar::Number(n))),
                    TokenKind::Ident(ident) => Ok(FieldValue::Scalar(Scalar::Ident(ident))),
                    other => Err(ParseError::syntax(
                        token.line,
                        format!("expected a value after ':', found {}", describe(&other)),
                    )),
                }
            }
            other => Err(ParseError::syntax(
                token.line,
                format!("expected ':' or '{{' after field name, found {}", describe(&other)),
            )),
        }
    }

    fn adjacent(&mut self, mut value: String) -> String {
        while let Some(Token {
            kind: TokenKind::Str(_),
            ..
        }) = self.peek()
        {
            if let Some(Token {
                kind: TokenKind::Str(more),
                ..
            }) = self.next()
            {
                value.push_str(&more);
            }
        }
        value
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::Str(_) => "a string".to_string(),
        TokenKind::Number(n) => format!("number {n}"),
        TokenKind::Colon => "':'".to_string(),
        TokenKind::LBrace => "'{'".to_string(),
        TokenKind::RBrace => "'}'".to_string(),
    }
}
