//! Error types for component file parsing and template substitution.
//!
//! Parse failures are fatal and surfaced synchronously through `ParseError`.
//! Unresolved template tokens are warnings: they are returned (and logged)
//! next to the substituted component instead of aborting.

use thiserror::Error;

/// Errors produced while reading the component text format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not well-formed (bad token, unterminated string, unbalanced braces).
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line of the offending token.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A block is missing a mandatory field or contains something it shouldn't.
    #[error("line {line}: malformed embedded_components block: {reason}")]
    MalformedBlock {
        /// 1-based line where the block (or offending field) starts.
        line: usize,
        /// What is wrong with the block.
        reason: String,
    },

    /// Two blocks share the same `id`.
    #[error("line {line}: duplicate component id \"{id}\" (first defined on line {first_line})")]
    DuplicateId {
        /// The colliding id.
        id: String,
        /// Line of the second block.
        line: usize,
        /// Line of the block that defined the id first.
        first_line: usize,
    },
}

/// Discriminant of a [`ParseError`], handy for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// See [`ParseError::Syntax`].
    Syntax,
    /// See [`ParseError::MalformedBlock`].
    MalformedBlock,
    /// See [`ParseError::DuplicateId`].
    DuplicateId,
}

impl ParseError {
    /// Which kind of failure this is.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::Syntax { .. } => ParseErrorKind::Syntax,
            ParseError::MalformedBlock { .. } => ParseErrorKind::MalformedBlock,
            ParseError::DuplicateId { .. } => ParseErrorKind::DuplicateId,
        }
    }

    /// 1-based line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. }
            | ParseError::MalformedBlock { line, .. }
            | ParseError::DuplicateId { line, .. } => *line,
        }
    }

    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ParseError::MalformedBlock {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A `{{KEY}}` token that had no binding during substitution.
///
/// This never fails a substitution; the token is left in the data verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unresolved template token {{{{{key}}}}} in component \"{component_id}\"")]
pub struct UnresolvedTemplateToken {
    /// Id of the component whose data still contains the token.
    pub component_id: String,
    /// The key between the braces.
    pub key: String,
}
