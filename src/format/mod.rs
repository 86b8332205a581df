//! The block-structured text format component files are written in.
//!
//! - `lexer` tokenises text and decodes string escapes
//! - `fields` builds a generic, schema-less field tree
//! - `parser` maps the tree onto `EmbeddedComponent` records and validates them
//! - `template` finds and replaces `{{KEY}}` tokens
//! - `writer` renders records back to text

mod lexer;
pub mod fields;
pub mod parser;
pub mod template;
mod writer;

pub use fields::{Field, FieldValue, Scalar, parse_fields};
pub use parser::{ComponentListParser, parse};
pub use template::template_tokens;
