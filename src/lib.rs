//! flow-components
//!
//! Loader for embedded component files: blocks of typed, named records that
//! reference external assets (meshes, models, materials, textures) and carry an
//! optional spatial offset. Records are parsed from a block-structured text
//! format, validated, and customised through `{{KEY}}` template tokens. The
//! crate does not load the referenced assets or build scenes from them.
//!
//! High-level modules
//! - `data_structures`: `EmbeddedComponent` records and `ComponentList`
//! - `error`: parse errors and template warnings
//! - `format`: lexer, field tree, component parser, template tokens and writer
//! - `logging`: logger setup for native and WASM targets
//! - `resources`: async helpers to read component files from an asset root
//!

pub mod data_structures;
pub mod error;
pub mod format;
pub mod logging;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::Vector3;
pub use data_structures::component::{ComponentList, EmbeddedComponent};
pub use error::{ParseError, ParseErrorKind, ParseResult, UnresolvedTemplateToken};
pub use format::{ComponentListParser, parse};
pub use logging::init_logger;
pub use resources::{LoadOptions, load_component_files, load_components};
