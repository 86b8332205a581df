//! Component data structures.
//!
//! - `component` holds `EmbeddedComponent` records and the ordered `ComponentList`

pub mod component;
