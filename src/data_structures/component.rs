//! Embedded component records and the ordered list that owns them.
//!
//! Records are built once when a file is parsed and never mutated afterwards;
//! substitution hands back a new record.

use std::collections::HashMap;

use cgmath::{Vector3, Zero};

use crate::{
    error::{ParseResult, UnresolvedTemplateToken},
    format::{
        fields::{Field, parse_fields},
        parser::ComponentListParser,
        template::{substitute_tokens, template_tokens},
    },
};

/// One `embedded_components` block: a typed, named reference to external assets.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedComponent {
    id: String,
    component_type: String,
    data: String,
    position: Option<Vector3<f32>>,
}

impl EmbeddedComponent {
    pub fn new(
        id: impl Into<String>,
        component_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            data: data.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The `type` tag, e.g. `"mesh"` or `"model"`.
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// The raw nested payload, exactly as decoded from the source.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Spatial offset; the zero vector when the block has no `position`.
    pub fn position(&self) -> Vector3<f32> {
        self.position.unwrap_or_else(Vector3::zero)
    }

    /// The offset only if the source spelled out a `position` block.
    pub fn explicit_position(&self) -> Option<Vector3<f32>> {
        self.position
    }

    /// Keys of the `{{KEY}}` tokens still present in `data`.
    pub fn template_tokens(&self) -> Vec<&str> {
        template_tokens(&self.data)
    }

    /**
     * Parses `data` with the same grammar as component files.
     *
     * This is done on demand and nothing is cached: the payload belongs to
     * whatever consumes the component, so no schema is enforced. Line numbers
     * in errors are relative to the payload.
     */
    pub fn data_fields(&self) -> ParseResult<Vec<Field>> {
        parse_fields(&self.data)
    }

    /// Replaces `{{KEY}}` tokens in `data` using `bindings`.
    ///
    /// Tokens without a binding stay as they are and are logged as warnings.
    pub fn substitute(&self, bindings: &HashMap<String, String>) -> Self {
        let (component, unresolved) = self.substitute_with_report(bindings);
        for token in unresolved {
            log::warn!("{token}");
        }
        component
    }

    /// Like [`substitute`](Self::substitute) but hands back the unresolved
    /// tokens instead of logging them.
    pub fn substitute_with_report(
        &self,
        bindings: &HashMap<String, String>,
    ) -> (Self, Vec<UnresolvedTemplateToken>) {
        let substituted = substitute_tokens(&self.data, bindings);
        let unresolved = substituted
            .unresolved
            .into_iter()
            .map(|key| UnresolvedTemplateToken {
                component_id: self.id.clone(),
                key,
            })
            .collect();
        let component = Self {
            data: substituted.text,
            ..self.clone()
        };
        (component, unresolved)
    }
}

/// Components of one file, in the order they were listed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentList {
    components: Vec<EmbeddedComponent>,
}

impl ComponentList {
    /// Callers must have checked that ids are unique.
    pub(crate) fn new(components: Vec<EmbeddedComponent>) -> Self {
        Self { components }
    }

    pub fn from_text(text: &str) -> ParseResult<Self> {
        ComponentListParser::new().parse_list(text)
    }

    /// Looks a component up by its id.
    pub fn get(&self, id: &str) -> Option<&EmbeddedComponent> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmbeddedComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn as_slice(&self) -> &[EmbeddedComponent] {
        &self.components
    }

    pub fn into_vec(self) -> Vec<EmbeddedComponent> {
        self.components
    }

    /// Applies [`EmbeddedComponent::substitute`] to every component.
    pub fn substitute(&self, bindings: &HashMap<String, String>) -> Self {
        Self {
            components: self
                .components
                .iter()
                .map(|c| c.substitute(bindings))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a EmbeddedComponent;
    type IntoIter = std::slice::Iter<'a, EmbeddedComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl IntoIterator for ComponentList {
    type Item = EmbeddedComponent;
    type IntoIter = std::vec::IntoIter<EmbeddedComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}
