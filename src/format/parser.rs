use std::collections::HashMap;

use cgmath::Vector3;

use crate::{
    data_structures::component::{ComponentList, EmbeddedComponent},
    error::{ParseError, ParseResult},
    format::fields::{Field, FieldValue, Scalar, parse_fields},
};

/// Name of the repeated top-level block.
pub const COMPONENT_BLOCK: &str = "embedded_components";

/**
 * Turns component text into `EmbeddedComponent` records.
 *
 * Records come out in source order. Every block needs `id`, `type` and `data`;
 * `position` is optional. The `data` payload is carried as an opaque string and
 * is never validated here, see `EmbeddedComponent::data_fields` for a lazy view.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct ComponentListParser;

impl ComponentListParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str) -> ParseResult<Vec<EmbeddedComponent>> {
        let fields = parse_fields(text)?;
        let mut components = Vec::with_capacity(fields.len());
        // id -> line of the block that introduced it
        let mut seen: HashMap<String, usize> = HashMap::new();

        for field in fields {
            if field.name != COMPONENT_BLOCK {
                return Err(ParseError::malformed(
                    field.line,
                    format!("unexpected top-level field '{}', expected '{COMPONENT_BLOCK}'", field.name),
                ));
            }
            let FieldValue::Block(body) = &field.value else {
                return Err(ParseError::malformed(
                    field.line,
                    format!("'{COMPONENT_BLOCK}' must be a block"),
                ));
            };
            let component = component_from_block(body, field.line)?;
            if let Some(&first_line) = seen.get(component.id()) {
                return Err(ParseError::DuplicateId {
                    id: component.id().to_string(),
                    line: field.line,
                    first_line,
                });
            }
            seen.insert(component.id().to_string(), field.line);
            log::debug!(
                "Parsed component '{}' of type '{}' (line {})",
                component.id(),
                component.component_type(),
                field.line
            );
            components.push(component);
        }
        Ok(components)
    }

    pub fn parse_list(&self, text: &str) -> ParseResult<ComponentList> {
        self.parse(text).map(ComponentList::new)
    }
}

/// Shorthand for `ComponentListParser::new().parse(text)`.
pub fn parse(text: &str) -> ParseResult<Vec<EmbeddedComponent>> {
    ComponentListParser::new().parse(text)
}

fn component_from_block(body: &[Field], block_line: usize) -> ParseResult<EmbeddedComponent> {
    let mut id: Option<String> = None;
    let mut component_type: Option<String> = None;
    let mut data: Option<String> = None;
    let mut position: Option<Vector3<f32>> = None;

    for field in body {
        match field.name.as_str() {
            "id" => set_once(&mut id, string_value(field)?, field)?,
            "type" => set_once(&mut component_type, string_value(field)?, field)?,
            "data" => set_once(&mut data, string_value(field)?, field)?,
            "position" => set_once(&mut position, position_value(field)?, field)?,
            other => {
                return Err(ParseError::malformed(
                    field.line,
                    format!("unknown field '{other}'"),
                ));
            }
        }
    }

    let id = require(id, "id", block_line)?;
    if id.is_empty() {
        return Err(ParseError::malformed(block_line, "field 'id' must not be empty"));
    }
    let component_type = require(component_type, "type", block_line)?;
    if component_type.is_empty() {
        return Err(ParseError::malformed(block_line, "field 'type' must not be empty"));
    }
    let data = require(data, "data", block_line)?;

    let component = EmbeddedComponent::new(id, component_type, data);
    Ok(match position {
        Some(position) => component.with_position(position),
        None => component,
    })
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &Field) -> ParseResult<()> {
    if slot.is_some() {
        return Err(ParseError::malformed(
            field.line,
            format!("field '{}' is given more than once", field.name),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn require<T>(value: Option<T>, name: &str, block_line: usize) -> ParseResult<T> {
    value.ok_or_else(|| ParseError::malformed(block_line, format!("missing mandatory field '{name}'")))
}

fn string_value(field: &Field) -> ParseResult<String> {
    field.as_str().map(str::to_string).ok_or_else(|| {
        ParseError::malformed(
            field.line,
            format!("field '{}' must be a string", field.name),
        )
    })
}

fn position_value(field: &Field) -> ParseResult<Vector3<f32>> {
    let Some(axes) = field.as_block() else {
        return Err(ParseError::malformed(field.line, "field 'position' must be a block"));
    };
    let (mut x, mut y, mut z) = (None, None, None);
    for axis in axes {
        let slot = match axis.name.as_str() {
            "x" => &mut x,
            "y" => &mut y,
            "z" => &mut z,
            other => {
                return Err(ParseError::malformed(
                    axis.line,
                    format!("unknown position axis '{other}'"),
                ));
            }
        };
        let value = match &axis.value {
            FieldValue::Scalar(Scalar::Number(n)) => *n as f32,
            _ => {
                return Err(ParseError::malformed(
                    axis.line,
                    format!("position axis '{}' must be a number", axis.name),
                ));
            }
        };
        // values beyond f32 range would turn into inf and never read back
        if !value.is_finite() {
            return Err(ParseError::malformed(
                axis.line,
                format!("position axis '{}' out of range", axis.name),
            ));
        }
        set_once(slot, value, axis)?;
    }
    Ok(Vector3::new(
        x.unwrap_or(0.0),
        y.unwrap_or(0.0),
        z.unwrap_or(0.0),
    ))
}
