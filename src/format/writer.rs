use std::fmt::{self, Write};

use crate::{
    data_structures::component::{ComponentList, EmbeddedComponent},
    format::parser::COMPONENT_BLOCK,
};

impl fmt::Display for EmbeddedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{COMPONENT_BLOCK} {{")?;
        writeln!(f, "  id: {}", quote(self.id()))?;
        writeln!(f, "  type: {}", quote(self.component_type()))?;
        write_data(f, self.data())?;
        if let Some(position) = self.explicit_position() {
            writeln!(f, "  position {{")?;
            // zero axes are left out, they read back as the default
            for (axis, value) in [("x", position.x), ("y", position.y), ("z", position.z)] {
                if value != 0.0 {
                    writeln!(f, "    {axis}: {value:?}")?;
                }
            }
            writeln!(f, "  }}")?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for ComponentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in self.iter() {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// One adjacent literal per payload line so nested payloads stay readable.
fn write_data(f: &mut fmt::Formatter<'_>, data: &str) -> fmt::Result {
    if data.is_empty() {
        return writeln!(f, "  data: \"\"");
    }
    let mut lines = data.split_inclusive('\n');
    if let Some(first) = lines.next() {
        writeln!(f, "  data: {}", quote(first))?;
    }
    for line in lines {
        writeln!(f, "  {}", quote(line))?;
    }
    Ok(())
}

/// Quotes and escapes `value` so the lexer reads back exactly the same string.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
