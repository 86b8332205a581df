use flow_components::{ComponentList, EmbeddedComponent, Vector3, parse};

use crate::common::test_utils::MESH_GO;

mod common;

#[test]
fn should_read_back_what_it_writes() {
    let list = ComponentList::from_text(MESH_GO).unwrap();

    let written = list.to_string();

    assert_eq!(ComponentList::from_text(&written).unwrap(), list);
}

#[test]
fn should_split_data_into_one_literal_per_line() {
    let component = EmbeddedComponent::new("m", "mesh", "a: \"x\"\nb: 1\n")
        .with_position(Vector3::new(2.0, 0.0, -0.5));

    let expected = "embedded_components {\n\
                    \x20 id: \"m\"\n\
                    \x20 type: \"mesh\"\n\
                    \x20 data: \"a: \\\"x\\\"\\n\"\n\
                    \x20 \"b: 1\\n\"\n\
                    \x20 position {\n\
                    \x20   x: 2.0\n\
                    \x20   z: -0.5\n\
                    \x20 }\n\
                    }\n";
    assert_eq!(component.to_string(), expected);
}

#[test]
fn should_escape_control_characters() {
    let component = EmbeddedComponent::new("odd \"id\"", "t", "tab\there\u{1}\\");

    let written = component.to_string();

    assert!(written.contains("id: \"odd \\\"id\\\"\""));
    assert!(written.contains("data: \"tab\\there\\001\\\\\""));
    assert_eq!(parse(&written).unwrap(), vec![component]);
}

#[test]
fn should_write_empty_data_as_empty_literal() {
    let component = EmbeddedComponent::new("e", "t", "");
    assert!(component.to_string().contains("  data: \"\"\n"));
    assert_eq!(parse(&component.to_string()).unwrap(), vec![component]);
}

#[test]
fn should_round_trip_largest_finite_position() {
    let component = EmbeddedComponent::new("big", "t", "").with_position(Vector3::new(f32::MAX, 0.0, f32::MIN));
    assert_eq!(parse(&component.to_string()).unwrap(), vec![component]);
}
