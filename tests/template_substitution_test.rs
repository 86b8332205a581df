use flow_components::{ComponentList, EmbeddedComponent, UnresolvedTemplateToken};

use crate::common::test_utils::{MESH_GO, MODEL_DATA, bindings, init};

mod common;

#[test]
fn should_replace_name_token_and_keep_everything_else() {
    init();
    let list = ComponentList::from_text(MESH_GO).unwrap();
    let model = list.get("model").unwrap();

    let hero = model.substitute(&bindings(&[("NAME", "Hero")]));

    assert_eq!(hero.data(), MODEL_DATA.replace("{{NAME}}", "Hero"));
    assert!(hero.data().contains("name: \"Hero\"\n"));
    assert_eq!(hero.id(), model.id());
    assert_eq!(hero.component_type(), model.component_type());
    assert_eq!(hero.explicit_position(), model.explicit_position());
    // the original record is untouched
    assert_eq!(model.data(), MODEL_DATA);
}

#[test]
fn should_leave_unbound_tokens_and_report_them() {
    let component = EmbeddedComponent::new("c", "model", "{{A}}-{{B}}-{{A}}-{{C}}");

    let (out, unresolved) = component.substitute_with_report(&bindings(&[("B", "b")]));

    assert_eq!(out.data(), "{{A}}-b-{{A}}-{{C}}");
    assert_eq!(
        unresolved,
        vec![
            UnresolvedTemplateToken {
                component_id: "c".to_string(),
                key: "A".to_string(),
            },
            UnresolvedTemplateToken {
                component_id: "c".to_string(),
                key: "C".to_string(),
            },
        ]
    );
    assert_eq!(
        unresolved[0].to_string(),
        "unresolved template token {{A}} in component \"c\""
    );
}

#[test]
fn should_not_expand_recursively() {
    let component = EmbeddedComponent::new("c", "model", "name: \"{{NAME}}\"");

    let out = component.substitute(&bindings(&[("NAME", "{{OTHER}}"), ("OTHER", "nope")]));

    assert_eq!(out.data(), "name: \"{{OTHER}}\"");
}

#[test]
fn should_treat_unclosed_and_empty_braces_as_text() {
    let component = EmbeddedComponent::new("c", "model", "{{}} and {{NAME");

    let (out, unresolved) = component.substitute_with_report(&bindings(&[("NAME", "x"), ("", "y")]));

    assert_eq!(out.data(), "{{}} and {{NAME");
    assert!(unresolved.is_empty());
    assert!(component.template_tokens().is_empty());
}

#[test]
fn should_list_template_tokens_in_first_occurrence_order() {
    let component = EmbeddedComponent::new("c", "model", "{{B}} {{A}} {{B}}");
    assert_eq!(component.template_tokens(), vec!["B", "A"]);

    let list = ComponentList::from_text(MESH_GO).unwrap();
    assert!(list.get("mesh").unwrap().template_tokens().is_empty());
    assert_eq!(list.get("model").unwrap().template_tokens(), vec!["NAME"]);
}

#[test]
fn should_substitute_whole_list_in_order() {
    let list = ComponentList::from_text(MESH_GO).unwrap();

    let bound = list.substitute(&bindings(&[("NAME", "Hero")]));

    let ids: Vec<&str> = bound.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["mesh", "model"]);
    assert_eq!(bound.get("mesh"), list.get("mesh"));
    assert!(bound.get("model").unwrap().template_tokens().is_empty());
}

#[test]
fn should_not_let_stray_open_braces_swallow_a_token() {
    let component = EmbeddedComponent::new("c", "model", "a {{ b\nname: \"{{NAME}}\"");

    let (out, unresolved) = component.substitute_with_report(&bindings(&[("NAME", "Hero")]));

    assert_eq!(out.data(), "a {{ b\nname: \"Hero\"");
    assert!(unresolved.is_empty());
    assert_eq!(component.template_tokens(), vec!["NAME"]);
}

#[test]
fn should_replace_innermost_token_inside_extra_braces() {
    let component = EmbeddedComponent::new("c", "model", "name: {{{NAME}}}");

    let (out, unresolved) = component.substitute_with_report(&bindings(&[("NAME", "Hero")]));

    assert_eq!(out.data(), "name: {Hero}");
    assert!(unresolved.is_empty());
}
