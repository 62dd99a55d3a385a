mod common;

use common::*;
use elab_scope::ScopeError;
use expect_test::expect;

#[test]
fn dotted_end_closes_nested_namespaces() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A"), namespace("B"), end(Some("A.B"))]);
    assert!(session.current_namespace().is_anonymous());
    assert_eq!(session.scopes().depth(), 1);
}

#[test]
fn reversed_end_name_is_a_mismatch() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A"), namespace("B")]);
    let err = session.elab_command(&end(Some("B.A"))).unwrap_err();
    assert_eq!(
        err,
        ScopeError::EndNameMismatch {
            given: name("B.A"),
            expected: name("A.B"),
            span: (0, 3).into(),
        }
    );
    // The scopes are closed even though the names did not match.
    assert_eq!(session.scopes().depth(), 1);
}

#[test]
fn missing_end_name_for_a_namespace() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A")]);
    let err = session.elab_command(&end(None)).unwrap_err();
    expect![["invalid 'end', name is missing (expected `A`)"]].assert_eq(&err.to_string());
    assert_eq!(session.scopes().depth(), 1);
}

#[test]
fn end_without_open_scopes() {
    let mut session = session(&[]);
    let err = session.elab_command(&end(None)).unwrap_err();
    assert!(matches!(
        err,
        ScopeError::InsufficientScopes { requested: 1, available: 0, .. }
    ));
    expect![["invalid 'end', insufficient scopes (requested 1, 0 open)"]].assert_eq(&err.to_string());
}

#[test]
fn end_with_more_components_than_open_scopes() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A")]);
    let err = session.elab_command(&end(Some("X.A"))).unwrap_err();
    assert!(matches!(err, ScopeError::InsufficientScopes { requested: 2, available: 1, .. }));
    // Nothing was popped.
    assert_eq!(session.current_namespace(), &name("A"));
}

#[test]
fn anonymous_section_closes_with_bare_end() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A"), section(None), end(None)]);
    assert_eq!(session.current_namespace(), &name("A"));
}

#[test]
fn named_end_does_not_close_an_anonymous_section() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A"), section(None)]);
    let err = session.elab_command(&end(Some("A"))).unwrap_err();
    assert!(matches!(err, ScopeError::EndNameMismatch { .. }));
    assert_eq!(session.current_namespace(), &name("A"));
    assert_eq!(session.scopes().depth(), 2);
}

#[test]
fn dotted_section_closes_one_component_at_a_time() {
    let mut session = session(&[]);
    run(&mut session, &[section(Some("S.T")), end(Some("T")), end(Some("S"))]);
    assert_eq!(session.scopes().depth(), 1);
}

#[test]
fn end_name_must_match_every_component() {
    let mut session = session(&[]);
    run(&mut session, &[namespace("A.B")]);
    let err = session.elab_command(&end(Some("A.C"))).unwrap_err();
    expect![["invalid 'end', name mismatch (expected `A.B`, found `A.C`)"]].assert_eq(&err.to_string());
}
