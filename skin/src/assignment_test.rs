use super::*;

// =============================================================
// Helpers
// =============================================================

fn catalog() -> Vec<Style> {
    vec![
        Style { id: "1".to_owned(), name: "highlight".to_owned(), description: Some("Yellow glow".to_owned()) },
        Style { id: "2".to_owned(), name: "muted".to_owned(), description: None },
    ]
}

fn subject(id: &str, marker: &str, pointer: Option<StylePointer>) -> SubjectStyleAssignment {
    SubjectStyleAssignment {
        subject_id: id.to_owned(),
        subject_name: format!("subject {id}"),
        ui_element_class_name: marker.to_owned(),
        description: None,
        style: pointer,
    }
}

fn pointer(subject_style_id: &str, style_id: &str, name: &str) -> StylePointer {
    StylePointer {
        subject_style_id: subject_style_id.to_owned(),
        style_id: style_id.to_owned(),
        style_name: name.to_owned(),
        style_description: None,
    }
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn style_assignment_decodes_camel_case_payload() {
    let raw = r#"{
        "id": 7,
        "userName": "admin@example.com",
        "roleId": "b9d1",
        "roleName": "Admin",
        "styleName": "highlight",
        "uiElementClassName": "s1",
        "componentName": "PageOne"
    }"#;
    let a: StyleAssignment = serde_json::from_str(raw).unwrap();
    assert_eq!(a.id, "7");
    assert_eq!(a.role_id.as_deref(), Some("b9d1"));
    assert_eq!(a.style_name, "highlight");
    assert_eq!(a.ui_element_class_name, "s1");
    assert_eq!(a.component_name, "PageOne");
}

#[test]
fn style_assignment_tolerates_null_user_and_role() {
    let raw = r#"{"id":"a","userName":null,"roleId":null,"roleName":null,
        "styleName":"x","uiElementClassName":"s2","componentName":"PageOne"}"#;
    let a: StyleAssignment = serde_json::from_str(raw).unwrap();
    assert!(a.user_name.is_none());
    assert!(a.role_id.is_none());
}

#[test]
fn subject_assignment_decodes_missing_style_as_none() {
    let raw = r#"{"subjectId":3,"subjectName":"Row","uiElementClassName":"s3","description":null,"style":null}"#;
    let s: SubjectStyleAssignment = serde_json::from_str(raw).unwrap();
    assert_eq!(s.subject_id, "3");
    assert!(s.style.is_none());
}

#[test]
fn subject_assignment_decodes_pointer_ids_as_strings() {
    let raw = r#"{"subjectId":3,"subjectName":"Row","uiElementClassName":"s3",
        "style":{"subjectStyleId":11,"styleId":2,"styleName":"muted","styleDescription":"Grey"}}"#;
    let s: SubjectStyleAssignment = serde_json::from_str(raw).unwrap();
    let p = s.style.unwrap();
    assert_eq!(p.subject_style_id, "11");
    assert_eq!(p.style_id, "2");
    assert_eq!(p.style_description.as_deref(), Some("Grey"));
}

#[test]
fn catalog_entries_ignore_unknown_fields() {
    let raw = r#"{"id":"r-1","name":"Admin","normalizedName":"ADMIN","concurrencyStamp":null,"groupRoles":null}"#;
    let role: Role = serde_json::from_str(raw).unwrap();
    assert_eq!(role.id, "r-1");
    assert_eq!(role.name, "Admin");

    let raw = r#"{"id":4,"name":"PageOne","subjects":null}"#;
    let component: Component = serde_json::from_str(raw).unwrap();
    assert_eq!(component.id, "4");
}

#[test]
fn id_rejects_non_integer_values() {
    let raw = r#"{"id":1.5,"name":"bad"}"#;
    assert!(serde_json::from_str::<Style>(raw).is_err());
    let raw = r#"{"id":true,"name":"bad"}"#;
    assert!(serde_json::from_str::<Style>(raw).is_err());
}

// =============================================================
// Retargeting
// =============================================================

#[test]
fn retarget_copies_name_and_description_from_catalog() {
    let mut s = subject("3", "s3", Some(pointer("11", "2", "muted")));
    assert!(s.retarget("1", &catalog()));
    let p = s.style.unwrap();
    assert_eq!(p.subject_style_id, "11");
    assert_eq!(p.style_id, "1");
    assert_eq!(p.style_name, "highlight");
    assert_eq!(p.style_description.as_deref(), Some("Yellow glow"));
}

#[test]
fn retarget_unknown_style_blanks_name() {
    let mut s = subject("3", "s3", Some(pointer("11", "2", "muted")));
    assert!(s.retarget("99", &catalog()));
    let p = s.style.unwrap();
    assert_eq!(p.style_id, "99");
    assert_eq!(p.style_name, "");
    assert!(p.style_description.is_none());
}

#[test]
fn retarget_without_pointer_is_rejected() {
    let mut s = subject("3", "s3", None);
    assert!(!s.retarget("1", &catalog()));
    assert!(s.style.is_none());
}

#[test]
fn retarget_subject_touches_only_the_matching_row() {
    let mut batch = vec![
        subject("3", "s3", Some(pointer("11", "2", "muted"))),
        subject("4", "s4", Some(pointer("12", "2", "muted"))),
    ];
    assert!(retarget_subject(&mut batch, "3", "1", &catalog()));
    assert_eq!(batch[0].style.as_ref().unwrap().style_name, "highlight");
    assert_eq!(batch[1].style.as_ref().unwrap().style_name, "muted");
}

#[test]
fn retarget_subject_missing_id_returns_false() {
    let mut batch = vec![subject("3", "s3", Some(pointer("11", "2", "muted")))];
    assert!(!retarget_subject(&mut batch, "404", "1", &catalog()));
    assert_eq!(batch[0].style.as_ref().unwrap().style_id, "2");
}
