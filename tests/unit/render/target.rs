use super::*;

#[test]
fn document_mounts_into_registered_containers() {
    let doc = Document::new();
    doc.add_container("#chart").unwrap();
    assert_eq!(doc.contents("#chart"), None);

    let target = RenderTarget::container(&doc, "#chart");
    assert!(target.write("<svg/>").unwrap());
    assert_eq!(doc.contents("#chart").as_deref(), Some("<svg/>"));

    target.write("<svg></svg>").unwrap();
    assert_eq!(doc.contents("#chart").as_deref(), Some("<svg></svg>"));
}

#[test]
fn unknown_selector_is_target_not_found() {
    let doc = Document::new();
    let err = doc.mount("#missing", "<svg/>").unwrap_err();
    assert!(matches!(err, ChartError::TargetNotFound(ref s) if s == "#missing"));
    assert_eq!(err.to_string(), "target not found: #missing");
}

#[test]
fn re_adding_a_container_keeps_contents() {
    let doc = Document::new();
    doc.add_container("a").unwrap();
    doc.mount("a", "x").unwrap();
    doc.add_container("a").unwrap();
    assert_eq!(doc.contents("a").as_deref(), Some("x"));
}

#[test]
fn markup_target_writes_nothing() {
    assert!(!RenderTarget::Markup.write("<svg/>").unwrap());
    assert_eq!(RenderTarget::Markup.selector(), None);
    assert_eq!(format!("{:?}", RenderTarget::Markup), "Markup");
}
