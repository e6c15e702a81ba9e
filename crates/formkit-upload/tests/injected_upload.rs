//! Multipart encoding fixes against parsed documents

use formkit_dom::{Document, FormEnctype};
use formkit_html::{get_outer_html, HtmlParser};
use formkit_upload::{ensure_multipart_encoding, DomError, EnctypeFixer, UploadConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("formkit_upload=trace")
        .with_test_writer()
        .try_init();
}

fn parse(html: &str) -> Document {
    init_tracing();
    HtmlParser::new().parse(html)
}

fn snapshot(doc: &Document) -> String {
    get_outer_html(doc.tree(), doc.tree().root())
}

fn attr<'a>(doc: &'a Document, id: &str, name: &str) -> Option<&'a str> {
    let node = doc.get_element_by_id(id)?;
    doc.tree().get_attribute(node, name)
}

#[test]
fn test_sets_both_attributes_on_enclosing_form() {
    let mut doc = parse(r#"<form id="f"><span id="x"></span></form>"#);

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    assert_eq!(attr(&doc, "f", "enctype"), Some("multipart/form-data"));
    assert_eq!(attr(&doc, "f", "encoding"), Some("multipart/form-data"));
    let form = doc.get_element_by_id("f").unwrap();
    assert_eq!(doc.form_enctype(form), Some(FormEnctype::Multipart));
}

#[test]
fn test_empty_identifier_is_noop() {
    let mut doc = parse(r#"<form id="f"><span id=""></span><input id type="file"></form>"#);
    let before = snapshot(&doc);

    ensure_multipart_encoding(&mut doc, "").unwrap();

    assert_eq!(attr(&doc, "f", "enctype"), None);
    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_no_form_ancestor_is_noop() {
    let mut doc = parse(r#"<div id="x"></div>"#);
    let before = snapshot(&doc);

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_missing_element_is_noop() {
    let mut doc = parse(r#"<form id="f"><span id="x"></span></form>"#);
    let before = snapshot(&doc);

    ensure_multipart_encoding(&mut doc, "does-not-exist").unwrap();

    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_repeated_calls_converge() {
    let mut once = parse(r#"<form id="f" enctype="text/plain"><input id="x" type="file"></form>"#);
    let mut twice = parse(r#"<form id="f" enctype="text/plain"><input id="x" type="file"></form>"#);

    ensure_multipart_encoding(&mut once, "x").unwrap();
    let mut fixer = EnctypeFixer::new(&mut twice);
    fixer.ensure_multipart_encoding("x").unwrap();
    fixer.ensure_multipart_encoding("x").unwrap();

    assert_eq!(snapshot(&once), snapshot(&twice));
    assert_eq!(attr(&twice, "f", "enctype"), Some("multipart/form-data"));
}

#[test]
fn test_walks_several_levels_up() {
    let mut doc = parse(r#"<form id="f"><div><div><span id="x"></span></div></div></form>"#);

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    assert_eq!(attr(&doc, "f", "enctype"), Some("multipart/form-data"));
    assert_eq!(attr(&doc, "f", "encoding"), Some("multipart/form-data"));
}

#[test]
fn test_unrelated_attributes_untouched() {
    let mut doc = parse(r#"<form id="f" method="post" action="/save"><span id="x"></span></form>"#);

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    let form = doc.get_element_by_id("f").unwrap();
    assert_eq!(
        get_outer_html(doc.tree(), form),
        r#"<form id="f" method="post" action="/save" enctype="multipart/form-data" encoding="multipart/form-data"><span id="x"></span></form>"#
    );
}

#[test]
fn test_existing_enctype_overwritten_in_place() {
    let mut doc = parse(r#"<form id="f" enctype="application/x-www-form-urlencoded" method="post"><i id="x"></i></form>"#);

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    let form = doc.get_element_by_id("f").unwrap();
    assert_eq!(
        get_outer_html(doc.tree(), form),
        r#"<form id="f" enctype="multipart/form-data" method="post" encoding="multipart/form-data"><i id="x"></i></form>"#
    );
}

#[test]
fn test_nearest_form_wins() {
    // The parser does not nest forms, so build the outer one by hand
    let mut doc = parse(r#"<form id="inner"><span id="x"></span></form>"#);
    let inner = doc.get_element_by_id("inner").unwrap();
    let body = doc.body();
    let outer = doc.tree_mut().create_element("form");
    doc.tree_mut().set_attribute(outer, "id", "outer").unwrap();
    doc.tree_mut().append_child(body, outer).unwrap();
    doc.tree_mut().append_child(outer, inner).unwrap();

    ensure_multipart_encoding(&mut doc, "x").unwrap();

    assert_eq!(attr(&doc, "inner", "enctype"), Some("multipart/form-data"));
    assert_eq!(attr(&doc, "outer", "enctype"), None);
}

#[test]
fn test_form_is_not_its_own_container() {
    let mut doc = parse(r#"<form id="f"></form>"#);
    let before = snapshot(&doc);

    ensure_multipart_encoding(&mut doc, "f").unwrap();

    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_injected_upload_control() {
    let parser = HtmlParser::new();
    let mut doc = parse(r#"<form id="f" method="post"><div id="zone"></div></form>"#);
    let zone = doc.get_element_by_id("zone").unwrap();
    assert_eq!(doc.form_enctype(doc.get_element_by_id("f").unwrap()), Some(FormEnctype::UrlEncoded));

    parser
        .inject_fragment(&mut doc, zone, r#"<div id="upload_0"><input type="file" name="file"></div>"#)
        .unwrap();
    ensure_multipart_encoding(&mut doc, "upload_0").unwrap();

    assert_eq!(attr(&doc, "f", "enctype"), Some("multipart/form-data"));
}

#[test]
fn test_read_only_form_error_propagates() {
    let mut doc = parse(r#"<form id="f"><span id="x"></span></form>"#);
    let form = doc.get_element_by_id("f").unwrap();
    doc.tree_mut().set_read_only(form, true).unwrap();

    let err = ensure_multipart_encoding(&mut doc, "x").unwrap_err();

    assert_eq!(
        err,
        DomError::NoModificationAllowed {
            node: form,
            attribute: "enctype".to_string(),
        }
    );
    assert_eq!(attr(&doc, "f", "enctype"), None);
}

#[test]
fn test_enctype_only_configuration() {
    let mut doc = parse(r#"<form id="f"><span id="x"></span></form>"#);
    let config = UploadConfig::default().with_legacy_encoding(false);

    EnctypeFixer::with_config(&mut doc, config)
        .ensure_multipart_encoding("x")
        .unwrap();

    assert_eq!(attr(&doc, "f", "enctype"), Some("multipart/form-data"));
    assert_eq!(attr(&doc, "f", "encoding"), None);
}

#[test]
fn test_container_tag_matches_case_insensitively() {
    let mut doc = parse(r#"<form id="f"><span id="x"></span></form>"#);
    let config = UploadConfig::default().with_container_tag("FORM");

    let mut fixer = EnctypeFixer::with_config(&mut doc, config);
    let form = fixer.find_form("x");
    fixer.ensure_multipart_encoding("x").unwrap();

    assert_eq!(form, doc.get_element_by_id("f"));
    assert_eq!(attr(&doc, "f", "enctype"), Some("multipart/form-data"));
}

#[test]
fn test_owned_document_round_trip() {
    let doc = parse(r#"<form id="f"><span id="x"></span></form>"#);
    let mut fixer = EnctypeFixer::new(doc);
    assert!(fixer.find_form("does-not-exist").is_none());

    let form = fixer.find_form("x").unwrap();
    let start = fixer.dom().get_element_by_id("x").unwrap();
    fixer.ensure_multipart_encoding_for(start).unwrap();

    let doc = fixer.into_inner();
    assert_eq!(doc.tree().get_attribute(form, "encoding"), Some("multipart/form-data"));
}
