use super::*;
use crate::models::HOME_FILE;

#[test]
fn every_catalog_name_resolves_to_its_record() {
    let catalog = Catalog::builtin();
    let resolver = Resolver::new(&catalog, HOME_FILE);
    for name in catalog.names() {
        let record = resolver.resolve(name).expect("known file");
        assert_eq!(record.name(), name);
    }
}

#[test]
fn empty_path_resolves_to_home() {
    let catalog = Catalog::builtin();
    let resolver = Resolver::new(&catalog, HOME_FILE);
    assert_eq!(resolver.resolve("").unwrap().name(), "index.html");
    assert_eq!(
        resolver.resolve("").unwrap(),
        resolver.resolve("index.html").unwrap()
    );
}

#[test]
fn unknown_and_case_mismatched_paths_are_not_found() {
    let catalog = Catalog::builtin();
    let resolver = Resolver::new(&catalog, HOME_FILE);
    for path in ["missing.txt", "INDEX.html", "/index.html", "/", "script.js/"] {
        let err = resolver.resolve(path).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }), "{}", path);
    }
    assert_eq!(
        resolver.resolve("nope").unwrap_err().to_string(),
        "File not found: nope"
    );
}

#[test]
fn separator_is_not_stripped_twice() {
    let catalog = Catalog::builtin();
    let resolver = Resolver::new(&catalog, HOME_FILE);
    assert_eq!(resolver.normalize(""), "index.html");
    assert_eq!(resolver.normalize("/index.html"), "/index.html");
    assert!(resolver.resolve("/index.html").is_err());
}

#[test]
fn accept_header_selects_html_or_raw() {
    assert_eq!(
        Negotiated::from_accept(Some("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")),
        Negotiated::Html
    );
    assert_eq!(Negotiated::from_accept(Some("*/*")), Negotiated::Raw);
    assert_eq!(Negotiated::from_accept(Some("text/plain")), Negotiated::Raw);
    assert_eq!(Negotiated::from_accept(None), Negotiated::Raw);
}
