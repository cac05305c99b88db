use super::*;

#[test]
fn builtin_catalog_keeps_insertion_order() {
    let catalog = Catalog::builtin();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(
        names,
        vec!["index.html", "script.js", "styles.css", "package.json", "README.md"]
    );
    assert!(catalog.ensure_contains(HOME_FILE).is_ok());
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get("script.js").map(|r| r.type_tag()), Some("js"));
    assert!(catalog.get("Script.js").is_none());
    assert!(catalog.get("/script.js").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Catalog::new([
        FileRecord::new("a.js", "1", "javascript", "js"),
        FileRecord::new("a.js", "2", "javascript", "js"),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(name) if name == "a.js"));
}

#[test]
fn invalid_names_are_rejected() {
    for name in ["", "/abs.js", "a b.js", "../up.js", "a//b.js", "q?.js", "plus+.js"] {
        let err = Catalog::new([FileRecord::new(name, "", "plaintext", "txt")]).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidName(_)),
            "{:?} should be rejected",
            name
        );
    }
    assert!(Catalog::new([FileRecord::new("src/lib/a-b_c.min.js", "", "javascript", "js")]).is_ok());
}

#[test]
fn json_catalog_derives_missing_tags_from_extension() {
    let data = r#"[
        {"name": "index.html", "content": "<p>hi</p>"},
        {"name": "notes", "content": "plain"},
        {"name": "app.ts", "content": "let x = 1;", "language": "typescript", "type": "ts"}
    ]"#;
    let catalog = Catalog::from_json_str(data).unwrap();

    let index = catalog.get("index.html").unwrap();
    assert_eq!(index.language(), "html");
    assert_eq!(index.type_tag(), "html");

    let notes = catalog.get("notes").unwrap();
    assert_eq!(notes.language(), "plaintext");
    assert_eq!(notes.type_tag(), "txt");
    assert_eq!(notes.language_id(), None);

    let app = catalog.get("app.ts").unwrap();
    assert_eq!(app.language_id(), Some(LanguageId::TypeScript));
}

#[test]
fn malformed_json_catalog_is_a_parse_error() {
    let err = Catalog::from_json_str("{\"name\": 1}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn load_reads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"[{"name": "index.html", "content": "x"}]"#).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);

    let missing = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, CatalogError::Io(_)));
}

#[test]
fn missing_home_is_reported() {
    let catalog = Catalog::new([FileRecord::new("a.js", "", "javascript", "js")]).unwrap();
    let err = catalog.ensure_contains(HOME_FILE).unwrap_err();
    assert_eq!(err.to_string(), "catalog does not contain the home file index.html");
}

#[test]
fn serialized_catalog_is_an_ordered_object() {
    let catalog = Catalog::new([
        FileRecord::new("z.css", "a{}", "css", "css"),
        FileRecord::new("a.js", "1;", "javascript", "js"),
    ])
    .unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    assert_eq!(
        json,
        r#"{"z.css":{"content":"a{}","language":"css","type":"css"},"a.js":{"content":"1;","language":"javascript","type":"js"}}"#
    );
}
