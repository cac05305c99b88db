use super::*;
use crate::models::HOME_FILE;

fn render(name: &str, tabs: &[TabEntry]) -> String {
    let catalog = Catalog::builtin();
    let record = catalog.get(name).unwrap();
    let viewer = ViewerConfig::default();
    render_page(&PageContext {
        catalog: &catalog,
        record,
        tabs,
        viewer: &viewer,
    })
}

#[test]
fn embeds_current_file_title_and_catalog() {
    let html = render("script.js", &[]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>script.js - zview</title>"));
    assert!(html.contains("<body data-current-file=\"script.js\">"));
    assert!(html.contains("const CURRENT_FILE = \"script.js\";"));
    assert!(html.contains("<script type=\"application/json\" id=\"zview-catalog\">{\"index.html\":"));
}

#[test]
fn embedded_catalog_cannot_close_the_script_element() {
    let html = render(HOME_FILE, &[]);
    let start = html.find("id=\"zview-catalog\">").unwrap();
    let end = html[start..].find("</script>").unwrap() + start;
    let json = &html[start + "id=\"zview-catalog\">".len()..end];
    assert!(json.contains("<\\/html>"));

    let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
    let keys: Vec<&str> = parsed.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    assert_eq!(parsed["README.md"]["type"], "md");
}

#[test]
fn page_contains_sidebar_tabs_and_code() {
    let tabs = vec![TabEntry {
        name: "README.md".into(),
        type_tag: "md".into(),
        active: true,
    }];
    let html = render("README.md", &tabs);
    assert!(html.contains("class=\"explorer\""));
    assert!(html.contains("href=\"/README.md?close=README.md\""));
    assert!(html.contains("<pre class=\"code lang-markdown\">"));
    assert!(html.contains("# My Project"));
}

#[test]
fn close_query_is_dropped_from_the_address_bar() {
    let html = render("index.html", &[]);
    assert!(html.contains("if (location.search) history.replaceState(null, \"\", \"/\" + CURRENT_FILE);"));
}

#[test]
fn status_bar_names_the_language() {
    let html = render("script.js", &[]);
    assert!(html.contains("<footer class=\"status\">JavaScript | 8 lines</footer>"));

    let html = render("package.json", &[]);
    assert!(html.contains("<footer class=\"status\">JSON | 8 lines</footer>"));
}
