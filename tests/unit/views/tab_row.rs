use super::*;

fn entry(name: &str, type_tag: &str, active: bool) -> TabEntry {
    TabEntry {
        name: name.into(),
        type_tag: type_tag.into(),
        active,
    }
}

#[test]
fn renders_tabs_in_order_with_close_links() {
    let tabs = vec![
        entry("index.html", "html", false),
        entry("script.js", "js", true),
    ];
    let html = render_tab_row(&tabs, "script.js");

    let first = html.find("href=\"/index.html\"").unwrap();
    let second = html.find("href=\"/script.js\"").unwrap();
    assert!(first < second);
    assert!(html.contains("href=\"/script.js?close=index.html\""));
    assert!(html.contains("href=\"/script.js?close=script.js\""));
    assert_eq!(html.matches("class=\"tab active\"").count(), 1);
}

#[test]
fn empty_strip_is_just_the_container() {
    assert_eq!(
        render_tab_row(&[], "index.html"),
        "<div class=\"tab-row\" role=\"tablist\"></div>"
    );
}
