use super::*;

fn kind_at(spans: &[HighlightSpan], idx: usize) -> Option<HighlightKind> {
    spans
        .iter()
        .find(|s| s.start <= idx && idx < s.end)
        .map(|s| s.kind)
}

#[test]
fn test_highlight_javascript_keywords_functions_and_strings() {
    let src = "// hi\nfunction greet(name) {\n    return `Hello, ${name}!`;\n}\nconsole.log(\"x\");\n";
    let lines = highlight_text(LanguageId::JavaScript, src);
    assert_eq!(lines.len(), 6);

    assert_eq!(kind_at(&lines[0], 0), Some(HighlightKind::Comment));

    let line = "function greet(name) {";
    assert_eq!(kind_at(&lines[1], 0), Some(HighlightKind::Keyword));
    assert_eq!(
        kind_at(&lines[1], line.find("greet").unwrap()),
        Some(HighlightKind::Function)
    );

    let line = "    return `Hello, ${name}!`;";
    assert_eq!(
        kind_at(&lines[2], line.find("return").unwrap()),
        Some(HighlightKind::KeywordControl)
    );
    assert_eq!(
        kind_at(&lines[2], line.find('`').unwrap()),
        Some(HighlightKind::String)
    );

    let line = "console.log(\"x\");";
    assert_eq!(
        kind_at(&lines[4], line.find("log").unwrap()),
        Some(HighlightKind::Method)
    );
    assert_eq!(
        kind_at(&lines[4], line.find('"').unwrap()),
        Some(HighlightKind::String)
    );
}

#[test]
fn test_function_expression_punctuation_is_not_a_keyword() {
    let src = "const f = function () { return 1; };";
    let lines = highlight_text(LanguageId::JavaScript, src);
    let brace = src.find('{').unwrap();
    assert_ne!(kind_at(&lines[0], brace), Some(HighlightKind::Keyword));
    assert_eq!(
        kind_at(&lines[0], src.find("function").unwrap()),
        Some(HighlightKind::Keyword)
    );
}

#[test]
fn test_highlight_html_tags_and_attributes() {
    let src = "<p class=\"a\">hi</p>";
    let lines = highlight_text(LanguageId::Html, src);
    assert_eq!(lines.len(), 1);
    assert_eq!(kind_at(&lines[0], 1), Some(HighlightKind::Tag));
    assert_eq!(
        kind_at(&lines[0], src.find("class").unwrap()),
        Some(HighlightKind::Attribute)
    );
    assert_eq!(
        kind_at(&lines[0], src.find("\"a\"").unwrap() + 1),
        Some(HighlightKind::String)
    );
    assert_eq!(kind_at(&lines[0], src.find("hi").unwrap()), None);
}

#[test]
fn test_highlight_css_selectors_properties_and_colors() {
    let src = "h1 {\n    color: #333;\n}\n";
    let lines = highlight_text(LanguageId::Css, src);
    assert_eq!(kind_at(&lines[0], 0), Some(HighlightKind::Type));

    let line = "    color: #333;";
    assert_eq!(
        kind_at(&lines[1], line.find("color").unwrap()),
        Some(HighlightKind::Property)
    );
    assert_eq!(
        kind_at(&lines[1], line.find('#').unwrap() + 1),
        Some(HighlightKind::Number)
    );
}

#[test]
fn test_highlight_json_literals() {
    let src = "{\"a\": true, \"n\": 1}";
    let lines = highlight_text(LanguageId::Json, src);
    assert_eq!(kind_at(&lines[0], 1), Some(HighlightKind::String));
    assert_eq!(
        kind_at(&lines[0], src.find("true").unwrap()),
        Some(HighlightKind::Keyword)
    );
    assert_eq!(
        kind_at(&lines[0], src.find('1').unwrap()),
        Some(HighlightKind::Number)
    );
}

#[test]
fn test_multiline_comment_is_projected_onto_each_line() {
    let src = "/* a\nb */\nx;";
    let lines = highlight_text(LanguageId::JavaScript, src);
    assert_eq!(lines.len(), 3);
    assert_eq!(kind_at(&lines[0], 0), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&lines[1], 0), Some(HighlightKind::Comment));
    assert_eq!(kind_at(&lines[2], 0), None);
}

#[test]
fn test_markdown_is_not_highlighted() {
    let lines = highlight_text(LanguageId::Markdown, "# Title\n\n- item\n");
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.is_empty()));
}

#[test]
fn test_spans_are_sorted_and_disjoint() {
    let src = "const a = { b: [1, \"two\", /re/g], c: () => a.b.map(x => x * 2) };";
    for spans in highlight_text(LanguageId::JavaScript, src) {
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{:?}", pair);
        }
        for span in &spans {
            assert!(span.start < span.end);
        }
    }
}

#[test]
fn test_css_class_names_are_prefixed() {
    for kind in [
        HighlightKind::Comment,
        HighlightKind::Method,
        HighlightKind::Parameter,
        HighlightKind::Tag,
    ] {
        assert!(kind.css_class().starts_with("tok-"));
    }
    assert_eq!(HighlightKind::Method.css_class(), HighlightKind::Function.css_class());
}
