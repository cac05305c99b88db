use tree_sitter::Node;

use super::HighlightKind;

pub(super) fn classify_markup(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "tag_name" => Some(HighlightKind::Tag),
        "doctype" => Some(HighlightKind::Keyword),
        "attribute_name" => Some(HighlightKind::Attribute),
        "attribute_value" | "quoted_attribute_value" => Some(HighlightKind::String),
        _ => None,
    }
}

pub(super) fn classify_css(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "tag_name"
        | "class_name"
        | "id_name"
        | "pseudo_class_selector"
        | "pseudo_element_selector" => Some(HighlightKind::Type),
        "property_name" | "feature_name" => Some(HighlightKind::Property),
        "color_value" | "integer_value" | "float_value" => Some(HighlightKind::Number),
        "plain_value" => Some(HighlightKind::Constant),
        "at_keyword" | "important" => Some(HighlightKind::Keyword),
        "function_name" => Some(HighlightKind::Function),
        _ => None,
    }
}

pub(super) fn classify_bash(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "command_name" => Some(HighlightKind::Function),
        "variable_name" => Some(HighlightKind::Variable),
        _ => None,
    }
}

pub(super) fn is_bash_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "if" | "then"
            | "else"
            | "elif"
            | "fi"
            | "case"
            | "esac"
            | "for"
            | "while"
            | "until"
            | "do"
            | "done"
            | "in"
            | "function"
            | "select"
            | "return"
            | "exit"
            | "local"
            | "declare"
            | "export"
            | "readonly"
            | "unset"
    )
}
