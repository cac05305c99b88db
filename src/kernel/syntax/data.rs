use tree_sitter::Node;

use super::HighlightKind;

// JSON keys are plain string nodes and stay strings.
pub(super) fn classify(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "bare_key" | "quoted_key" | "dotted_key" => Some(HighlightKind::Property),
        "boolean" => Some(HighlightKind::Constant),
        _ => None,
    }
}

pub(super) fn is_json_keyword(kind: &str) -> bool {
    matches!(kind, "true" | "false" | "null")
}

pub(super) fn is_yaml_keyword(kind: &str) -> bool {
    matches!(kind, "true" | "false" | "null")
}

pub(super) fn is_toml_keyword(kind: &str) -> bool {
    matches!(kind, "true" | "false")
}
