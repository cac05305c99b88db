use tree_sitter::Node;

pub(super) fn node_is_field(parent: Node<'_>, field_name: &str, node: Node<'_>) -> bool {
    parent
        .child_by_field_name(field_name)
        .is_some_and(|field| same_node(field, node))
}

pub(super) fn same_node(left: Node<'_>, right: Node<'_>) -> bool {
    left.start_byte() == right.start_byte() && left.end_byte() == right.end_byte()
}

pub(super) fn is_comment_kind(kind: &str) -> bool {
    kind.contains("comment")
}

pub(super) fn is_regex_kind(kind: &str) -> bool {
    kind.contains("regex") || kind == "regular_expression"
}

pub(super) fn is_string_kind(kind: &str) -> bool {
    kind.contains("string") || kind == "raw_text_string"
}
