use tree_sitter::Node;

use super::util::node_is_field;
use super::HighlightKind;

pub(super) fn classify(node: Node<'_>) -> Option<HighlightKind> {
    match node.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => classify_identifier(node),
        "property_identifier" => classify_property_identifier(node),
        "if" | "else" | "for" | "while" | "do" | "switch" | "case" | "return" | "break"
        | "continue" | "throw" | "try" | "catch" | "finally" | "await" => {
            Some(HighlightKind::KeywordControl)
        }
        "true" | "false" | "null" | "undefined" => Some(HighlightKind::Constant),
        _ => None,
    }
}

fn classify_identifier(node: Node<'_>) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match parent.kind() {
        "function_declaration"
        | "function"
        | "generator_function_declaration"
        | "generator_function"
            if node_is_field(parent, "name", node) =>
        {
            Some(HighlightKind::Function)
        }
        "call_expression" if node_is_field(parent, "function", node) => {
            Some(HighlightKind::Function)
        }
        "class_declaration" | "class" if node_is_field(parent, "name", node) => {
            Some(HighlightKind::Type)
        }
        "variable_declarator" if node_is_field(parent, "name", node) => {
            Some(HighlightKind::Variable)
        }
        "formal_parameters" | "required_parameter" | "optional_parameter" => {
            Some(HighlightKind::Parameter)
        }
        _ => None,
    }
}

fn classify_property_identifier(node: Node<'_>) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match parent.kind() {
        "member_expression" => {
            let is_call = parent.parent().is_some_and(|grand| {
                grand.kind() == "call_expression" && node_is_field(grand, "function", parent)
            });
            Some(if is_call {
                HighlightKind::Method
            } else {
                HighlightKind::Property
            })
        }
        "method_definition" if node_is_field(parent, "name", node) => Some(HighlightKind::Function),
        _ => None,
    }
}

pub(super) fn is_keyword(kind: &str) -> bool {
    matches!(
        kind,
        "async"
            | "class"
            | "const"
            | "debugger"
            | "default"
            | "delete"
            | "export"
            | "extends"
            | "from"
            | "function"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "of"
            | "private"
            | "protected"
            | "public"
            | "readonly"
            | "static"
            | "super"
            | "this"
            | "type"
            | "typeof"
            | "var"
            | "void"
            | "with"
            | "yield"
    )
}
