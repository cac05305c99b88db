//! Syntax highlighting for the read-only code view.
//!
//! A file is parsed once with tree-sitter, nodes are classified into [`HighlightKind`]s,
//! overlapping spans are flattened so the innermost node wins, and the result is projected
//! onto lines (offsets relative to each line start).

mod data;
mod js;
mod markup;
mod util;

use self::util::{is_comment_kind, is_regex_kind, is_string_kind};
use crate::kernel::language::LanguageId;
use ropey::Rope;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tree_sitter::{Language, Node, Parser, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    String,
    Regex,
    Keyword,
    KeywordControl,
    Type,
    Number,
    Function,
    Method,
    Variable,
    Parameter,
    Property,
    Constant,
    Attribute,
    Tag,
}

impl HighlightKind {
    /// Tree traversal skips the children of a "leaf" kind.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::String | Self::Regex | Self::Attribute
        )
    }

    /// CSS class used by the page stylesheet.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "tok-comment",
            Self::String => "tok-string",
            Self::Regex => "tok-regex",
            Self::Keyword => "tok-keyword",
            Self::KeywordControl => "tok-control",
            Self::Type => "tok-type",
            Self::Number => "tok-number",
            Self::Function | Self::Method => "tok-function",
            Self::Variable | Self::Parameter | Self::Property => "tok-variable",
            Self::Constant => "tok-constant",
            Self::Attribute => "tok-attribute",
            Self::Tag => "tok-tag",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AbsHighlightSpan {
    start: usize,
    end: usize,
    kind: HighlightKind,
    depth: usize,
}

fn grammar(language: LanguageId) -> Option<Language> {
    match language {
        LanguageId::JavaScript => Some(tree_sitter_javascript::language()),
        LanguageId::TypeScript => Some(tree_sitter_typescript::language_typescript()),
        LanguageId::Json => Some(tree_sitter_json::language()),
        LanguageId::Yaml => Some(tree_sitter_yaml::language()),
        LanguageId::Html => Some(tree_sitter_html::language()),
        LanguageId::Css => Some(tree_sitter_css::language()),
        LanguageId::Toml => Some(tree_sitter_toml::language()),
        LanguageId::Bash => Some(tree_sitter_bash::language()),
        LanguageId::Markdown => None,
    }
}

/// Highlight a whole document.
///
/// Returns one span list per rope line; languages without a grammar (or a failed parse)
/// yield empty lists.
pub fn highlight_text(language: LanguageId, text: &str) -> Vec<Vec<HighlightSpan>> {
    let rope = Rope::from_str(text);
    let total_lines = rope.len_lines().max(1);

    let Some(tree) = parse(language, text) else {
        return vec![Vec::new(); total_lines];
    };

    let spans = collect_highlights(language, &tree, 0, rope.len_bytes());
    project_abs_spans_to_lines(&rope, &spans)
}

fn parse(language: LanguageId, text: &str) -> Option<Tree> {
    let grammar = grammar(language)?;
    let mut parser = Parser::new();
    if let Err(err) = parser.set_language(grammar) {
        tracing::warn!(language = language.tag(), error = %err, "grammar rejected");
        return None;
    }
    parser.parse(text, None)
}

fn merge_adjacent_spans(spans: &mut Vec<HighlightSpan>) {
    if spans.len() <= 1 {
        return;
    }

    let mut out: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        if let Some(prev) = out.last_mut() {
            if prev.kind == span.kind && span.start <= prev.end {
                prev.end = prev.end.max(span.end);
                continue;
            }
        }
        out.push(span);
    }
    *spans = out;
}

fn project_abs_spans_to_lines(rope: &Rope, spans: &[AbsHighlightSpan]) -> Vec<Vec<HighlightSpan>> {
    let total_lines = rope.len_lines().max(1);
    let total_bytes = rope.len_bytes();
    let mut per_line = vec![Vec::new(); total_lines];

    for span in spans {
        let span_start = span.start.min(total_bytes);
        let span_end = span.end.min(total_bytes);
        if span_start >= span_end {
            continue;
        }

        let first_line = rope.byte_to_line(span_start);
        let last_line = rope.byte_to_line(span_end.saturating_sub(1));

        for line in first_line..=last_line.min(total_lines - 1) {
            let line_start = rope.line_to_byte(line);
            let line_end = rope.line_to_byte((line + 1).min(total_lines));

            let s = span_start.max(line_start);
            let e = span_end.min(line_end);
            if s >= e {
                continue;
            }

            per_line[line].push(HighlightSpan {
                start: s - line_start,
                end: e - line_start,
                kind: span.kind,
            });
        }
    }

    for line_spans in &mut per_line {
        merge_adjacent_spans(line_spans);
    }

    per_line
}

fn collect_highlights(
    language: LanguageId,
    tree: &Tree,
    start_byte: usize,
    end_byte: usize,
) -> Vec<AbsHighlightSpan> {
    let root = tree.root_node();
    let mut stack = vec![(root, 0usize)];
    let mut spans = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        let node_start = node.start_byte();
        let node_end = node.end_byte();

        if node_end <= start_byte || node_start >= end_byte {
            continue;
        }

        if let Some(kind) = classify_node(language, node) {
            spans.push(AbsHighlightSpan {
                start: node_start,
                end: node_end,
                kind,
                depth,
            });

            if kind.is_leaf() {
                continue;
            }
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push((child, depth.saturating_add(1)));
            }
        }
    }

    normalize_overlapping_highlight_spans(spans, start_byte, end_byte)
}

/// Flatten nested spans: at every position the deepest (then shortest) span wins.
fn normalize_overlapping_highlight_spans(
    spans: Vec<AbsHighlightSpan>,
    start_byte: usize,
    end_byte: usize,
) -> Vec<AbsHighlightSpan> {
    if spans.is_empty() || start_byte >= end_byte {
        return Vec::new();
    }

    let mut active_keys = Vec::with_capacity(spans.len());
    let mut events = Vec::with_capacity(spans.len().saturating_mul(2));
    for (seq, span) in spans.into_iter().enumerate() {
        let clipped_start = span.start.max(start_byte);
        let clipped_end = span.end.min(end_byte);
        if clipped_start >= clipped_end {
            continue;
        }

        let id = active_keys.len();
        active_keys.push(ActiveSpanKey::from_span(span, seq));
        events.push(SpanEvent {
            pos: clipped_start,
            kind: SpanEventKind::Start,
            id,
        });
        events.push(SpanEvent {
            pos: clipped_end,
            kind: SpanEventKind::End,
            id,
        });
    }

    if events.is_empty() {
        return Vec::new();
    }

    events.sort_by(|a, b| {
        a.pos
            .cmp(&b.pos)
            .then_with(|| match (a.kind, b.kind) {
                (SpanEventKind::End, SpanEventKind::Start) => Ordering::Less,
                (SpanEventKind::Start, SpanEventKind::End) => Ordering::Greater,
                _ => Ordering::Equal,
            })
            .then(a.id.cmp(&b.id))
    });

    let mut active: BTreeSet<ActiveSpanKey> = BTreeSet::new();
    let mut flattened: Vec<AbsHighlightSpan> = Vec::with_capacity(events.len() / 2);
    let mut prev_pos = events[0].pos;

    for event in events {
        if prev_pos < event.pos {
            if let Some(top) = active.iter().next_back() {
                flattened.push(AbsHighlightSpan {
                    start: prev_pos,
                    end: event.pos,
                    kind: top.kind,
                    depth: top.depth,
                });
            }
            prev_pos = event.pos;
        }

        let key = active_keys[event.id];
        match event.kind {
            SpanEventKind::Start => {
                active.insert(key);
            }
            SpanEventKind::End => {
                active.remove(&key);
            }
        }
    }

    merge_adjacent_abs_spans(&mut flattened);
    flattened
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanEventKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanEvent {
    pos: usize,
    kind: SpanEventKind,
    id: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveSpanKey {
    depth: usize,
    len: usize,
    start: usize,
    seq: usize,
    kind: HighlightKind,
}

impl ActiveSpanKey {
    fn from_span(span: AbsHighlightSpan, seq: usize) -> Self {
        Self {
            depth: span.depth,
            len: span.end.saturating_sub(span.start),
            start: span.start,
            seq,
            kind: span.kind,
        }
    }
}

impl Ord for ActiveSpanKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .cmp(&other.depth)
            .then_with(|| other.len.cmp(&self.len))
            .then_with(|| other.start.cmp(&self.start))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ActiveSpanKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn merge_adjacent_abs_spans(spans: &mut Vec<AbsHighlightSpan>) {
    if spans.len() <= 1 {
        return;
    }

    let mut out: Vec<AbsHighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        if let Some(prev) = out.last_mut() {
            if prev.kind == span.kind && prev.depth == span.depth && span.start <= prev.end {
                prev.end = prev.end.max(span.end);
                continue;
            }
        }
        out.push(span);
    }
    *spans = out;
}

fn classify_node(language: LanguageId, node: Node<'_>) -> Option<HighlightKind> {
    let kind = node.kind();

    if is_comment_kind(kind) {
        return Some(HighlightKind::Comment);
    }
    if is_regex_kind(kind) {
        return Some(HighlightKind::Regex);
    }
    if is_string_kind(kind) {
        return Some(HighlightKind::String);
    }
    if kind.contains("integer") || kind.contains("float") || kind.contains("number") {
        return Some(HighlightKind::Number);
    }
    if matches!(kind, "predefined_type" | "type_identifier") {
        return Some(HighlightKind::Type);
    }
    if kind == "decorator" {
        return Some(HighlightKind::Attribute);
    }

    let classified = match language {
        LanguageId::JavaScript | LanguageId::TypeScript => js::classify(node),
        LanguageId::Html => markup::classify_markup(node),
        LanguageId::Css => markup::classify_css(node),
        LanguageId::Bash => markup::classify_bash(node),
        LanguageId::Json | LanguageId::Yaml | LanguageId::Toml => data::classify(node),
        LanguageId::Markdown => None,
    };
    if classified.is_some() {
        return classified;
    }

    if is_keyword(language, node) {
        return Some(HighlightKind::Keyword);
    }
    None
}

fn is_keyword(language: LanguageId, node: Node<'_>) -> bool {
    let kind = node.kind();
    match language {
        // Named `function`/`class` nodes are whole expressions, not the keyword token.
        LanguageId::JavaScript | LanguageId::TypeScript => !node.is_named() && js::is_keyword(kind),
        LanguageId::Json => data::is_json_keyword(kind),
        LanguageId::Yaml => data::is_yaml_keyword(kind),
        LanguageId::Toml => data::is_toml_keyword(kind),
        LanguageId::Bash => markup::is_bash_keyword(kind),
        LanguageId::Html | LanguageId::Css | LanguageId::Markdown => false,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/syntax.rs"]
mod tests;
