//! Read-only code view: highlighted lines with an optional gutter.

use ropey::Rope;

use super::html::push_code_text;
use crate::kernel::services::ports::ViewerConfig;
use crate::kernel::syntax::{highlight_text, HighlightSpan};
use crate::models::FileRecord;

const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}',
];

pub fn render_code(record: &FileRecord, config: &ViewerConfig) -> String {
    let text = record.content();
    let rope = Rope::from_str(text);
    let highlights = match record.language_id() {
        Some(language) => highlight_text(language, text),
        None => Vec::new(),
    };

    let mut total = rope.len_lines();
    // 以换行结尾的文件最后一行是空的，不显示
    if total > 1 && rope.line(total - 1).len_bytes() == 0 {
        total -= 1;
    }

    let tab_width = config.tab_width();
    let mut out = String::with_capacity(text.len() * 2 + 128);
    out.push_str(&format!(
        "<pre class=\"code lang-{}\"><code>",
        record.language_id().map(|l| l.tag()).unwrap_or("plaintext")
    ));

    for index in 0..total {
        let raw = rope.line(index).to_string();
        let line = raw.trim_end_matches(LINE_BREAKS);
        let spans = highlights.get(index).map(Vec::as_slice).unwrap_or(&[]);

        out.push_str("<span class=\"line\">");
        if config.show_line_numbers {
            out.push_str(&format!("<span class=\"ln\">{}</span>", index + 1));
        }
        push_highlighted_line(&mut out, line, spans, tab_width);
        out.push_str("</span>\n");
    }

    out.push_str("</code></pre>");
    out
}

fn push_highlighted_line(out: &mut String, line: &str, spans: &[HighlightSpan], tab_width: usize) {
    let mut column = 0usize;
    let mut pos = 0usize;

    for span in spans {
        let start = span.start.min(line.len());
        let end = span.end.min(line.len());
        if start < pos || start >= end {
            continue;
        }
        let (Some(before), Some(inner)) = (line.get(pos..start), line.get(start..end)) else {
            continue;
        };

        push_code_text(out, before, tab_width, &mut column);
        out.push_str("<span class=\"");
        out.push_str(span.kind.css_class());
        out.push_str("\">");
        push_code_text(out, inner, tab_width, &mut column);
        out.push_str("</span>");
        pos = end;
    }

    if let Some(rest) = line.get(pos..) {
        push_code_text(out, rest, tab_width, &mut column);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/code_view.rs"]
mod tests;
