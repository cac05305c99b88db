//! HTML text helpers.

/// Escape text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Escape code text, expanding tabs to the next multiple of `tab_width`.
///
/// `column` carries the display column across consecutive segments of one line.
pub fn push_code_text(out: &mut String, text: &str, tab_width: usize, column: &mut usize) {
    let tab_width = tab_width.max(1);
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - (*column % tab_width);
            out.extend(std::iter::repeat(' ').take(pad));
            *column += pad;
            continue;
        }
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
        *column += 1;
    }
}

/// JSON text that is safe inside a `<script>` element.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
#[path = "../../tests/unit/views/html.rs"]
mod tests;
