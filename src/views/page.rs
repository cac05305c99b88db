//! Full HTML page: sidebar, tab strip, code view, embedded catalog.

use super::code_view::render_code;
use super::explorer::render_explorer;
use super::html::{escape, script_safe_json};
use super::tab_row::render_tab_row;
use crate::kernel::services::ports::ViewerConfig;
use crate::kernel::TabEntry;
use crate::models::{Catalog, FileRecord};

const STYLE: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; display: flex; height: 100vh; background: #1e1e1e; color: #d4d4d4;
  font: 13px/1.5 -apple-system, "Segoe UI", sans-serif; }
a { color: inherit; text-decoration: none; }
.explorer { width: 220px; flex: none; background: #252526; overflow-y: auto; }
.explorer-title { padding: 8px 12px; font-size: 11px; text-transform: uppercase; color: #bbb; }
.explorer ul { list-style: none; margin: 0; padding: 0; }
.explorer li a { display: flex; gap: 6px; padding: 2px 12px; }
.explorer li.active a { background: #37373d; color: #fff; }
.icon { font-size: 9px; font-weight: bold; min-width: 28px; color: #8a8a8a; }
.icon-html { color: #e44d26; } .icon-js { color: #f0db4f; } .icon-css { color: #42a5f5; }
.icon-json { color: #cbcb41; } .icon-md { color: #519aba; }
main { flex: 1; display: flex; flex-direction: column; min-width: 0; }
.tab-row { display: flex; background: #2d2d2d; overflow-x: auto; flex: none; }
.tab { display: flex; align-items: center; gap: 6px; padding: 6px 10px; background: #2d2d2d;
  border-right: 1px solid #252526; color: #969696; white-space: nowrap; }
.tab.active { background: #1e1e1e; color: #fff; }
.tab-close { opacity: .6; padding: 0 2px; } .tab-close:hover { opacity: 1; }
.code { margin: 0; padding: 8px 0; overflow: auto; flex: 1;
  font: 13px/1.5 Menlo, Consolas, monospace; }
.status { flex: none; padding: 2px 12px; background: #007acc; color: #fff; font-size: 12px; }
.line { display: block; padding-right: 16px; white-space: pre; }
.ln { display: inline-block; width: 48px; padding-right: 16px; text-align: right; color: #858585;
  user-select: none; }
.tok-comment { color: #6a9955; } .tok-string { color: #ce9178; } .tok-regex { color: #d16969; }
.tok-keyword { color: #569cd6; } .tok-control { color: #c586c0; } .tok-type { color: #4ec9b0; }
.tok-number { color: #b5cea8; } .tok-function { color: #dcdcaa; } .tok-variable { color: #9cdcfe; }
.tok-constant { color: #4fc1ff; } .tok-attribute { color: #9cdcfe; } .tok-tag { color: #569cd6; }
"#;

pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub record: &'a FileRecord,
    pub tabs: &'a [TabEntry],
    pub viewer: &'a ViewerConfig,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let name = ctx.record.name();
    let catalog_json = match serde_json::to_string(ctx.catalog) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "catalog serialization failed");
            "{}".to_string()
        }
    };
    let current_json = serde_json::to_string(name).unwrap_or_else(|_| "\"\"".to_string());

    let mut out = String::with_capacity(ctx.record.content().len() * 3 + catalog_json.len() + 4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{} - zview</title>\n", escape(name)));
    out.push_str("<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n");
    out.push_str(&format!("<body data-current-file=\"{}\">\n", escape(name)));

    out.push_str(&render_explorer(ctx.catalog, name));
    out.push_str("\n<main>\n");
    out.push_str(&render_tab_row(ctx.tabs, name));
    out.push('\n');
    out.push_str(&render_code(ctx.record, ctx.viewer));
    out.push_str("\n<footer class=\"status\">");
    out.push_str(&escape(&status_text(ctx.record)));
    out.push_str("</footer>\n</main>\n");

    out.push_str("<script type=\"application/json\" id=\"zview-catalog\">");
    out.push_str(&script_safe_json(&catalog_json));
    out.push_str("</script>\n<script>const CURRENT_FILE = ");
    out.push_str(&script_safe_json(&current_json));
    out.push_str(";\n");
    // 关闭标签后去掉地址栏里的 ?close=，刷新或后退不会再次关闭
    out.push_str("if (location.search) history.replaceState(null, \"\", \"/\" + CURRENT_FILE);\n");
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

/// Status bar: language and line count.
fn status_text(record: &FileRecord) -> String {
    let language = record
        .language_id()
        .map(|id| id.display_name())
        .unwrap_or("Plain Text");
    let lines = record.content().lines().count().max(1);
    format!("{} | {} lines", language, lines)
}

#[cfg(test)]
#[path = "../../tests/unit/views/page.rs"]
mod tests;
