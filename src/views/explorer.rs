//! 文件浏览器视图：按目录顺序列出全部文件

use super::html::{escape, push_escaped};
use crate::models::Catalog;

/// Short uppercase badge shown in front of a file name.
pub fn type_icon(type_tag: &str) -> String {
    let mut badge: String = type_tag.chars().take(4).collect();
    badge.make_ascii_uppercase();
    badge
}

pub fn render_explorer(catalog: &Catalog, current: &str) -> String {
    let mut out = String::from("<nav class=\"explorer\"><div class=\"explorer-title\">Files</div><ul>");

    for record in catalog.iter() {
        let active = record.name() == current;
        out.push_str(if active {
            "<li class=\"file active\">"
        } else {
            "<li class=\"file\">"
        });
        out.push_str("<a href=\"/");
        push_escaped(&mut out, record.name());
        out.push_str("\"><span class=\"icon icon-");
        push_escaped(&mut out, record.type_tag());
        out.push_str("\">");
        out.push_str(&escape(&type_icon(record.type_tag())));
        out.push_str("</span><span class=\"label\">");
        push_escaped(&mut out, record.name());
        out.push_str("</span></a></li>");
    }

    out.push_str("</ul></nav>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/views/explorer.rs"]
mod tests;
