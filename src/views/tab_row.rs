use super::explorer::type_icon;
use super::html::{escape, push_escaped};
use crate::kernel::TabEntry;

/// The open-tab strip. Each tab links to its file; the close control reloads the current
/// file with `?close=<name>`.
pub fn render_tab_row(tabs: &[TabEntry], current: &str) -> String {
    let mut out = String::from("<div class=\"tab-row\" role=\"tablist\">");

    for tab in tabs {
        out.push_str(if tab.active {
            "<div class=\"tab active\" role=\"tab\" aria-selected=\"true\">"
        } else {
            "<div class=\"tab\" role=\"tab\" aria-selected=\"false\">"
        });

        out.push_str("<a class=\"tab-title\" href=\"/");
        push_escaped(&mut out, &tab.name);
        out.push_str("\"><span class=\"icon icon-");
        push_escaped(&mut out, &tab.type_tag);
        out.push_str("\">");
        out.push_str(&escape(&type_icon(&tab.type_tag)));
        out.push_str("</span>");
        push_escaped(&mut out, &tab.name);
        out.push_str("</a>");

        out.push_str("<a class=\"tab-close\" title=\"Close\" href=\"/");
        push_escaped(&mut out, current);
        out.push_str("?close=");
        push_escaped(&mut out, &tab.name);
        out.push_str("\">&times;</a></div>");
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_row.rs"]
mod tests;
