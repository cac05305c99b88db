//! 视图层模块
//!
//! 纯渲染，输出 HTML 字符串：
//! - explorer: 侧边栏文件列表
//! - tab_row: 打开的标签页
//! - code_view: 只读代码视图（语法高亮）
//! - page: 完整页面

pub mod code_view;
pub mod explorer;
pub mod html;
pub mod page;
pub mod tab_row;

pub use code_view::render_code;
pub use explorer::render_explorer;
pub use page::{render_page, PageContext};
pub use tab_row::render_tab_row;
