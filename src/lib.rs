//! zview - 只读代码浏览服务
//!
//! 模块结构：
//! - models: 数据模型（Catalog, FileRecord）
//! - kernel: 核心逻辑（路径解析、标签页状态机、语法高亮、配置）
//! - views: 视图层（HTML 渲染）
//! - app: 应用层（HTTP 路由、服务器生命周期）

pub mod app;
pub mod kernel;
pub mod models;
pub mod views;
