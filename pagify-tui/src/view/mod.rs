//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         mod components;     // 导航面板、状态栏、弹窗
//!         mod pages;          // 各页面内容
//!         pub mod theme;      // 主题与样式
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
