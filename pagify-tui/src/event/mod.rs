//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件 → 消息
//!         mod keymap;         // 快捷键定义
//!
//!
//!     handler.rs 按以下顺序决定一个按键的含义：
//!         1. 有弹窗：交给弹窗（Esc / Ctrl+C 关闭）
//!         2. 搜索模式：字符进入查询框
//!         3. 全局快捷键（退出、帮助、刷新、登录 / 登出、返回、切换焦点）
//!         4. 导航面板或内容面板（按当前页面区分）
//!
//!     handle_event 只读取 App，不修改它：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage
//!
//!     返回的 AppMessage 在 src/app.rs 中交给 update::update(app, msg)。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
