//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! 每条用户输入都被 Event 层翻译成一条 `AppMessage`；
//! 后台任务的结果以 `AppMessage::Backend(BackendEvent)` 的形式回到同一条路径。
//!
//!     AppMessage
//!         ├── Navigation(NavigationMessage)   左侧导航
//!         ├── Content(ContentMessage)         右侧页面（列表、搜索、动作）
//!         ├── Modal(ModalMessage)             弹窗输入
//!         └── Backend(BackendEvent)           后台结果
//!
//!     BackendCommand 是反方向的消息：由 Update 层产生、交给 Backend 层执行。
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendCommand, BackendEvent, Operation};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
