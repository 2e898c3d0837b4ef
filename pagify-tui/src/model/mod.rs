//! 一次按键或一次后台结果的流向：
//!
//!     crossterm 事件 ──▶ event::handle_event ──▶ AppMessage ──┐
//!                                                             ▼
//!     BackendEvent ──────────────────────────────▶ update::update(&mut App)
//!          ▲                                                  │
//!          │                                  写 Model / app.dispatch(cmd)
//!          │                                                  │
//!     CoreService::spawn ◀── app.take_commands() ◀────────────┘
//!     (tokio 任务, mpsc)
//!
//!     view::render(&App) 每一轮只读 Model。
//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的访问方法，状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态（随角色变化）
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 会话、弹窗、设置状态
//!
//!     列表数据本身（ListView<T>）来自 pagify-core，这里只持有它们。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub focus: FocusPanel,
//!             pub navigation: NavigationState,
//!             pub current_page: Page,
//!             pub status_message: Option<String>,
//!             pub session: SessionState,          // 会话快照
//!             pub lists: DashboardLists,          // 用户 / 商品 / 订单列表
//!             pub catalog: ListView<Product>,     // 公开目录
//!             pub settings: SettingsState,
//!             pub modal: ModalState,
//!             ...
//!         }
//!
//!     Update 层不直接做网络请求，而是调用 app.dispatch(BackendCommand::...)
//!     排队；主循环每一轮用 take_commands() 取出并交给 Backend 层。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、导航状态（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     导航项由 NavigationState::for_role(role) 生成：
//!         未登录 → Home / Catalog / Settings
//!         登录后根据 Role 增加 Users、Products、Orders、Profile
//!
//!     会话变化（登录、登出、恢复）时 Update 层重建导航。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!             - Login { portal, form, focus, ... }
//!             - ConfirmAction { action, prompt, confirm_focused }
//!             - EditProfile { form, focus, ... }
//!             - UploadPicture { path, ... }
//!             - Help, Error { title, message }, Notice { title, lines }
//!
//!     表单数据用 pagify-core 的 FormState，校验结果也保存在其中。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{Modal, ModalState, SessionState, SessionStatus, SettingItem, SettingsState};
