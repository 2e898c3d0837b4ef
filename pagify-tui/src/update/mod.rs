//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（列表、搜索、动作）
//!         mod modal;              // 弹窗子消息处理（登录、确认、资料）
//!         mod backend;            // 后台事件处理（请求结果回到 Model）
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 网络请求
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层是同步的，不直接发请求：
//!
//!         app.dispatch(BackendCommand::LoadProducts(ProductScope::Public));
//!
//!     只是把命令排进 App 的队列。主循环在下一轮取出命令、交给
//!     CoreService::spawn 执行，结果作为 AppMessage::Backend(event)
//!     回到这里，由 backend.rs 写回 Model。
//!
//!     远程动作（删除商品）的列表修改只发生在成功事件到达时。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面数据的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - 进入列表页时重新获取数据（商品走后端，用户 / 订单用演示数据）
//!     - 本地动作的修改只保存在内存里，离开页面再回来即丢弃
//!     - 登出时清空所有管理端列表
//!

mod backend;
mod content;
mod modal;
mod navigation;

use pagify_core::ListView;
use pagify_core::fixtures::{demo_orders, demo_users};
use pagify_core::services::{Action, ActionDispatcher, ActionKind, DashboardLists};
use pagify_core::types::{ProductScope, Role, UserProfile};

use crate::message::{AppMessage, BackendCommand};
use crate::model::{App, FocusPanel, NavItemId, NavigationState, Page, SessionStatus};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
                app.searching = false;
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::ToggleSession => {
            toggle_session(app);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.searching {
                app.searching = false;
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
        }

        AppMessage::Refresh => {
            let page = app.current_page;
            load_page(app, page);
            app.set_status(format!("Refreshing {}...", page.title()));
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 登录 / 登出
fn toggle_session(app: &mut App) {
    if app.session.is_signed_in() {
        app.set_status("Signing out...");
        app.dispatch(BackendCommand::Logout);
    } else {
        app.modal.show_login(app.session.portal);
    }
}

/// 进入页面：切换路由并加载该页数据
pub(crate) fn enter_page(app: &mut App, page: Page) {
    app.current_page = page;
    app.searching = false;
    app.clear_status();
    load_page(app, page);
}

/// 按页面加载数据
fn load_page(app: &mut App, page: Page) {
    match page {
        Page::Home => load_dashboard(app),
        Page::Catalog => app.dispatch(BackendCommand::LoadProducts(ProductScope::Public)),
        Page::Products => {
            if app.session.is_signed_in() {
                app.dispatch(BackendCommand::LoadProducts(ProductScope::All));
            }
        }
        Page::Users => app.lists.users = ListView::new(demo_users()),
        Page::Orders => app.lists.orders = ListView::new(demo_orders()),
        Page::Profile | Page::Settings => {}
    }
}

/// 首页汇总需要的数据（按角色）
fn load_dashboard(app: &mut App) {
    match app.session.role() {
        Some(Role::Admin) => {
            app.lists.users = ListView::new(demo_users());
            app.lists.orders = ListView::new(demo_orders());
            app.dispatch(BackendCommand::LoadProducts(ProductScope::All));
        }
        Some(Role::Seller) => {
            app.lists.orders = ListView::new(demo_orders());
            app.dispatch(BackendCommand::LoadProducts(ProductScope::All));
        }
        Some(Role::Buyer) | None => {
            app.dispatch(BackendCommand::LoadProducts(ProductScope::Public));
        }
    }
}

/// 会话建立（恢复或登录）
pub(crate) fn sign_in(app: &mut App, profile: UserProfile) {
    let role = profile.role;
    log::info!("Signed in as {} ({})", profile.email, role.display_name());

    app.session.status = SessionStatus::SignedIn(profile);
    app.navigation = NavigationState::for_role(Some(role));
    app.focus = FocusPanel::Navigation;
    app.navigation.select_id(NavItemId::Home);
    enter_page(app, Page::Home);
}

/// 会话结束：清空列表，回到访客视图
pub(crate) fn sign_out(app: &mut App) {
    app.session.status = SessionStatus::Anonymous;
    app.lists = DashboardLists::default();
    app.navigation = NavigationState::for_role(None);
    app.focus = FocusPanel::Navigation;
    enter_page(app, Page::Home);
}

/// 请求执行动作：破坏性动作先弹出确认框
pub(crate) fn request_action(app: &mut App, action: Action) {
    if action.requires_confirmation() {
        let prompt = action.prompt(&app.lists);
        app.modal.show_confirm(action, prompt);
    } else {
        perform_action(app, action);
    }
}

/// 执行动作（已确认）
pub(crate) fn perform_action(app: &mut App, action: Action) {
    match action.kind() {
        ActionKind::Local => match ActionDispatcher::apply_local(&mut app.lists, &action) {
            Ok(notice) => app.set_status(notice.message),
            Err(e) => {
                log::warn!("Local action rejected: {e}");
                app.set_status(e.user_message());
            }
        },
        ActionKind::Remote => {
            app.set_status("Working...");
            app.dispatch(BackendCommand::Remote(action));
        }
    }
}
