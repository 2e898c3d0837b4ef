//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: 访客菜单 [Home, Catalog, Settings],
//!     current_page = Page::Home,
//!     session: Restoring,                             // 等待 Bootstrap 结果
//!     commands: [Bootstrap(portal)],                  // 待执行的后台命令
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     for cmd in app.take_commands() {                // 把 update 产生的命令交给后台
//!         core.spawn(cmd, tx)
//!     }
//!     while let Ok(ev) = rx.try_recv() {              // 收取已完成的后台结果
//!         update::update(&mut app, Backend(ev))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::backend::CoreService;
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, core: &Arc<CoreService>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<BackendEvent>();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 派发待执行的后台命令
        for command in app.take_commands() {
            log::debug!("Dispatching {}", command.operation().label());
            core.spawn(command, tx.clone());
        }

        // 4. 处理已完成的后台结果
        while let Ok(event) = rx.try_recv() {
            update::update(app, AppMessage::Backend(event));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
