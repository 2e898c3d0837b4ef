//! 应用主状态结构

use pagify_core::ListView;
use pagify_core::services::DashboardLists;
use pagify_core::types::Product;

use super::{FocusPanel, ModalState, NavigationState, Page, SessionState, SettingsState};
use crate::backend::AppConfig;
use crate::message::BackendCommand;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 会话快照
    pub session: SessionState,

    // === 各页面状态 ===
    /// 管理端列表（用户 / 商品 / 订单）
    pub lists: DashboardLists,
    /// 买家可见的公开目录
    pub catalog: ListView<Product>,
    /// 列表页是否处于搜索输入模式
    pub searching: bool,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置（保存设置时整体写回）
    pub config: AppConfig,

    /// 进行中的后台请求数
    pub in_flight: usize,

    /// 待主循环派发的后台命令
    commands: Vec<BackendCommand>,
}

impl App {
    /// 创建新的应用实例，并排队一次会话恢复
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            session: SessionState::new(config.portal),
            lists: DashboardLists::default(),
            catalog: ListView::default(),
            searching: false,
            settings: SettingsState::new(config.theme, config.portal),
            modal: ModalState::new(),
            config,
            in_flight: 0,
            commands: Vec::new(),
        };

        app.dispatch(BackendCommand::Bootstrap(app.session.portal));
        app
    }

    /// 排队一条后台命令
    pub fn dispatch(&mut self, command: BackendCommand) {
        log::debug!("Queued {}", command.operation().label());
        self.in_flight += 1;
        self.commands.push(command);
    }

    /// 取出所有待派发命令
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    /// 一条后台请求结束
    pub fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
