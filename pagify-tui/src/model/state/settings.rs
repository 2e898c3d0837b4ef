//! 设置页面状态

use pagify_core::types::Portal;

use crate::view::theme::Theme;

/// 设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Portal,
}

impl SettingItem {
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Portal]
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::Portal => "Default portal",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    /// 启动时恢复会话所用的入口
    pub portal: Portal,
}

impl SettingsState {
    pub fn new(theme: Theme, portal: Portal) -> Self {
        Self {
            selected_index: 0,
            theme,
            portal,
        }
    }

    fn item_count() -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(Self::item_count() - 1);
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % Self::item_count();
    }

    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 当前项的显示值
    pub fn value_label(&self, item: SettingItem) -> &'static str {
        match item {
            SettingItem::Theme => self.theme.label(),
            SettingItem::Portal => self.portal.display_name(),
        }
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Portal) => self.portal = other_portal(self.portal),
            None => {}
        }
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.prev(),
            Some(SettingItem::Portal) => self.portal = other_portal(self.portal),
            None => {}
        }
    }
}

fn other_portal(portal: Portal) -> Portal {
    match portal {
        Portal::Buyer => Portal::Seller,
        Portal::Seller => Portal::Buyer,
    }
}
