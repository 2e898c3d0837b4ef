//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                super::enter_page(app, page_from_nav_id(id));
                // 非首页直接把焦点交给内容区
                if id != NavItemId::Home {
                    app.focus = FocusPanel::Content;
                }
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Catalog => Page::Catalog,
        NavItemId::Products => Page::Products,
        NavItemId::Users => Page::Users,
        NavItemId::Orders => Page::Orders,
        NavItemId::Profile => Page::Profile,
        NavItemId::Settings => Page::Settings,
    }
}
