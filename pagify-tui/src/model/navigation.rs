//! 导航状态定义
//!
//! 导航项随登录角色变化：
//!
//! | 角色   | 导航项                                             |
//! |--------|----------------------------------------------------|
//! | 访客   | Home, Catalog, Settings                            |
//! | 买家   | Home, Catalog, Profile, Settings                   |
//! | 卖家   | Home, Products, Orders, Profile, Settings          |
//! | 管理员 | Home, Users, Products, Orders, Profile, Settings   |

use pagify_core::types::Role;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Catalog,
    Products,
    Users,
    Orders,
    Profile,
    Settings,
}

impl NavItemId {
    fn item(self) -> NavItem {
        let (label, icon) = match self {
            NavItemId::Home => ("Home", "⌂"),
            NavItemId::Catalog => ("Catalog", "▤"),
            NavItemId::Products => ("Products", "▦"),
            NavItemId::Users => ("Users", "@"),
            NavItemId::Orders => ("Orders", "#"),
            NavItemId::Profile => ("Profile", "☺"),
            NavItemId::Settings => ("Settings", "≡"),
        };
        NavItem {
            id: self,
            label,
            icon,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 访客导航
    pub fn new() -> Self {
        Self::for_role(None)
    }

    /// 按角色生成导航项
    pub fn for_role(role: Option<Role>) -> Self {
        use NavItemId::{Catalog, Home, Orders, Products, Profile, Settings, Users};

        let ids: &[NavItemId] = match role {
            None => &[Home, Catalog, Settings],
            Some(Role::Buyer) => &[Home, Catalog, Profile, Settings],
            Some(Role::Seller) => &[Home, Products, Orders, Profile, Settings],
            Some(Role::Admin) => &[Home, Users, Products, Orders, Profile, Settings],
        };

        Self {
            items: ids.iter().map(|id| id.item()).collect(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }

    pub fn contains(&self, id: NavItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// 选中指定导航项（不存在时不变）
    pub fn select_id(&mut self, id: NavItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nav: &NavigationState) -> Vec<NavItemId> {
        nav.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn guest_sees_public_pages_only() {
        let nav = NavigationState::new();
        assert_eq!(
            ids(&nav),
            vec![NavItemId::Home, NavItemId::Catalog, NavItemId::Settings]
        );
    }

    #[test]
    fn admin_sees_management_pages() {
        let nav = NavigationState::for_role(Some(Role::Admin));
        assert!(nav.contains(NavItemId::Users));
        assert!(nav.contains(NavItemId::Orders));
        assert!(!nav.contains(NavItemId::Catalog));
    }

    #[test]
    fn seller_has_no_user_management() {
        let nav = NavigationState::for_role(Some(Role::Seller));
        assert!(nav.contains(NavItemId::Products));
        assert!(!nav.contains(NavItemId::Users));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::for_role(Some(Role::Buyer));
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Settings));
        nav.select_id(NavItemId::Catalog);
        assert_eq!(nav.selected, 1);
    }
}
