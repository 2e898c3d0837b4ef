//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（仪表盘）
    #[default]
    Home,
    /// 公开商品目录（买家 / 访客）
    Catalog,
    /// 商品管理（管理员 / 卖家）
    Products,
    /// 用户管理（管理员）
    Users,
    /// 订单管理（管理员 / 卖家）
    Orders,
    /// 个人资料
    Profile,
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Catalog => "Catalog",
            Page::Products => "Products",
            Page::Users => "Users",
            Page::Orders => "Orders",
            Page::Profile => "Profile",
            Page::Settings => "Settings",
        }
    }

    /// 是否是带搜索 / 筛选的列表页
    pub fn is_list_page(self) -> bool {
        matches!(
            self,
            Page::Catalog | Page::Products | Page::Users | Page::Orders
        )
    }
}
