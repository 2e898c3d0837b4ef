//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（查看详情）
    Confirm,

    // ========== 搜索与筛选 ==========
    /// 进入搜索输入
    StartSearch,
    /// 输入搜索字符
    SearchInput(char),
    /// 删除搜索字符
    SearchBackspace,
    /// 结束搜索输入（保留查询）
    EndSearch,
    /// 切换状态筛选（All → 各状态 → All）
    CycleCategory,
    /// 清空查询和筛选
    ClearFilter,

    // ========== 列表动作 ==========
    /// 删除当前商品
    Delete,
    /// 升级用户套餐
    Upgrade,
    /// 停用 / 恢复用户
    ToggleSuspend,
    /// 上架商品
    Publish,
    /// 下架归档商品
    Archive,
    /// 屏蔽商品
    Block,
    /// 订单推进到下一状态
    Advance,
    /// 取消订单
    Cancel,

    // ========== 个人资料 ==========
    /// 编辑资料
    Edit,
    /// 上传头像
    Upload,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
