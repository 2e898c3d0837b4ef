//! 弹窗消息

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换登录入口（左）
    PrevPortal,

    /// 切换登录入口（右）
    NextPortal,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换焦点
    ToggleConfirmFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前字段
    ClearField,

    /// 切换密码可见性
    ToggleSecrets,
}
