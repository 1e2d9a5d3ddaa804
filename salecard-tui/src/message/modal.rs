//! 弹窗相关消息

/// 弹窗消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 确认（按当前焦点按钮执行）
    Confirm,
    /// 切换按钮焦点
    ToggleFocus,
}
