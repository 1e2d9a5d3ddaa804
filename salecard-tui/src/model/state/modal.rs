//! 弹窗/对话框状态

use salecard_client::CardId;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// 确认删除卡片
    ConfirmDelete {
        card_id: CardId,
        card_title: String,
        /// 当前焦点：0=取消, 1=删除
        focus: usize,
    },
    /// 帮助
    Help,
    /// 提示（阻塞式，按键关闭）
    Alert { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗（默认焦点在"取消"）
    pub fn show_confirm_delete(&mut self, card_id: CardId, card_title: &str) {
        self.active = Some(Modal::ConfirmDelete {
            card_id,
            card_title: card_title.to_string(),
            focus: 0,
        });
    }

    /// 显示提示弹窗
    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
