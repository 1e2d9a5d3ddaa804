//! 目录页面状态
//!
//! 同一屏幕上有两部分：上方的卡片表单（草稿）和下方的卡片表格。

use salecard_client::{CardForm, CardId, SaleCard};

use super::draft::{Draft, DraftField, DraftMode};

/// 一次提交：请求表单 + 提交时的模式
#[derive(Debug, Clone)]
pub struct Submission {
    pub form: CardForm,
    pub mode: DraftMode,
}

/// 目录页面状态
#[derive(Debug, Default)]
pub struct CatalogState {
    /// 最近一次成功加载的卡片列表（服务端顺序）
    pub cards: Vec<SaleCard>,
    /// 表格中选中的索引
    pub selected: usize,
    /// 当前草稿
    pub draft: Draft,
    /// 草稿模式
    pub mode: DraftMode,
    /// 表单中聚焦的字段
    pub form_field: DraftField,
    /// 列表是否正在加载
    pub loading: bool,
    /// 是否有提交在进行中
    pub submitting: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.cards.is_empty() && self.selected < self.cards.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.cards.is_empty() {
            self.selected = self.cards.len() - 1;
        }
    }

    /// 获取当前选中的卡片
    pub fn selected_card(&self) -> Option<&SaleCard> {
        self.cards.get(self.selected)
    }

    /// 整体替换卡片列表
    ///
    /// 选中项尽量保持在原来的 id 上，找不到时收拢到列表范围内。
    pub fn replace_cards(&mut self, cards: Vec<SaleCard>) {
        let previous = self.selected_card().map(|c| c.id.clone());
        self.cards = cards;
        self.loading = false;

        self.selected = previous
            .and_then(|id| self.cards.iter().position(|c| c.id == id))
            .unwrap_or_else(|| self.selected.min(self.cards.len().saturating_sub(1)));
    }

    /// 进入编辑模式：用对应记录填充草稿
    ///
    /// id 不在列表中时不做任何修改，返回 false。
    pub fn enter_edit(&mut self, id: &CardId) -> bool {
        let Some(card) = self.cards.iter().find(|c| &c.id == id) else {
            log::warn!("Edit requested for unknown card {id}");
            return false;
        };
        self.draft = Draft::from_card(card);
        self.mode = DraftMode::Editing(id.clone());
        self.form_field = DraftField::Title;
        true
    }

    /// 清空草稿并回到新建模式
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
        self.mode = DraftMode::Creating;
        self.form_field = DraftField::Title;
    }

    /// 开始一次提交，返回要发送的请求
    pub fn begin_submit(&mut self) -> Submission {
        self.submitting = true;
        Submission {
            form: self.draft.to_form(),
            mode: self.mode.clone(),
        }
    }

    /// 标记列表开始刷新
    pub fn begin_load(&mut self) {
        self.loading = true;
    }
}
