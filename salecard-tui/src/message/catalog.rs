//! 目录页面消息（表单 + 表格）

/// 表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 上一个选项（分类）
    PrevOption,
    /// 下一个选项（分类）
    NextOption,
    /// 提交草稿
    Submit,
    /// 放弃编辑，回到新建模式
    CancelEdit,
}

/// 表格消息
#[derive(Debug, Clone)]
pub enum TableMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 编辑选中卡片
    Edit,
    /// 删除选中卡片（先确认）
    Delete,
    /// 新建卡片（清空草稿并聚焦表单）
    New,
}
