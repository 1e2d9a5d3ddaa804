//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧边栏
    Sidebar,
    /// 卡片表单
    #[default]
    Form,
    /// 卡片表格
    Table,
}

impl FocusPanel {
    const ORDER: [FocusPanel; 3] = [FocusPanel::Sidebar, FocusPanel::Form, FocusPanel::Table];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// 切换到下一个面板
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// 切换到上一个面板
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_sidebar(self) -> bool {
        matches!(self, FocusPanel::Sidebar)
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let start = FocusPanel::default();
        assert!(start.is_form());
        assert!(start.next().is_table());
        assert!(start.next().next().is_sidebar());
        assert_eq!(start.next().next().next(), start);
        assert!(start.prev().is_sidebar());
    }
}
