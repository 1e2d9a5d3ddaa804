//! 侧边栏状态定义

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Cards,
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 侧边栏状态
pub struct NavigationState {
    /// 是否展开（收起时只显示图标）
    pub expanded: bool,
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认状态：展开，只有 Cards 一项
    pub fn new() -> Self {
        Self {
            expanded: true,
            items: vec![NavItem {
                id: NavItemId::Cards,
                icon: "▦",
            }],
            selected: 0,
        }
    }

    /// 展开/收起
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
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

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
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

    #[test]
    fn test_toggle_flips_expanded() {
        let mut nav = NavigationState::new();
        assert!(nav.expanded);
        nav.toggle();
        assert!(!nav.expanded);
        nav.toggle();
        assert!(nav.expanded);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut nav = NavigationState::new();
        nav.select_next();
        nav.select_previous();
        nav.select_previous();
        assert_eq!(nav.current_id(), Some(NavItemId::Cards));
    }
}
