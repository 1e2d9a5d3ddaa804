//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!         pub use keymap::DefaultKeymap;     // 供状态栏和帮助弹窗显示按键
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键（Alt 组合键、Tab / Shift+Tab），就地处理
//!                 - 焦点位于侧边栏，调用 handle_sidebar_keys
//!                 - 焦点位于表单，调用 handle_form_keys（普通字符均视为输入）
//!                 - 焦点位于表格，调用 handle_table_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局:
//!         Alt+q / Ctrl+c   退出
//!         Alt+h / ?        帮助（表单中 ? 为普通字符）
//!         Alt+r            刷新列表
//!         Alt+b            展开/收起侧边栏
//!         Tab / Shift+Tab  切换面板
//!
//!     表单:
//!         ↑↓               切换字段
//!         ←→               切换分类
//!         Enter / Alt+s    提交
//!         Esc              放弃编辑
//!
//!     表格:
//!         ↑↓ / j k         移动
//!         Enter / e        编辑
//!         d / Delete       删除（确认）
//!         n / Alt+a        新建
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
