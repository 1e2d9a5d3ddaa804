//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读 Model，不修改任何状态。每一帧都从 App 完整重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 侧边栏 | 目录页面 + 状态栏
//!         pub mod theme;          // 主题颜色与常用样式
//!         mod components;         // 侧边栏、状态栏、弹窗
//!         mod pages;              // 目录页面（表单 + 表格）
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────┬───────────────────────────────────┤
//!         │ 侧边栏    │ 卡片表单                           │
//!         │ (可收起)  ├───────────────────────────────────┤
//!         │          │ 卡片表格                           │
//!         ├──────────┴───────────────────────────────────┤
//!         │ 状态栏                                        │
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
