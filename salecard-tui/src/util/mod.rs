//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化和恢复，以及按显示宽度截断文本。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化、恢复、panic 时恢复
//!         mod text;           // 显示宽度截断
//!
//!
//!     终端生命周期（src/main.rs）：
//!
//!         let mut terminal = init_terminal()?;        // 原始模式 + 备用屏幕 + panic hook
//!         let result = app::run(&mut terminal, ...).await;
//!         restore_terminal(&mut terminal)?;           // 无论成功失败都执行
//!         result
//!
//!     · Raw Mode：按键立即生效、不回显，Ctrl+C 作为普通按键送达
//!     · Alternate Screen：退出后恢复原有屏幕内容
//!
//!     panic 时 hook 会先恢复终端再打印 panic 信息，否则信息会被备用屏幕吞掉。
//!

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate_display;
