//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() { ... }       // 取出后台请求结果
//!     if let Some(event) = poll_event() { ... }       // 轮询输入，最多等待 100ms
//! }
//!
//! update() 返回的 Command 交给 CatalogService 在 tokio 上执行，
//! 主循环本身从不等待网络。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::backend::{CatalogService, Command};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 处理一条消息，有命令时派发到后台
fn dispatch(
    app: &mut App,
    msg: AppMessage,
    service: &Arc<CatalogService>,
    tx: &UnboundedSender<AppMessage>,
) {
    if let Some(command) = update::update(app, msg) {
        log::debug!("Dispatching {}", command_name(&command));
        service.spawn(command, tx);
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::LoadCards => "load",
        Command::Submit(_) => "submit",
        Command::Delete { .. } => "delete",
    }
}

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App, service: Arc<CatalogService>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // 启动时加载一次列表
    dispatch(app, AppMessage::Refresh, &service, &tx);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的后台请求
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, msg, &service, &tx);
        }

        // 4. 轮询事件（100ms 超时），交给 update
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, msg, &service, &tx);
        }
    }

    Ok(())
}
