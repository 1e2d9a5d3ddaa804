//! 目录服务
//!
//! Update 层返回 [`Command`]，主循环通过 [`CatalogService::spawn`] 在 tokio 上执行，
//! 结果以 [`BackendMessage`] 的形式经 channel 送回主循环。
//!
//! 变更类命令（提交/删除）先等待请求完成，成功后再发起一次列表重载。

use std::sync::Arc;

use salecard_client::{CardId, CatalogApi, ClientError, truncate_for_log};
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};
use crate::model::{DraftMode, Submission};

/// 需要访问网络的命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 加载卡片列表
    LoadCards,
    /// 提交草稿（创建或更新由 mode 决定）
    Submit(Submission),
    /// 删除卡片
    Delete { id: CardId },
}

/// 目录服务
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// 在后台执行命令，结果发送到主循环
    pub fn spawn(self: &Arc<Self>, command: Command, tx: &UnboundedSender<AppMessage>) {
        let service = Arc::clone(self);
        let tx = tx.clone();
        tokio::spawn(async move {
            service
                .run(command, |msg| {
                    // 接收端已关闭说明主循环已退出
                    if tx.send(AppMessage::Backend(msg)).is_err() {
                        log::debug!("Dropping backend message: UI loop has exited");
                    }
                })
                .await;
        });
    }

    /// 执行命令，按顺序产出结果消息
    pub async fn run<F>(&self, command: Command, mut emit: F)
    where
        F: FnMut(BackendMessage) + Send,
    {
        match command {
            Command::LoadCards => emit(self.load_cards().await),
            Command::Submit(submission) => {
                let msg = self.submit(submission).await;
                let reload = matches!(msg, BackendMessage::Saved { .. });
                emit(msg);
                if reload {
                    emit(self.load_cards().await);
                }
            }
            Command::Delete { id } => {
                let msg = self.delete(id).await;
                let reload = matches!(msg, BackendMessage::Deleted { .. });
                emit(msg);
                if reload {
                    emit(self.load_cards().await);
                }
            }
        }
    }

    /// 加载卡片列表；失败只记录日志
    pub async fn load_cards(&self) -> BackendMessage {
        match self.api.list_cards().await {
            Ok(cards) => {
                log::debug!("Loaded {} cards", cards.len());
                BackendMessage::CardsLoaded(cards)
            }
            Err(e) => {
                log_failure("load cards", &e);
                BackendMessage::LoadFailed(e)
            }
        }
    }

    /// 提交草稿
    pub async fn submit(&self, submission: Submission) -> BackendMessage {
        let Submission { form, mode } = submission;

        let result = match &mode {
            DraftMode::Creating => self.api.create_card(&form).await,
            DraftMode::Editing(id) => self.api.update_card(id, &form).await,
        };

        match result {
            Ok(body) => {
                match &mode {
                    DraftMode::Creating => log::info!("Card created: {}", truncate_for_log(&body)),
                    DraftMode::Editing(id) => {
                        log::info!("Card {id} updated: {}", truncate_for_log(&body));
                    }
                }
                BackendMessage::Saved { mode }
            }
            Err(e) => {
                log_failure("save card", &e);
                BackendMessage::SaveFailed(e)
            }
        }
    }

    /// 删除卡片
    pub async fn delete(&self, id: CardId) -> BackendMessage {
        match self.api.delete_card(&id).await {
            Ok(body) => {
                log::info!("Card {id} deleted: {}", truncate_for_log(&body));
                BackendMessage::Deleted { id }
            }
            Err(error) => {
                log_failure(&format!("delete card {id}"), &error);
                BackendMessage::DeleteFailed { id, error }
            }
        }
    }
}

/// 记录失败：收到响应时带上状态码和响应体
fn log_failure(action: &str, error: &ClientError) {
    match error {
        ClientError::Api { status, body, .. } => {
            log::error!(
                "Failed to {action}: status {status}, body: {}",
                truncate_for_log(body)
            );
        }
        e if e.is_expected() => log::warn!("Failed to {action}: {e}"),
        e => log::error!("Failed to {action}: {e}"),
    }
}
