//! 后台请求结果消息
//!
//! 由 Backend 层在请求完成后经 channel 发回主循环。

use salecard_client::{CardId, ClientError, SaleCard};

use crate::model::DraftMode;

#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表加载成功
    CardsLoaded(Vec<SaleCard>),
    /// 列表加载失败（只记日志）
    LoadFailed(ClientError),
    /// 创建/更新成功
    Saved { mode: DraftMode },
    /// 创建/更新失败
    SaveFailed(ClientError),
    /// 删除成功
    Deleted { id: CardId },
    /// 删除失败
    DeleteFailed { id: CardId, error: ClientError },
}
