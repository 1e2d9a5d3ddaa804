use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CardForm, CardId, SaleCard};

/// 商品卡片目录 API Trait
///
/// 写操作返回服务端原始响应体，仅用于日志记录，不做解析。
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// 获取全部卡片
    async fn list_cards(&self) -> Result<Vec<SaleCard>>;

    /// 创建卡片
    async fn create_card(&self, form: &CardForm) -> Result<String>;

    /// 更新卡片（部分更新端点，但总是发送全部可编辑字段）
    async fn update_card(&self, id: &CardId, form: &CardForm) -> Result<String>;

    /// 删除卡片
    async fn delete_card(&self, id: &CardId) -> Result<String>;
}
