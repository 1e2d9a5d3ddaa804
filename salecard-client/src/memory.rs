//! 内存实现的目录 API
//!
//! 行为与远端服务保持一致：服务端分配 id，更新时保留 favorite / sold，
//! 未找到的 id 返回带 `{ error, message }` 的 404。可按操作注入故障。

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ClientError, Result};
use crate::traits::CatalogApi;
use crate::types::{CardForm, CardId, SaleCard};

/// 可注入故障的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

pub struct MemoryCatalog {
    cards: RwLock<Vec<SaleCard>>,
    failures: RwLock<HashMap<Operation, ClientError>>,
    next_id: AtomicU64,
    calls: RwLock<Vec<Operation>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            cards: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// 预置记录（保留其 id、favorite、sold）
    pub async fn seed(&self, cards: Vec<SaleCard>) {
        *self.cards.write().await = cards;
    }

    /// 当前存储的记录快照
    pub async fn snapshot(&self) -> Vec<SaleCard> {
        self.cards.read().await.clone()
    }

    /// 设置或清除某个操作的故障
    pub async fn set_failure(&self, op: Operation, error: Option<ClientError>) {
        let mut failures = self.failures.write().await;
        match error {
            Some(e) => {
                failures.insert(op, e);
            }
            None => {
                failures.remove(&op);
            }
        }
    }

    /// 已调用的操作序列
    pub async fn calls(&self) -> Vec<Operation> {
        self.calls.read().await.clone()
    }

    async fn enter(&self, op: Operation) -> Result<()> {
        self.calls.write().await.push(op);
        match self.failures.read().await.get(&op) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    /// 生成 24 位十六进制 id（与服务端 id 的外观一致）
    fn allocate_id(&self) -> CardId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        CardId::new(format!("{n:024x}"))
    }

    fn not_found(id: &CardId) -> ClientError {
        let message = format!("Card {id} not found");
        ClientError::Api {
            status: 404,
            body: serde_json::json!({ "error": true, "message": message }).to_string(),
            message: Some(message),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn image_url(form: &CardForm) -> Option<String> {
    form.image
        .as_ref()
        .map(|img| format!("memory://images/{}", img.file_name()))
}

#[async_trait]
impl CatalogApi for MemoryCatalog {
    async fn list_cards(&self) -> Result<Vec<SaleCard>> {
        self.enter(Operation::List).await?;
        Ok(self.snapshot().await)
    }

    async fn create_card(&self, form: &CardForm) -> Result<String> {
        self.enter(Operation::Create).await?;

        let card = SaleCard {
            id: self.allocate_id(),
            title: form.title.clone(),
            description: form.description.clone(),
            category: form.category.clone(),
            price: form.price,
            sale_price: form.sale_price,
            url: image_url(form),
            favorite: false,
            sold: 0,
        };
        let body = serde_json::json!({ "message": "created", "data": &card }).to_string();
        self.cards.write().await.push(card);
        Ok(body)
    }

    async fn update_card(&self, id: &CardId, form: &CardForm) -> Result<String> {
        self.enter(Operation::Update).await?;

        let mut cards = self.cards.write().await;
        let Some(card) = cards.iter_mut().find(|c| &c.id == id) else {
            return Err(Self::not_found(id));
        };

        card.title.clone_from(&form.title);
        card.description.clone_from(&form.description);
        card.category.clone_from(&form.category);
        card.price = form.price;
        card.sale_price = form.sale_price;
        if let Some(url) = image_url(form) {
            card.url = Some(url);
        }

        Ok(serde_json::json!({ "message": "updated", "data": &*card }).to_string())
    }

    async fn delete_card(&self, id: &CardId) -> Result<String> {
        self.enter(Operation::Delete).await?;

        let mut cards = self.cards.write().await;
        let before = cards.len();
        cards.retain(|c| &c.id != id);
        if cards.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(serde_json::json!({ "message": "deleted" }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ImageUpload};

    fn dune() -> CardForm {
        CardForm {
            title: "Dune".into(),
            description: "Sci-fi".into(),
            category: Category::English.to_string(),
            price: 10.0,
            sale_price: 8.0,
            image: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let api = MemoryCatalog::new();
        api.create_card(&dune()).await.unwrap();
        api.create_card(&dune()).await.unwrap();

        let cards = api.list_cards().await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_ne!(cards[0].id, cards[1].id);
        assert_eq!(cards[0].id.as_str().len(), 24);
    }

    #[tokio::test]
    async fn update_keeps_flags_and_image() {
        let api = MemoryCatalog::new();
        api.seed(vec![SaleCard {
            id: CardId::new("c1"),
            title: "Old".into(),
            description: String::new(),
            category: "Urdu books".into(),
            price: 1.0,
            sale_price: 1.0,
            url: Some("https://cdn/old.png".into()),
            favorite: true,
            sold: 7,
        }])
        .await;

        api.update_card(&CardId::new("c1"), &dune()).await.unwrap();

        let card = &api.snapshot().await[0];
        assert_eq!(card.title, "Dune");
        assert_eq!(card.category(), Category::English);
        assert!(card.favorite);
        assert_eq!(card.sold, 7);
        assert_eq!(card.url.as_deref(), Some("https://cdn/old.png"));
    }

    #[tokio::test]
    async fn update_with_image_replaces_url() {
        let api = MemoryCatalog::new();
        api.create_card(&dune()).await.unwrap();
        let id = api.snapshot().await[0].id.clone();

        let mut form = dune();
        form.image = Some(ImageUpload::new("/tmp/new-cover.png"));
        api.update_card(&id, &form).await.unwrap();

        assert_eq!(
            api.snapshot().await[0].url.as_deref(),
            Some("memory://images/new-cover.png")
        );
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_server_message() {
        let api = MemoryCatalog::new();
        let err = api.delete_card(&CardId::new("nope")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Card nope not found"));
    }

    #[tokio::test]
    async fn injected_failure_is_returned_and_recorded() {
        let api = MemoryCatalog::new();
        api.set_failure(
            Operation::List,
            Some(ClientError::NetworkError {
                detail: "offline".into(),
            }),
        )
        .await;

        assert!(api.list_cards().await.is_err());
        api.set_failure(Operation::List, None).await;
        assert!(api.list_cards().await.is_ok());
        assert_eq!(api.calls().await, vec![Operation::List, Operation::List]);
    }
}
