//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use salecard_client::{
    CardForm, CardId, CatalogApi, Category, ClientConfig, HttpCatalogClient, SaleCard,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试卡片标题
pub fn generate_test_title() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("_test-{nanos:x}")
}

/// 测试用表单
pub fn test_form(title: &str) -> CardForm {
    CardForm {
        title: title.to_string(),
        description: "integration-test".to_string(),
        category: Category::English.to_string(),
        price: 10.0,
        sale_price: 8.0,
        image: None,
    }
}

/// 测试上下文 - 封装指向测试服务的客户端
pub struct TestContext {
    pub client: HttpCatalogClient,
}

impl TestContext {
    /// 从 `SALECARD_TEST_API_URL` 创建测试上下文
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("SALECARD_TEST_API_URL").ok()?;
        let client = HttpCatalogClient::new(ClientConfig {
            base_url,
            timeout: Duration::from_secs(60),
        })
        .ok()?;
        Some(Self { client })
    }

    /// 按标题查找卡片
    pub async fn find_by_title(&self, title: &str) -> Option<SaleCard> {
        self.client
            .list_cards()
            .await
            .ok()?
            .into_iter()
            .find(|c| c.title == title)
    }

    /// 清理测试卡片
    pub async fn cleanup_card(&self, id: &CardId) {
        let _ = self.client.delete_card(id).await;
    }

    /// 查找并清理所有测试卡片（标题以 _test- 开头）
    pub async fn cleanup_all_test_cards(&self) {
        if let Ok(cards) = self.client.list_cards().await {
            for card in cards {
                if card.title.starts_with("_test-") {
                    let _ = self.client.delete_card(&card.id).await;
                }
            }
        }
    }
}
