//! reqwest 实现的目录 API 客户端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::CatalogApi;
use crate::types::{CardForm, CardId, ImageUpload, ListResponse, SaleCard};

/// 默认服务地址
pub const DEFAULT_BASE_URL: &str = "https://mrbookupdated.onrender.com";

const LIST_PATH: &str = "/api/getSaleCard";
const CREATE_PATH: &str = "/api/salecard";
const UPDATE_PATH: &str = "/sale-cardupdate";
const DELETE_PATH: &str = "/card-delete";

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 服务根地址（不含结尾的 `/`）
    pub base_url: String,
    /// 单个请求超时
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Catalog API client over HTTP.
///
/// Each call issues exactly one request; nothing is cached or retried.
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn card_endpoint(&self, path: &str, id: &CardId) -> String {
        format!(
            "{}{path}/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// 构建 multipart 表单
    ///
    /// 未选择图片时省略 `image` 字段。
    async fn build_multipart(form: &CardForm) -> Result<Form> {
        let mut multipart = Form::new();
        for (name, value) in form.text_fields() {
            multipart = multipart.text(name, value);
        }

        if let Some(ref image) = form.image {
            multipart = multipart.part("image", image_part(image).await?);
        }

        Ok(multipart)
    }
}

/// 读取图片文件并构造 multipart part
async fn image_part(image: &ImageUpload) -> Result<Part> {
    let path_display = image.path().display().to_string();
    let bytes = tokio::fs::read(image.path())
        .await
        .map_err(|e| ClientError::ImageRead {
            path: path_display.clone(),
            detail: e.to_string(),
        })?;

    log::debug!("Attaching image {path_display} ({} bytes)", bytes.len());

    Part::bytes(bytes)
        .file_name(image.file_name())
        .mime_str(image.mime_type())
        .map_err(|e| ClientError::ImageRead {
            path: path_display,
            detail: e.to_string(),
        })
}

/// 校验并规范化服务根地址
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ClientError::InvalidConfig {
        detail: format!("Invalid base URL '{raw}': {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidConfig {
            detail: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    Ok(trimmed.to_string())
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_cards(&self) -> Result<Vec<SaleCard>> {
        let url = self.endpoint(LIST_PATH);
        let body = HttpUtils::execute_checked(self.client.get(&url), "GET", &url).await?;
        let response: ListResponse = HttpUtils::parse_json(&body)?;
        Ok(response.data)
    }

    async fn create_card(&self, form: &CardForm) -> Result<String> {
        let url = self.endpoint(CREATE_PATH);
        let multipart = Self::build_multipart(form).await?;
        HttpUtils::execute_checked(self.client.post(&url).multipart(multipart), "POST", &url)
            .await
    }

    async fn update_card(&self, id: &CardId, form: &CardForm) -> Result<String> {
        let url = self.card_endpoint(UPDATE_PATH, id);
        let multipart = Self::build_multipart(form).await?;
        HttpUtils::execute_checked(self.client.patch(&url).multipart(multipart), "PATCH", &url)
            .await
    }

    async fn delete_card(&self, id: &CardId) -> Result<String> {
        let url = self.card_endpoint(DELETE_PATH, id);
        HttpUtils::execute_checked(self.client.delete(&url), "DELETE", &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn client(base: &str) -> HttpCatalogClient {
        HttpCatalogClient::new(ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn base_url_trailing_slash_removed() {
        let c = client("http://localhost:4000/");
        assert_eq!(c.base_url(), "http://localhost:4000");
        assert_eq!(
            c.endpoint(LIST_PATH),
            "http://localhost:4000/api/getSaleCard"
        );
    }

    #[test]
    fn card_endpoints_encode_id() {
        let c = client("https://api.example.com");
        let id = CardId::new("65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(
            c.card_endpoint(UPDATE_PATH, &id),
            "https://api.example.com/sale-cardupdate/65a1f0c2e4b0a1b2c3d4e5f6"
        );
        assert_eq!(
            c.card_endpoint(DELETE_PATH, &CardId::new("a/b c")),
            "https://api.example.com/card-delete/a%2Fb%20c"
        );
    }

    #[test]
    fn invalid_base_url_rejected() {
        let result = HttpCatalogClient::new(ClientConfig {
            base_url: "not a url".into(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(ClientError::InvalidConfig { .. })));

        let result = HttpCatalogClient::new(ClientConfig {
            base_url: "ftp://example.com".into(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(ClientError::InvalidConfig { .. })));
    }

    #[tokio::test]
    async fn missing_image_file_is_reported() {
        let form = CardForm {
            title: "Dune".into(),
            category: Category::English.to_string(),
            image: Some(ImageUpload::new("/definitely/not/here.png")),
            ..CardForm::default()
        };
        let result = HttpCatalogClient::build_multipart(&form).await;
        assert!(
            matches!(&result, Err(ClientError::ImageRead { path, .. }) if path.ends_with("here.png")),
            "unexpected result: {:?}",
            result.err()
        );
    }

    #[tokio::test]
    async fn existing_image_file_is_attached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let form = CardForm {
            image: Some(ImageUpload::new(&path)),
            ..CardForm::default()
        };
        assert!(HttpCatalogClient::build_multipart(&form).await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // 端口 9 (discard) 在本地通常不监听
        let c = client("http://127.0.0.1:9");
        let result = c.list_cards().await;
        assert!(
            matches!(&result, Err(e) if e.is_transport()),
            "unexpected result: {result:?}"
        );
    }
}
