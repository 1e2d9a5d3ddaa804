//! Catalog data model and wire shapes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============ 标识符 ============

/// Server-assigned card identifier (`_id` on the wire).
///
/// Opaque to the client; only ever produced by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============ 分类 ============

/// Closed set of catalog categories.
///
/// The order of [`Category::ALL`] is the order shown in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "English books")]
    English,
    #[serde(rename = "Urdu books")]
    Urdu,
    #[serde(rename = "Noval books")]
    Noval,
    #[serde(rename = "Seasonal books")]
    Seasonal,
    #[default]
    #[serde(rename = "All books")]
    All,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 5] = [
        Category::English,
        Category::Urdu,
        Category::Noval,
        Category::Seasonal,
        Category::All,
    ];

    /// Wire / display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "English books",
            Self::Urdu => "Urdu books",
            Self::Noval => "Noval books",
            Self::Seasonal => "Seasonal books",
            Self::All => "All books",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// 下一个分类（循环）
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 上一个分类（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============ 记录（读取形态） ============

/// A catalog record as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCard {
    #[serde(rename = "_id")]
    pub id: CardId,
    #[serde(default, deserialize_with = "de_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "de_or_default")]
    pub description: String,
    /// Raw category string as stored by the service; may lie outside [`Category`].
    #[serde(default, deserialize_with = "de_or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(rename = "salePrice", default, deserialize_with = "de_amount")]
    pub sale_price: f64,
    /// Display URL of the stored image.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de_or_default")]
    pub favorite: bool,
    #[serde(default, deserialize_with = "de_count")]
    pub sold: u64,
}

impl SaleCard {
    /// Category mapped onto the closed set; unknown values fall back to the default.
    pub fn category(&self) -> Category {
        self.known_category().unwrap_or_default()
    }

    /// Category when the stored value is one of the known names.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Response envelope of `GET /api/getSaleCard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<SaleCard>,
}

/// Error envelope the service uses on failed mutations: `{ error, message }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `error` is present and truthy.
    pub fn has_error(&self) -> bool {
        match &self.error {
            None | Some(Value::Null | Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }

    /// Server message, only when the body flags an error.
    pub fn flagged_message(&self) -> Option<String> {
        if self.has_error() {
            self.message.clone().filter(|m| !m.is_empty())
        } else {
            None
        }
    }
}

// ============ 表单（写入形态） ============

/// Local image selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub path: PathBuf,
}

impl ImageUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent as the multipart filename.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// MIME type guessed from the extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

/// Multipart payload for create and update.
///
/// `category` is sent verbatim so that a stored value outside [`Category`]
/// survives an edit that does not touch it. `favorite` and `sold` are not part
/// of the write shape and are never sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub sale_price: f64,
    pub image: Option<ImageUpload>,
}

impl CardForm {
    /// Text parts in wire order: title, description, category, price, salePrice.
    pub fn text_fields(&self) -> [(&'static str, String); 5] {
        [
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("category", self.category.clone()),
            ("price", format_amount(self.price)),
            ("salePrice", format_amount(self.sale_price)),
        ]
    }
}

/// Formats an amount the way a numeric input reports it (`10`, `8.5`).
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

// ============ 反序列化辅助 ============

/// Treats an explicit `null` like a missing key.
fn de_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON number, a numeric string or null.
fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("invalid amount: {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid amount '{s}': {e}"))),
        other => Err(D::Error::custom(format!("invalid amount: {other}"))),
    }
}

/// Accepts a non-negative integer, an integer string or null.
fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid count: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| D::Error::custom(format!("invalid count '{s}': {e}"))),
        other => Err(D::Error::custom(format!("invalid count: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Category ----

    #[test]
    fn category_default_is_all_books() {
        assert_eq!(Category::default(), Category::All);
        assert_eq!(Category::default().as_str(), "All books");
    }

    #[test]
    fn category_parses_every_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
        assert!("Poetry books".parse::<Category>().is_err());
    }

    #[test]
    fn category_cycles_both_ways() {
        assert_eq!(Category::English.prev(), Category::All);
        assert_eq!(Category::All.next(), Category::English);
        assert_eq!(Category::Urdu.next().prev(), Category::Urdu);
    }

    #[test]
    fn category_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::Seasonal).unwrap();
        assert_eq!(json, r#""Seasonal books""#);
    }

    // ---- SaleCard ----

    #[test]
    fn sale_card_decodes_service_shape() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "title": "Dune",
            "description": "Sci-fi",
            "category": "English books",
            "price": 10,
            "salePrice": "8.5",
            "url": "https://cdn.example/dune.png",
            "favorite": true,
            "sold": 3,
            "__v": 0
        }"#;
        let card: SaleCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert!((card.price - 10.0).abs() < f64::EPSILON);
        assert!((card.sale_price - 8.5).abs() < f64::EPSILON);
        assert_eq!(card.category(), Category::English);
        assert!(card.favorite);
        assert_eq!(card.sold, 3);
    }

    #[test]
    fn sale_card_defaults_missing_fields() {
        let card: SaleCard = serde_json::from_str(r#"{"_id":"x1","price":null}"#).unwrap();
        assert_eq!(card.title, "");
        assert!(card.price.abs() < f64::EPSILON);
        assert_eq!(card.url, None);
        assert!(!card.favorite);
        assert_eq!(card.sold, 0);
    }

    #[test]
    fn sale_card_unknown_category_falls_back() {
        let card: SaleCard =
            serde_json::from_str(r#"{"_id":"x2","category":"Comics"}"#).unwrap();
        assert_eq!(card.category(), Category::All);
        assert_eq!(card.known_category(), None);
        assert_eq!(card.category, "Comics");
    }

    #[test]
    fn sale_card_null_fields_decode_as_defaults() {
        let card: SaleCard = serde_json::from_str(
            r#"{"_id":"b","title":null,"description":null,"category":null,
                "favorite":null,"sold":null,"url":null}"#,
        )
        .unwrap();
        assert_eq!(card.title, "");
        assert_eq!(card.description, "");
        assert_eq!(card.category, "");
        assert!(!card.favorite);
        assert_eq!(card.sold, 0);
    }

    #[test]
    fn list_with_one_null_record_field_keeps_every_row() {
        let resp: ListResponse = serde_json::from_str(
            r#"{"data":[
                {"_id":"a","title":"Dune","category":"English books","price":10},
                {"_id":"b","title":null,"favorite":null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].title, "Dune");
        assert_eq!(resp.data[1].id.as_str(), "b");
        assert_eq!(resp.data[1].title, "");
    }

    #[test]
    fn list_response_without_data_is_empty() {
        let resp: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
    }

    // ---- ApiErrorBody ----

    #[test]
    fn error_body_truthiness() {
        let flagged: ApiErrorBody =
            serde_json::from_str(r#"{"error":true,"message":"Card not found"}"#).unwrap();
        assert_eq!(flagged.flagged_message().as_deref(), Some("Card not found"));

        let text_error: ApiErrorBody =
            serde_json::from_str(r#"{"error":"CastError"}"#).unwrap();
        assert!(text_error.has_error());
        assert_eq!(text_error.flagged_message(), None);

        let not_flagged: ApiErrorBody =
            serde_json::from_str(r#"{"error":false,"message":"ignored"}"#).unwrap();
        assert!(!not_flagged.has_error());
        assert_eq!(not_flagged.flagged_message(), None);
    }

    // ---- CardForm ----

    #[test]
    fn form_text_fields_never_include_flags() {
        let form = CardForm {
            title: "Dune".into(),
            description: "Sci-fi".into(),
            category: Category::English.to_string(),
            price: 10.0,
            sale_price: 8.0,
            image: None,
        };
        let fields = form.text_fields();
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["title", "description", "category", "price", "salePrice"]
        );
        assert_eq!(fields[2].1, "English books");
        assert_eq!(fields[3].1, "10");
        assert_eq!(fields[4].1, "8");
    }

    #[test]
    fn form_sends_unknown_category_verbatim() {
        let form = CardForm {
            category: "Comics".into(),
            ..CardForm::default()
        };
        assert_eq!(form.text_fields()[2].1, "Comics");
    }

    #[test]
    fn image_upload_name_and_mime() {
        let img = ImageUpload::new("/home/me/covers/Dune.JPG");
        assert_eq!(img.file_name(), "Dune.JPG");
        assert_eq!(img.mime_type(), "image/jpeg");
        assert_eq!(ImageUpload::new("cover").mime_type(), "application/octet-stream");
    }
}
