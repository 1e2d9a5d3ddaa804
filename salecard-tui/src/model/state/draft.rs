//! 卡片草稿（表单）状态
//!
//! 草稿同时承担"新建"和"编辑"两种用途：
//! - `DraftMode::Creating`：提交时调用创建接口
//! - `DraftMode::Editing(id)`：提交时以该 id 调用更新接口
//!
//! 价格在输入阶段保持为字符串，只在构造请求表单时解析为数值。

use std::path::PathBuf;

use salecard_client::{CardForm, CardId, Category, ImageUpload, SaleCard, format_amount};

/// 草稿模式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DraftMode {
    #[default]
    Creating,
    Editing(CardId),
}

impl DraftMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&CardId> {
        match self {
            Self::Editing(id) => Some(id),
            Self::Creating => None,
        }
    }
}

/// 表单字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftField {
    #[default]
    Title,
    Description,
    Category,
    Price,
    SalePrice,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Category,
        DraftField::Price,
        DraftField::SalePrice,
        DraftField::Image,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 是否接受字符输入（分类字段只能切换选项）
    pub fn accepts_text(self) -> bool {
        !matches!(self, Self::Category)
    }

    pub fn is_amount(self) -> bool {
        matches!(self, Self::Price | Self::SalePrice)
    }
}

/// 写入字段的值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Category(Category),
    /// 文件选择结果，只取第一个
    Files(Vec<PathBuf>),
}

/// 卡片草稿
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// 记录中不属于已知分类的原始值，操作员选择分类之前原样提交
    pub unlisted_category: Option<String>,
    pub price: String,
    pub sale_price: String,
    pub image: Option<ImageUpload>,
    /// 以下两项只读，编辑时从记录带入用于展示，不会提交
    pub favorite: bool,
    pub sold: u64,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::default(),
            unlisted_category: None,
            price: "0".to_string(),
            sale_price: "0".to_string(),
            image: None,
            favorite: false,
            sold: 0,
        }
    }
}

impl Draft {
    /// 从已有记录构造编辑草稿（不带入图片）
    pub fn from_card(card: &SaleCard) -> Self {
        let known = card.known_category();
        if known.is_none() {
            log::warn!(
                "Card {} has unlisted category '{}', keeping it unless changed",
                card.id,
                card.category
            );
        }
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            category: known.unwrap_or_default(),
            unlisted_category: known.is_none().then(|| card.category.clone()),
            price: format_amount(card.price),
            sale_price: format_amount(card.sale_price),
            image: None,
            favorite: card.favorite,
            sold: card.sold,
        }
    }

    /// 写入字段，返回是否被接受
    ///
    /// 价格字段只接受非负数字输入；字段与值类型不匹配时忽略。
    pub fn set_field(&mut self, field: DraftField, value: FieldValue) -> bool {
        match (field, value) {
            (DraftField::Title, FieldValue::Text(s)) => self.title = s,
            (DraftField::Description, FieldValue::Text(s)) => self.description = s,
            (DraftField::Category, FieldValue::Category(c)) => {
                self.category = c;
                self.unlisted_category = None;
            }
            (DraftField::Category, FieldValue::Text(s)) => match s.parse() {
                Ok(c) => {
                    self.category = c;
                    self.unlisted_category = None;
                }
                Err(e) => {
                    log::debug!("Ignoring category input: {e}");
                    return false;
                }
            },
            (DraftField::Price, FieldValue::Text(s)) => {
                if !is_amount_input(&s) {
                    return false;
                }
                self.price = s;
            }
            (DraftField::SalePrice, FieldValue::Text(s)) => {
                if !is_amount_input(&s) {
                    return false;
                }
                self.sale_price = s;
            }
            (DraftField::Image, FieldValue::Files(paths)) => {
                self.image = paths.into_iter().next().map(ImageUpload::new);
            }
            (DraftField::Image, FieldValue::Text(s)) => {
                self.image = (!s.is_empty()).then(|| ImageUpload::new(s));
            }
            (field, value) => {
                log::debug!("Ignoring {value:?} for field {field:?}");
                return false;
            }
        }
        true
    }

    /// 字段的文本表示（用于渲染和逐字编辑）
    pub fn field_text(&self, field: DraftField) -> String {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Category => self.category_text().to_string(),
            DraftField::Price => self.price.clone(),
            DraftField::SalePrice => self.sale_price.clone(),
            DraftField::Image => self
                .image
                .as_ref()
                .map(|img| img.path().display().to_string())
                .unwrap_or_default(),
        }
    }

    /// 在字段末尾输入一个字符
    pub fn input_char(&mut self, field: DraftField, c: char) -> bool {
        if !field.accepts_text() {
            return false;
        }
        let current = self.field_text(field);
        // 金额字段为 "0" 时直接替换
        let text = if field.is_amount() && current == "0" && c.is_ascii_digit() {
            c.to_string()
        } else {
            let mut s = current;
            s.push(c);
            s
        };
        self.set_field(field, FieldValue::Text(text))
    }

    /// 删除字段末尾一个字符
    pub fn backspace(&mut self, field: DraftField) -> bool {
        if !field.accepts_text() {
            return false;
        }
        let mut text = self.field_text(field);
        if text.pop().is_none() {
            return false;
        }
        self.set_field(field, FieldValue::Text(text))
    }

    /// 将要提交的分类文本
    pub fn category_text(&self) -> &str {
        self.unlisted_category
            .as_deref()
            .unwrap_or_else(|| self.category.as_str())
    }

    /// 切换分类选项
    pub fn cycle_category(&mut self, forward: bool) {
        let next = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
        self.set_field(DraftField::Category, FieldValue::Category(next));
    }

    /// 构造请求表单，价格为空或无法解析时按 0 处理
    pub fn to_form(&self) -> CardForm {
        CardForm {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category_text().to_string(),
            price: parse_amount(&self.price),
            sale_price: parse_amount(&self.sale_price),
            image: self.image.clone(),
        }
    }
}

fn is_amount_input(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || c == '.') && s.matches('.').count() <= 1
}

fn parse_amount(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> SaleCard {
        SaleCard {
            id: CardId::new("c1"),
            title: "Dune".into(),
            description: "Sci-fi".into(),
            category: "English books".into(),
            price: 10.0,
            sale_price: 8.5,
            url: Some("https://cdn/dune.png".into()),
            favorite: true,
            sold: 3,
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = Draft::default();
        assert!(draft.title.is_empty());
        assert_eq!(draft.category, Category::All);
        assert_eq!(draft.price, "0");
        assert!(draft.image.is_none());
        assert!(!draft.favorite);
        assert_eq!(draft.sold, 0);
    }

    #[test]
    fn test_set_field_replaces_text() {
        let mut draft = Draft::default();
        assert!(draft.set_field(DraftField::Title, FieldValue::Text("Dune".into())));
        assert_eq!(draft.title, "Dune");
        assert!(draft.set_field(DraftField::Title, FieldValue::Text(String::new())));
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_set_field_rejects_non_numeric_amount() {
        let mut draft = Draft::default();
        assert!(draft.set_field(DraftField::Price, FieldValue::Text("12.5".into())));
        assert!(!draft.set_field(DraftField::Price, FieldValue::Text("12a".into())));
        assert!(!draft.set_field(DraftField::Price, FieldValue::Text("-1".into())));
        assert!(!draft.set_field(DraftField::SalePrice, FieldValue::Text("1.2.3".into())));
        assert_eq!(draft.price, "12.5");
        assert_eq!(draft.sale_price, "0");
    }

    #[test]
    fn test_set_field_takes_first_file() {
        let mut draft = Draft::default();
        let files = vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.png")];
        assert!(draft.set_field(DraftField::Image, FieldValue::Files(files)));
        assert_eq!(draft.image, Some(ImageUpload::new("/tmp/a.png")));

        assert!(draft.set_field(DraftField::Image, FieldValue::Files(Vec::new())));
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_set_field_category() {
        let mut draft = Draft::default();
        assert!(draft.set_field(
            DraftField::Category,
            FieldValue::Text("Seasonal books".into())
        ));
        assert_eq!(draft.category, Category::Seasonal);
        assert!(!draft.set_field(DraftField::Category, FieldValue::Text("Comics".into())));
        assert_eq!(draft.category, Category::Seasonal);
    }

    #[test]
    fn test_mismatched_value_is_ignored() {
        let mut draft = Draft::default();
        assert!(!draft.set_field(DraftField::Title, FieldValue::Category(Category::Urdu)));
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_input_char_and_backspace() {
        let mut draft = Draft::default();
        for c in "Dune".chars() {
            assert!(draft.input_char(DraftField::Title, c));
        }
        assert_eq!(draft.title, "Dune");
        assert!(draft.backspace(DraftField::Title));
        assert_eq!(draft.title, "Dun");

        // "0" 被首个数字替换，非数字被拒绝
        assert!(draft.input_char(DraftField::Price, '1'));
        assert!(draft.input_char(DraftField::Price, '5'));
        assert!(!draft.input_char(DraftField::Price, 'x'));
        assert_eq!(draft.price, "15");

        assert!(!draft.input_char(DraftField::Category, 'a'));
    }

    #[test]
    fn test_from_card_excludes_image() {
        let draft = Draft::from_card(&card());
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.category, Category::English);
        assert_eq!(draft.price, "10");
        assert_eq!(draft.sale_price, "8.5");
        assert!(draft.image.is_none());
        assert!(draft.favorite);
        assert_eq!(draft.sold, 3);
    }

    #[test]
    fn test_unlisted_category_is_kept_until_changed() {
        let mut record = card();
        record.category = "Comics".into();

        let mut draft = Draft::from_card(&record);
        assert_eq!(draft.field_text(DraftField::Category), "Comics");
        draft.title = "Dune II".into();
        assert_eq!(draft.to_form().category, "Comics");

        // 操作员切换分类后改为已知值
        draft.cycle_category(true);
        assert!(draft.unlisted_category.is_none());
        assert_eq!(draft.to_form().category, Category::English.as_str());
    }

    #[test]
    fn test_to_form_parses_amounts() {
        let mut draft = Draft::from_card(&card());
        draft.sale_price = String::new();
        let form = draft.to_form();
        assert_eq!(form.title, "Dune");
        assert!((form.price - 10.0).abs() < f64::EPSILON);
        assert!(form.sale_price.abs() < f64::EPSILON);
        assert!(form.image.is_none());

        draft.price = ".".into();
        assert!(draft.to_form().price.abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(DraftField::Image.next(), DraftField::Title);
        assert_eq!(DraftField::Title.prev(), DraftField::Image);
    }
}
