//! 目录页面视图
//!
//! 上方为卡片表单（新建/编辑共用），下方为卡片表格。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use salecard_client::{format_amount, SaleCard};

use crate::i18n::t;
use crate::model::{App, DraftField};
use crate::util::truncate_display;
use crate::view::theme::{colors, Styles};

/// 表单高度：6 个字段 + 空行 + 按钮行 + 边框
const FORM_HEIGHT: u16 = 10;

/// 标签列宽度
const LABEL_WIDTH: usize = 14;

/// 表格列宽比例（标题、描述、分类、价格、促销价、图片）
const COLUMN_PERCENT: [u16; 6] = [20, 28, 15, 9, 10, 18];

/// 渲染目录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
        .split(area);

    render_form(app, frame, chunks[0]);
    render_table(app, frame, chunks[1]);
}

fn field_label(field: DraftField) -> &'static str {
    let labels = &t().catalog.fields;
    match field {
        DraftField::Title => labels.title,
        DraftField::Description => labels.description,
        DraftField::Category => labels.category,
        DraftField::Price => labels.price,
        DraftField::SalePrice => labels.sale_price,
        DraftField::Image => labels.image,
    }
}

/// 渲染卡片表单
fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let catalog = &app.catalog;
    let focused = app.focus.is_form();

    let title = if catalog.mode.is_editing() {
        texts.catalog.form_title_edit
    } else {
        texts.catalog.form_title_new
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let mut lines: Vec<Line> = DraftField::ALL
        .iter()
        .map(|&field| {
            let active = focused && field == catalog.form_field;
            let marker = if active { "▶ " } else { "  " };
            let label = format!("{marker}{:<width$}", field_label(field), width = LABEL_WIDTH);

            let label_style = if active {
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.muted)
            };

            let value = catalog.draft.field_text(field);
            let value_span = match field {
                DraftField::Category => Span::styled(
                    format!("◀ {value} ▶"),
                    Style::default().fg(if active { c.highlight } else { c.fg }),
                ),
                DraftField::Image if value.is_empty() && !active => {
                    Span::styled(texts.catalog.image_placeholder, Styles::muted())
                }
                _ => {
                    let cursor = if active { "▏" } else { "" };
                    Span::styled(format!("{value}{cursor}"), Style::default().fg(c.fg))
                }
            };

            Line::from(vec![Span::styled(label, label_style), value_span])
        })
        .collect();

    lines.push(Line::from(""));

    // 按钮行：编辑时显示只读的收藏/销量
    let button = if catalog.mode.is_editing() {
        texts.catalog.update
    } else {
        texts.catalog.submit
    };
    let button_style = if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };
    let mut button_line = vec![
        Span::raw(format!("  {:<width$}", "", width = LABEL_WIDTH)),
        Span::styled(format!(" {button} "), button_style),
    ];
    if catalog.mode.is_editing() {
        let favorite = if catalog.draft.favorite {
            texts.common.yes
        } else {
            texts.common.no
        };
        button_line.push(Span::styled(
            format!(
                "   {}: {favorite}  {}: {}",
                texts.catalog.favorite, texts.catalog.sold, catalog.draft.sold
            ),
            Styles::muted(),
        ));
    }
    lines.push(Line::from(button_line));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 按比例计算各列的字符宽度
fn column_widths(total: u16) -> [usize; 6] {
    COLUMN_PERCENT.map(|p| (usize::from(total) * usize::from(p) / 100).saturating_sub(1))
}

fn card_row(card: &SaleCard, widths: &[usize; 6]) -> Row<'static> {
    let no_image = t().catalog.no_image;
    let cells = [
        card.title.clone(),
        card.description.clone(),
        card.category.clone(),
        format!("${}", format_amount(card.price)),
        format!("${}", format_amount(card.sale_price)),
        card.url.clone().unwrap_or_else(|| no_image.to_string()),
    ];

    Row::new(
        cells
            .iter()
            .zip(widths)
            .map(|(text, &w)| Cell::from(truncate_display(text, w))),
    )
}

/// 渲染卡片表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let catalog = &app.catalog;
    let focused = app.focus.is_table();

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            texts.catalog.table_title,
            catalog.cards.len()
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if catalog.cards.is_empty() {
        let message = if catalog.loading {
            texts.status.loading
        } else {
            texts.catalog.no_cards
        };
        let content = vec![Line::from(""), Line::styled(format!("  {message}"), Styles::muted())];
        frame.render_widget(Paragraph::new(content).block(block), area);
        return;
    }

    let inner_width = area.width.saturating_sub(4);
    let widths = column_widths(inner_width);

    let cols = &texts.catalog.columns;
    let header = Row::new([
        cols.title,
        cols.description,
        cols.category,
        cols.price,
        cols.sale_price,
        cols.image,
    ])
    .style(Styles::title().add_modifier(Modifier::UNDERLINED));

    let rows: Vec<Row> = catalog.cards.iter().map(|card| card_row(card, &widths)).collect();

    let constraints = COLUMN_PERCENT.map(Constraint::Percentage);
    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(catalog.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use salecard_client::{CardId, Category};

    use super::*;
    use crate::model::FocusPanel;

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame, frame.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let app = App::new();
        let screen = render_to_string(&app);
        assert!(screen.contains(t().catalog.no_cards));
        assert!(screen.contains(t().catalog.form_title_new));
    }

    #[test]
    fn test_table_shows_card_with_prices() {
        let mut app = App::new();
        app.catalog.replace_cards(vec![SaleCard {
            id: CardId::new("a"),
            title: "Dune".into(),
            description: "Sci-fi".into(),
            category: "English books".into(),
            price: 10.0,
            sale_price: 8.0,
            url: None,
            favorite: false,
            sold: 0,
        }]);
        app.focus = FocusPanel::Table;

        let screen = render_to_string(&app);
        assert!(screen.contains("Dune"));
        assert!(screen.contains("English books"));
        assert!(screen.contains("$10"));
        assert!(screen.contains("$8"));
    }

    #[test]
    fn test_table_shows_stored_category_verbatim() {
        let mut app = App::new();
        app.catalog.replace_cards(vec![SaleCard {
            id: CardId::new("c"),
            title: "Watchmen".into(),
            description: String::new(),
            category: "Comics".into(),
            price: 5.0,
            sale_price: 4.0,
            url: None,
            favorite: false,
            sold: 0,
        }]);
        // 表单显示其他分类，避免与表格内容混淆
        app.catalog.draft.category = Category::English;

        let screen = render_to_string(&app);
        assert!(screen.contains("Comics"));
        assert!(!screen.contains(Category::All.as_str()));
    }

    #[test]
    fn test_edit_mode_shows_update_button() {
        let mut app = App::new();
        app.catalog.replace_cards(vec![SaleCard {
            id: CardId::new("a"),
            title: "Dune".into(),
            description: String::new(),
            category: "English books".into(),
            price: 1.0,
            sale_price: 1.0,
            url: None,
            favorite: true,
            sold: 12,
        }]);
        app.catalog.enter_edit(&CardId::new("a"));

        let screen = render_to_string(&app);
        assert!(screen.contains(t().catalog.form_title_edit));
        assert!(screen.contains(t().catalog.update));
        assert!(screen.contains("12"));
    }

    #[test]
    fn test_column_widths_fit() {
        let widths = column_widths(100);
        assert!(widths.iter().sum::<usize>() <= 100);
    }
}
