//! 目录页面更新逻辑（表单 + 表格）

use crate::backend::Command;
use crate::i18n::t;
use crate::message::{FormMessage, TableMessage};
use crate::model::{App, DraftField, FocusPanel};

/// 处理表单消息
pub fn update_form(app: &mut App, msg: FormMessage) -> Option<Command> {
    let catalog = &mut app.catalog;
    let field = catalog.form_field;

    match msg {
        FormMessage::NextField => {
            catalog.form_field = field.next();
        }

        FormMessage::PrevField => {
            catalog.form_field = field.prev();
        }

        FormMessage::Input(c) => {
            if !catalog.draft.input_char(field, c) && field.is_amount() {
                app.set_status(t().status.numbers_only);
            }
        }

        FormMessage::Backspace => {
            catalog.draft.backspace(field);
        }

        FormMessage::PrevOption | FormMessage::NextOption => {
            if field == DraftField::Category {
                catalog
                    .draft
                    .cycle_category(matches!(msg, FormMessage::NextOption));
            }
        }

        FormMessage::Submit => {
            let submission = catalog.begin_submit();
            app.set_status(t().status.saving);
            return Some(Command::Submit(submission));
        }

        FormMessage::CancelEdit => {
            if catalog.mode.is_editing() {
                catalog.reset_draft();
                app.set_status(t().status.edit_cancelled);
            } else {
                app.clear_status();
            }
        }
    }

    None
}

/// 处理表格消息
pub fn update_table(app: &mut App, msg: TableMessage) -> Option<Command> {
    let catalog = &mut app.catalog;

    match msg {
        TableMessage::SelectPrevious => catalog.select_previous(),
        TableMessage::SelectNext => catalog.select_next(),
        TableMessage::SelectFirst => catalog.select_first(),
        TableMessage::SelectLast => catalog.select_last(),

        TableMessage::Edit => {
            let Some(id) = catalog.selected_card().map(|c| c.id.clone()) else {
                return None;
            };
            if catalog.enter_edit(&id) {
                let draft = &catalog.draft;
                let mut status = format!("{} \"{}\"", t().status.editing, draft.title);
                if let Some(raw) = &draft.unlisted_category {
                    status = format!("{status}: \"{raw}\" {}", t().status.unlisted_category);
                }
                app.focus = FocusPanel::Form;
                app.set_status(status);
            }
        }

        TableMessage::Delete => {
            if let Some(card) = catalog.selected_card() {
                let (id, title) = (card.id.clone(), card.title.clone());
                app.modal.show_confirm_delete(id, &title);
            }
        }

        TableMessage::New => {
            catalog.reset_draft();
            app.focus = FocusPanel::Form;
            app.clear_status();
        }
    }

    None
}
