//! 弹窗更新逻辑

use crate::backend::Command;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Alert { .. } | Modal::Help) => {
            handle_simple_modal(app, msg);
            None
        }
        None => None,
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        ref card_id,
        ref card_title,
        ref mut focus,
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
            None
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
            None
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let id = card_id.clone();
                let title = card_title.clone();
                app.modal.close();
                app.set_status(format!("{} \"{title}\"", t().status.deleting));
                Some(Command::Delete { id })
            } else {
                app.modal.close();
                app.clear_status();
                None
            }
        }
    }
}

/// 处理简单弹窗（帮助、提示）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::ToggleFocus => {}
    }
}
