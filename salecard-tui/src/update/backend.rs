//! 请求结果更新逻辑

use salecard_client::{ApiErrorBody, ClientError};

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台请求结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::CardsLoaded(cards) => {
            app.catalog.replace_cards(cards);
        }

        BackendMessage::LoadFailed(error) => {
            // 已在 Backend 层记录日志，保留旧列表
            log::debug!(
                "Keeping {} cards after load failure: {error}",
                app.catalog.cards.len()
            );
            app.catalog.loading = false;
        }

        BackendMessage::Saved { mode } => {
            app.catalog.submitting = false;
            app.catalog.reset_draft();
            app.catalog.begin_load();
            let text = match mode.editing_id() {
                Some(id) => {
                    log::debug!("Card {id} saved, leaving edit mode");
                    t().status.updated
                }
                None => t().status.created,
            };
            app.set_status(text);
        }

        BackendMessage::SaveFailed(error) => {
            log::debug!("Keeping draft after save failure: {error}");
            app.catalog.submitting = false;
            app.clear_status();
            app.modal
                .show_alert(t().modal.alert_title, t().modal.save_failed);
        }

        BackendMessage::Deleted { id } => {
            log::debug!("Card {id} deleted, reloading");
            app.catalog.begin_load();
            app.set_status(t().status.deleted);
        }

        BackendMessage::DeleteFailed { id, error } => {
            log::debug!("Delete of card {id} failed, list left unchanged");
            app.clear_status();
            app.modal
                .show_alert(t().modal.alert_title, &delete_failure_message(&error));
        }
    }
}

/// 删除失败提示：服务端标记了 error 时优先使用其 message
fn delete_failure_message(error: &ClientError) -> String {
    let ClientError::Api { body, .. } = error else {
        return t().modal.network_error.to_string();
    };

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if parsed.has_error() => parsed
            .flagged_message()
            .unwrap_or_else(|| t().modal.delete_failed.to_string()),
        _ => t().modal.network_error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(body: &str) -> ClientError {
        ClientError::Api {
            status: 400,
            message: None,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_delete_message_prefers_server_message() {
        let err = api_error(r#"{"error": true, "message": "Card is locked"}"#);
        assert_eq!(delete_failure_message(&err), "Card is locked");
    }

    #[test]
    fn test_delete_message_flagged_without_message() {
        let err = api_error(r#"{"error": "yes"}"#);
        assert_eq!(delete_failure_message(&err), t().modal.delete_failed);
    }

    #[test]
    fn test_delete_message_unflagged_body() {
        let err = api_error(r#"{"error": false, "message": "ignored"}"#);
        assert_eq!(delete_failure_message(&err), t().modal.network_error);

        let err = api_error("<html>502 Bad Gateway</html>");
        assert_eq!(delete_failure_message(&err), t().modal.network_error);
    }

    #[test]
    fn test_delete_message_transport_error() {
        let err = ClientError::Timeout {
            detail: "30s".into(),
        };
        assert_eq!(delete_failure_message(&err), t().modal.network_error);
    }

    #[test]
    fn test_load_failure_keeps_cards() {
        let mut app = App::new();
        app.catalog.begin_load();
        update(
            &mut app,
            BackendMessage::LoadFailed(ClientError::NetworkError {
                detail: "offline".into(),
            }),
        );
        assert!(!app.catalog.loading);
        assert!(!app.modal.is_open());
    }
}
