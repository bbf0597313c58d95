//! 通知派发器
//!
//! 顺序固定：先持久化，再实时推送，最后邮件。持久化失败即整体失败；
//! 推送与邮件都是尽力而为，失败只记日志。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::notifications::entities::{Notification, NotificationKind};
use crate::services::websocket::RealtimeHub;
use crate::storage::Storage;
use crate::utils::mailer;

/// 派发一条通知给单个收件人
pub async fn dispatch(
    storage: &Arc<dyn Storage>,
    hub: Option<&RealtimeHub>,
    recipient_id: i64,
    title: &str,
    message: &str,
    kind: NotificationKind,
    expires_at: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<Notification> {
    // 1. 持久化必须先成功
    let notification = storage
        .create_notification(recipient_id, title, message, kind, expires_at)
        .await?;

    // 2. 实时推送（无订阅者时为空操作）
    if let Some(hub) = hub {
        let delivered = hub.push_notification(recipient_id, notification.clone());
        debug!(
            "通知 {} 实时推送给用户 {}: delivered={}",
            notification.id, recipient_id, delivered
        );
    }

    // 3. 邮件走独立任务，失败不影响请求
    if AppConfig::get().email.enabled {
        match storage.get_user_by_id(recipient_id).await {
            Ok(Some(user)) if !user.email.is_empty() => {
                let to = user.email;
                let subject = format!("School Management System - {title}");
                let body = message.to_string();
                tokio::spawn(async move {
                    if let Err(e) = mailer::send_mail(&to, &subject, &body).await {
                        warn!("通知邮件发送失败 ({}): {}", to, e);
                    }
                });
            }
            Ok(_) => {}
            Err(e) => {
                warn!("派发通知时查询收件人 {} 失败: {}", recipient_id, e);
            }
        }
    }

    Ok(notification)
}
