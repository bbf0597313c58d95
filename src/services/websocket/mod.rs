/*!
 * WebSocket 实时推送服务
 *
 * 客户端通过以下 URL 连接：
 * ```text
 * ws://host/api/v1/ws?token=<access_token>
 * ```
 *
 * 连接建立后自动订阅本人的私有主题 `notifications_<userId>`；
 * 管理员额外订阅 `attendance_updates`。聊天室通过 `join_room`
 * 客户端消息按需加入。
 *
 * ## 服务端推送
 * ```json
 * {"type": "notification", "payload": {"id": 1, "title": "...", "message": "...", "kind": "fee", "created_at": "..."}}
 * {"type": "attendance_update", "class_name": "five", "date": "2026-03-02", "total": 10, "present": 7, "absent": 3}
 * ```
 *
 * ## 心跳
 * ```json
 * {"type": "ping"}
 * {"type": "pong"}
 * ```
 */

use std::sync::Arc;

use actix_ws::Message;
use dashmap::DashMap;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::notifications::entities::{Notification, NotificationKind};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

/// 考勤广播主题（管理员订阅）
pub const ATTENDANCE_TOPIC: &str = "attendance_updates";

/// 用户私有通知主题
pub fn notifications_topic(user_id: i64) -> String {
    format!("notifications_{user_id}")
}

/// 聊天室主题
pub fn chat_topic(room: &str) -> String {
    format!("chat_{room}")
}

/// 服务端推送消息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// 连接成功
    Connected { user_id: i64 },
    /// 通知消息
    Notification { payload: NotificationPayload },
    /// 考勤广播
    AttendanceUpdate {
        class_name: String,
        date: chrono::NaiveDate,
        total: u64,
        present: u64,
        absent: u64,
    },
    /// 聊天消息
    Chat {
        room: String,
        from: String,
        content: String,
        sent_at: chrono::DateTime<chrono::Utc>,
    },
    /// 心跳请求
    Ping,
    /// 心跳响应
    Pong,
    /// 错误消息
    Error { message: String },
}

/// 客户端消息
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsClientMessage {
    Ping,
    Pong,
    /// 加入聊天室
    JoinRoom { room: String },
    /// 向聊天室发言
    Chat { room: String, content: String },
    /// 标记通知已读
    MarkRead { id: i64 },
}

/// 通知载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Notification> for NotificationPayload {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            kind: n.kind,
            created_at: n.created_at,
        }
    }
}

/// 实时推送中枢：主题 -> 广播通道
///
/// 在 `main` 中构造并经 `web::Data` 注入，发布即发即弃；
/// 向无订阅者的主题发布是空操作，不缓存不重放。
pub struct RealtimeHub {
    topics: DashMap<String, broadcast::Sender<WsMessage>>,
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self {
            topics: DashMap::new(),
        }
    }

    /// 订阅主题，不存在时创建通道
    pub fn subscribe(&self, topic: &str) -> broadcast::Receiver<WsMessage> {
        let entry = self.topics.entry(topic.to_string()).or_insert_with(|| {
            let (tx, _) = broadcast::channel(100);
            tx
        });
        entry.subscribe()
    }

    /// 发布消息；返回是否真的有订阅者收到
    pub fn publish(&self, topic: &str, message: WsMessage) -> bool {
        if let Some(sender) = self.topics.get(topic) {
            sender.send(message).is_ok()
        } else {
            false
        }
    }

    /// 会话结束后回收空主题
    pub fn release(&self, topic: &str) {
        if let Some(entry) = self.topics.get(topic)
            && entry.receiver_count() == 0
        {
            drop(entry);
            self.topics.remove(topic);
        }
    }

    /// 推送通知到收件人的私有主题
    pub fn push_notification(&self, recipient_id: i64, notification: Notification) -> bool {
        self.publish(
            &notifications_topic(recipient_id),
            WsMessage::Notification {
                payload: NotificationPayload::from(notification),
            },
        )
    }

    /// 点名后的考勤广播
    pub fn publish_attendance_update(
        &self,
        class_name: &str,
        date: chrono::NaiveDate,
        total: u64,
        present: u64,
        absent: u64,
    ) {
        self.publish(
            ATTENDANCE_TOPIC,
            WsMessage::AttendanceUpdate {
                class_name: class_name.to_string(),
                date,
                total,
                present,
                absent,
            },
        );
    }

    /// 主题当前是否有订阅者
    pub fn has_subscribers(&self, topic: &str) -> bool {
        self.topics
            .get(topic)
            .is_some_and(|s| s.receiver_count() > 0)
    }
}

/// 把一个主题的广播流转发进会话的出站队列
fn spawn_forwarder(
    hub: &Arc<RealtimeHub>,
    topic: &str,
    out_tx: mpsc::Sender<WsMessage>,
) -> JoinHandle<()> {
    let mut rx = hub.subscribe(topic);
    let topic = topic.to_string();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(msg) => {
                    if out_tx.send(msg).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("主题 {} 的订阅落后 {} 条消息", topic, n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

/// WebSocket 会话服务
pub struct WebSocketService;

impl WebSocketService {
    /// 处理一条已认证的 WebSocket 连接
    pub async fn handle_connection(
        hub: Arc<RealtimeHub>,
        storage: Arc<dyn Storage>,
        user: User,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        let user_id = user.id;
        info!("WebSocket connected for user: {}", user_id);

        // 出站队列：多个主题的转发任务汇聚到一条通道
        let (out_tx, mut out_rx) = mpsc::channel::<WsMessage>(100);
        let mut topics: Vec<String> = Vec::new();
        let mut forwarders: Vec<JoinHandle<()>> = Vec::new();

        let mut join_topic = |topic: String,
                              topics: &mut Vec<String>,
                              forwarders: &mut Vec<JoinHandle<()>>| {
            if !topics.contains(&topic) {
                forwarders.push(spawn_forwarder(&hub, &topic, out_tx.clone()));
                topics.push(topic);
            }
        };

        join_topic(notifications_topic(user_id), &mut topics, &mut forwarders);
        if user.role == UserRole::Admin {
            join_topic(ATTENDANCE_TOPIC.to_string(), &mut topics, &mut forwarders);
        }

        let connected_msg = WsMessage::Connected { user_id };
        if let Ok(json) = serde_json::to_string(&connected_msg) {
            let _ = session.text(json).await;
        }

        let heartbeat_interval = std::time::Duration::from_secs(30);
        let mut heartbeat = tokio::time::interval(heartbeat_interval);

        loop {
            tokio::select! {
                // 客户端消息
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<WsClientMessage>(&text) {
                                Ok(client_msg) => {
                                    let outcome = Self::handle_client_message(
                                        &hub,
                                        &storage,
                                        &user,
                                        client_msg,
                                        &mut session,
                                        |topic| join_topic(topic, &mut topics, &mut forwarders),
                                    )
                                    .await;
                                    if outcome.is_err() {
                                        break;
                                    }
                                }
                                Err(e) => {
                                    debug!("无法解析用户 {} 的消息: {}", user_id, e);
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if session.pong(&data).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("WebSocket closed for user: {}", user_id);
                            break;
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error for user {}: {:?}", user_id, e);
                            break;
                        }
                        _ => {}
                    }
                }

                // 服务端推送
                msg = out_rx.recv() => {
                    match msg {
                        Some(ws_msg) => {
                            if let Ok(json) = serde_json::to_string(&ws_msg)
                                && session.text(json).await.is_err() {
                                    break;
                                }
                        }
                        None => break,
                    }
                }

                // 心跳
                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        for handle in forwarders {
            handle.abort();
        }
        for topic in &topics {
            hub.release(topic);
        }
        info!("WebSocket disconnected for user: {}", user_id);
    }

    /// 处理单条客户端消息；Err 表示会话应当结束
    async fn handle_client_message(
        hub: &Arc<RealtimeHub>,
        storage: &Arc<dyn Storage>,
        user: &User,
        message: WsClientMessage,
        session: &mut actix_ws::Session,
        mut join_topic: impl FnMut(String),
    ) -> Result<(), ()> {
        match message {
            WsClientMessage::Ping => {
                let pong = serde_json::to_string(&WsMessage::Pong)
                    .unwrap_or_else(|_| r#"{"type":"pong"}"#.to_string());
                session.text(pong).await.map_err(|_| ())?;
            }
            WsClientMessage::Pong => {}
            WsClientMessage::JoinRoom { room } => {
                join_topic(chat_topic(&room));
                debug!("用户 {} 加入聊天室 {}", user.id, room);
            }
            WsClientMessage::Chat { room, content } => {
                hub.publish(
                    &chat_topic(&room),
                    WsMessage::Chat {
                        room,
                        from: user.username.clone(),
                        content,
                        sent_at: chrono::Utc::now(),
                    },
                );
            }
            WsClientMessage::MarkRead { id } => {
                if let Err(e) = storage.mark_notification_read(id, user.id).await {
                    warn!("通过 WebSocket 标记已读失败: {}", e);
                    let err_msg = WsMessage::Error {
                        message: "Failed to mark notification as read".to_string(),
                    };
                    if let Ok(json) = serde_json::to_string(&err_msg) {
                        session.text(json).await.map_err(|_| ())?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_names() {
        assert_eq!(notifications_topic(42), "notifications_42");
        assert_eq!(chat_topic("five"), "chat_five");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let hub = RealtimeHub::new();
        assert!(!hub.publish("notifications_1", WsMessage::Ping));
    }

    #[tokio::test]
    async fn test_subscribe_then_publish() {
        let hub = RealtimeHub::new();
        let mut rx = hub.subscribe("attendance_updates");
        hub.publish_attendance_update(
            "five",
            chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            10,
            7,
            3,
        );
        let msg = rx.try_recv().expect("message should be delivered");
        match msg {
            WsMessage::AttendanceUpdate { total, present, .. } => {
                assert_eq!(total, 10);
                assert_eq!(present, 7);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_release_removes_empty_topic() {
        let hub = RealtimeHub::new();
        let rx = hub.subscribe("chat_five");
        drop(rx);
        hub.release("chat_five");
        assert!(!hub.has_subscribers("chat_five"));
        assert!(!hub.publish("chat_five", WsMessage::Ping));
    }

    #[test]
    fn test_client_message_parsing() {
        let join: WsClientMessage =
            serde_json::from_str(r#"{"type":"join_room","room":"five"}"#).unwrap();
        assert!(matches!(join, WsClientMessage::JoinRoom { room } if room == "five"));

        let mark: WsClientMessage = serde_json::from_str(r#"{"type":"mark_read","id":7}"#).unwrap();
        assert!(matches!(mark, WsClientMessage::MarkRead { id: 7 }));
    }
}
