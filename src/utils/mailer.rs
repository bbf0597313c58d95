//! SMTP 邮件发送
//!
//! 通知派发的邮件通道，调用方负责把失败记日志并吞掉，
//! 邮件失败永远不回滚已持久化的通知。

use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};

/// 发送一封纯文本邮件
///
/// `email.enabled` 为 false 时直接返回 Ok，不做任何网络操作。
pub async fn send_mail(to: &str, subject: &str, body: &str) -> Result<()> {
    let config = AppConfig::get();
    if !config.email.enabled {
        return Ok(());
    }

    let message = Message::builder()
        .from(
            config
                .email
                .from_address
                .parse()
                .map_err(|e| SchoolSystemError::mail_transport(format!("发件地址无效: {e}")))?,
        )
        .to(to
            .parse()
            .map_err(|e| SchoolSystemError::mail_transport(format!("收件地址无效: {e}")))?)
        .subject(subject)
        .body(body.to_string())
        .map_err(|e| SchoolSystemError::mail_transport(format!("构造邮件失败: {e}")))?;

    let mailer = build_transport(config)?;

    mailer
        .send(message)
        .await
        .map_err(|e| SchoolSystemError::mail_transport(format!("发送邮件失败: {e}")))?;

    Ok(())
}

fn build_transport(config: &AppConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    // 无账号时走明文 SMTP（本地 relay / 测试环境）
    if config.email.username.is_empty() {
        return Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.email.smtp_host)
                .port(config.email.smtp_port)
                .build(),
        );
    }

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.email.smtp_host)
        .map_err(|e| SchoolSystemError::mail_transport(format!("SMTP 连接配置无效: {e}")))?
        .port(config.email.smtp_port)
        .credentials(Credentials::new(
            config.email.username.clone(),
            config.email.password.clone(),
        ))
        .build();

    Ok(transport)
}
