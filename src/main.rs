use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

use rust_schoolsystem_next::config::AppConfig;
use rust_schoolsystem_next::models::AppStartTime;
use rust_schoolsystem_next::routes;
use rust_schoolsystem_next::runtime::{lifetime, scheduler};
use rust_schoolsystem_next::services::websocket::RealtimeHub;
use rust_schoolsystem_next::utils::{json_error_handler, query_error_handler};

/// 初始化 tracing。开发环境带文件/行号，生产输出 JSON。
/// 返回的 guard 必须存活到进程结束，否则缓冲日志会丢。
fn init_tracing(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(true),
        );

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }
    guard
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    warn!(
        "{} v{} starting up ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup().await;
    let storage = startup.storage.clone();
    let cache = startup.cache.clone();

    // 实时中枢在进程内唯一，注入到所有 worker
    let hub = web::Data::new(RealtimeHub::new());

    // 提醒调度器（配置关闭时为 None）
    let _scheduler =
        scheduler::spawn_reminder_scheduler(storage.clone(), hub.clone().into_inner());

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    warn!("Using {} CPU cores for the server", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(config.cors.max_age),
            )
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            // 统一的反序列化错误响应
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            ))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(hub.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(routes::configure_auth_routes) // 认证
            .configure(routes::configure_user_routes) // 账号管理
            .configure(routes::configure_student_routes) // 学生档案
            .configure(routes::configure_teacher_routes) // 教师档案
            .configure(routes::configure_attendance_routes) // 考勤
            .configure(routes::configure_fee_routes) // 费用
            .configure(routes::configure_library_routes) // 图书借阅
            .configure(routes::configure_exam_routes) // 考试与成绩
            .configure(routes::configure_assignment_routes) // 作业
            .configure(routes::configure_notification_routes) // 通知
            .configure(routes::configure_notice_routes) // 公告栏
            .configure(routes::configure_event_routes) // 校园事件
            .configure(routes::configure_dashboard_routes) // 仪表盘
            .configure(routes::configure_report_routes) // 报表导出
            .configure(routes::configure_websocket_routes) // 实时通道
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    ))
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    ))
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = if let Some(socket_path) = config.unix_socket_path() {
        warn!("Starting server on Unix socket: {}", socket_path);
        if std::path::Path::new(socket_path).exists() {
            std::fs::remove_file(socket_path)?;
        }
        server.bind_uds(socket_path)?
    } else {
        let bind_address = config.server_bind_address();
        warn!("Starting server at http://{}", bind_address);
        server.bind(bind_address)?
    };

    #[cfg(not(unix))]
    let server = {
        let bind_address = config.server_bind_address();
        warn!("Starting server at http://{}", bind_address);
        server.bind(bind_address)?
    };

    let server = server.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
