use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use user_crud_api::{
    app::user::{repository::PgUserRepository, service::UserService},
    config::load_config,
    create_router,
    infrastructure::{database::DatabaseManager, logger::Logger},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging);

    info!("启动用户 CRUD 服务...");

    let database = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;

    if config.database.ensure_schema {
        database.ensure_schema().await?;
    }

    let repository = PgUserRepository::new(database.get_pool().clone());
    let state = AppState {
        user_service: UserService::new(Arc::new(repository)),
    };

    let app = create_router(state, &config.http);

    let listener = TcpListener::bind(config.http.listen_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /users      - 获取所有用户");
    info!("   POST   /users      - 创建用户");
    info!("   PUT    /users/:id  - 更新用户");
    info!("   DELETE /users/:id  - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("服务器已停止");

    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("无法监听 Ctrl-C 信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("无法监听 SIGTERM 信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，开始优雅退出");
}
