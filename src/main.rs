// region:    --- Imports
use auction_store::config::Options;
use auction_store::database::{DatabaseManager, InMemoryDatabase, SharedDatabase};
use auction_store::handlers;
use axum::extract::DefaultBodyLimit;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let options = Options::parse();

    // 저장소 선택
    let db: SharedDatabase = match &options.database_url {
        Some(database_url) => {
            let db_manager = DatabaseManager::connect(database_url, options.max_connections)
                .await
                .map_err(|e| {
                    error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Main", e);
                    e
                })?;

            if let Err(e) = db_manager.initialize_database().await {
                error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
                return Err(e.into());
            }
            info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
            Arc::new(db_manager)
        }
        None => {
            warn!(
                "{:<12} --> DATABASE_URL 없음: 메모리 저장소 사용",
                "Main"
            );
            Arc::new(InMemoryDatabase::new())
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::routes(db)
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let listener = TcpListener::bind(&options.listen_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
