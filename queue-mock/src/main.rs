use anyhow::Context;
use queue_mock::{AppState, Config, Seed, build_router, init_logger};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env then config
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!(
        port = config.http_port,
        latency_ms = config.latency.as_millis() as u64,
        environment = %config.environment,
        "Queue mock server starting..."
    );

    // 2. Router over demo data
    let addr = format!("0.0.0.0:{}", config.http_port);
    let app = build_router(AppState::new(config, Seed::demo()));

    // 3. Serve until ctrl-c
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await
        .context("server error")?;

    Ok(())
}
