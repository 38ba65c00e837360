use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backdrop::catalog::Catalog;
use backdrop::config;
use backdrop::routes;
use backdrop::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging (stdout + daily file rotation under ./logs)
    std::fs::create_dir_all("logs").ok();
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let file_appender = tracing_appender::rolling::daily("logs", "backdrop.log");
    let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
        .init();
    // Keep the guards alive so the non-blocking writers flush on shutdown
    let _log_guards = (stdout_guard, file_guard);

    // Load configuration (embedded defaults -> backdrop.toml -> env/.env),
    // then let positional `host port` arguments take precedence
    let mut app_cfg = config::load()?;
    config::apply_listen_args(&mut app_cfg, std::env::args().skip(1))?;

    // Build the catalog before binding; a request must never race an
    // unpopulated catalog. An unreadable or malformed catalog file is fatal.
    let catalog_path = app_cfg.assets.catalog_path();
    info!("Reading catalog config from {}", catalog_path.display());
    let catalog = Catalog::load(&catalog_path)?;
    info!("Loaded {} background entries", catalog.entries().len());

    let state = AppState::new(catalog, app_cfg.clone());
    let app = routes::app(state);

    // Server listen addr (from config/args)
    let port: u16 = app_cfg.server.port;
    let host: String = app_cfg.server.host.clone();
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid listen addr {}:{} - {}", host, port, e))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Backdrop listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received. Stopping server...");
}
