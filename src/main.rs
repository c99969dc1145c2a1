use anyhow::{Context, Result};
use fixly_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use fixly_core::config::AppConfig;
use fixly_core::domain::{
    content::EntityLimits,
    post::{PostReadRepository, PostWriteRepository},
    tool::{ToolReadRepository, ToolWriteRepository},
};
use fixly_core::infrastructure::{
    database,
    repositories::{
        SqlitePostReadRepository, SqlitePostWriteRepository, SqliteToolReadRepository,
        SqliteToolWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use fixly_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    EntityLimits::TOOL
        .validate()
        .context("tool limits are inconsistent")?;
    EntityLimits::POST
        .validate()
        .context("post limits are inconsistent")?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to open the database")?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let tool_write_repo: Arc<dyn ToolWriteRepository> =
        Arc::new(SqliteToolWriteRepository::new(Arc::clone(&pool)));
    let tool_read_repo: Arc<dyn ToolReadRepository> =
        Arc::new(SqliteToolReadRepository::new(Arc::clone(&pool)));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool)));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        tool_write_repo,
        tool_read_repo,
        post_write_repo,
        post_read_repo,
        clock,
        slugger,
    ));

    if config.admin_token().is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; admin routes are open");
    }

    let state = HttpState {
        services,
        site: Arc::new(config.site().clone()),
        admin_token: config.admin_token().map(Arc::from),
    };

    let app = build_router_with_options(state, &RouterOptions::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
