use actix_cors::Cors;
use actix_web::{http::{header, Method}, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_contact_api::{
    background_task::start_sweep_task,
    graceful_shutdown::shutdown_signal,
    routes::{configure_routes, json_config},
    settings::AppConfig,
    AppState,
};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).compact().init();
    }
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let app_state = web::Data::new(
        AppState::new(&config).context("Failed to set up contact delivery")?
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let sweeper = tokio::spawn(start_sweep_task(
        app_state.rate_limiter.clone(),
        config.rate_limit_sweep_interval(),
    ));

    let origins = config.cors_origins();
    let max_payload_bytes = config.max_payload_bytes;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(json_config(max_payload_bytes))
            .wrap(build_cors(&origins))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .disable_signals()
    .run();

    let handle = server.handle();
    tokio::pin!(server);

    let result = tokio::select! {
        res = &mut server => res.context("HTTP server error"),
        _ = shutdown_signal() => {
            handle.stop(true).await;
            (&mut server).await.context("HTTP server error during shutdown")
        }
    };

    sweeper.abort();
    tracing::info!("Contact API stopped");
    result
}
