use comedor_server::core::{Config, ServerState};
use comedor_server::routes;
use comedor_server::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        timezone = %config.timezone,
        environment = %config.environment,
        "Comedor server starting"
    );

    let port = config.http_port;
    let state = ServerState::new(config);
    let app = routes::build_app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
