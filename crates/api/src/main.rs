use pressgate_api::config::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pressgate_observability::init();

    let config = GatewayConfig::from_env();
    let app = pressgate_api::app::build_app(config.jwt_secret, config.upstream_url);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
