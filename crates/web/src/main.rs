use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pantry_web::config::Config::from_env();
    pantry_observability::init(config.debug);

    if config.uses_default_secret() {
        tracing::warn!("SECRET_KEY not set; using insecure dev default");
    }

    let app = pantry_web::app::build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(database = %config.database, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
