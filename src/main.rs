use frontend::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.leptos.site_addr;
    let app = frontend::server::app(config.leptos);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "frontend listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
