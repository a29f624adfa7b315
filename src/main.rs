use blog_service::settings;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = settings::load_settings().expect("Failed to load settings");
    blog_service::init_tracing(&settings);
    let port = settings.port.unwrap_or(3000);

    if settings.environment == Some("DEV".to_string()) {
        debug!("Running in DEV environment");
    }

    let app = blog_service::setup_router(&settings).await?;
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    debug!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
