use vidp_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    vidp_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (storage, metadata store, routes)
    let (_state, router) = vidp_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    vidp_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
