use idms_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("IDMS directory server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. State (data dirs, database + migrations, services)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
