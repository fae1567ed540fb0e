use anyhow::Context;
use cookbook_core::{AppConfig, RecipeService};
use cookbook_server::store::DieselStore;
use cookbook_server::{api, db, telemetry, AppState};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    telemetry::init_telemetry();

    let config = AppConfig::from_env()?;

    let pool = db::create_pool(&config.database_url)
        .with_context(|| format!("opening database {}", config.database_url))?;
    let store = Arc::new(DieselStore::new(pool));
    let service: AppState = Arc::new(RecipeService::new(store, &config.ai));

    let app = cookbook_server::app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui/");
    tracing::info!("GraphQL endpoint available at /graphql");

    axum::serve(listener, app).await?;

    Ok(())
}
