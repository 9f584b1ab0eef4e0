use clap::Parser;
use recipe_search::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    dataset::RecipeTable,
    search::RecipeService,
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipe_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Search {
            query,
            source,
            cuisine,
            start,
        } => {
            let service = load_service(&settings)?;
            recipe_search::cli::commands::search(&service, &query, source.into(), cuisine, start)
                .await?;
        }
        Commands::Show { id, online } => {
            let service = load_service(&settings)?;
            recipe_search::cli::commands::show(&service, &id, online).await?;
        }
    }

    Ok(())
}

/// Load the dataset once and wrap it in the shared service
fn load_service(settings: &Settings) -> Result<RecipeService> {
    let table = RecipeTable::load_or_empty(&settings.dataset.path);
    RecipeService::from_settings(settings, table)
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting Recipe Search server");
    info!("Dataset: {:?}", settings.dataset.path);
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    let service = load_service(&settings)?;

    let state = AppState {
        service,
        settings: settings.clone(),
    };

    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
