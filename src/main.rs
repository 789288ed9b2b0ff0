use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vat201::config::Config;
use vat201::middleware::RequestId;
use vat201::modules::health;
use vat201::vat_return::{self, MySqlVatReturnRepository, VatReturnRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing, RUST_LOG takes precedence over LOG_LEVEL
    let default_filter = format!("vat201={},actix_web=info", config.app.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;

    tracing::info!("Starting UAE VAT 201 report service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create ledger connection pool
    let db_pool = config.database.create_pool().await?;

    tracing::info!(
        "Ledger pool initialized ({} connections)",
        config.database.pool_size
    );

    let repository: Arc<dyn VatReturnRepository> =
        Arc::new(MySqlVatReturnRepository::new(db_pool.clone()));
    let repository = web::Data::from(repository);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(repository.clone())
            .configure(health::configure)
            .configure(vat_return::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
