use std::sync::Arc;

use auth::Authenticator;
use mongodb::Client;
use store_service::config::Config;
use store_service::domain::product::service::ProductService;
use store_service::domain::user::service::UserService;
use store_service::inbound::http::router::create_router;
use store_service::outbound::repositories::MongoProductRepository;
use store_service::outbound::repositories::MongoUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "store-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        database_name = %config.database.name,
        port = config.server.port,
        "Configuration loaded"
    );

    // One client for the whole process; collection handles are cheap clones
    let client = Client::with_uri_str(&config.database.url).await?;
    let database = client.database(&config.database.name);
    tracing::info!(database = %config.database.name, "Database connection established");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(MongoUserRepository::new(&database));
    let product_repository = Arc::new(MongoProductRepository::new(&database));

    let user_service = Arc::new(UserService::new(user_repository));
    let product_service = Arc::new(ProductService::new(product_repository));

    let address = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(user_service, product_service, authenticator);
    axum::serve(listener, application).await?;

    Ok(())
}
