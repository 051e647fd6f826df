use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    data::outlet::OutletRepository,
    error::{config::ConfigError, AppError},
    service::{chatbot::location::LocationIndex, seed::SeedService},
};

/// Initializes the tracing subscriber.
///
/// Defaults to `info` for this crate and `tower_http`, overridable through `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mcmap_api=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Imports the configured seed file into an empty database.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if let Some(path) = &config.seed_file {
        SeedService::new(db).import_if_empty(path).await?;
    }

    Ok(())
}

/// Builds the chatbot location index from the stored outlet addresses.
pub async fn build_location_index(db: &DatabaseConnection) -> Result<LocationIndex, AppError> {
    let addresses = OutletRepository::new(db).get_distinct_addresses().await?;
    let index = LocationIndex::from_addresses(&addresses);

    tracing::info!(
        "Indexed {} locations from {} addresses",
        index.len(),
        addresses.len()
    );

    Ok(index)
}

/// Builds the CORS layer for the configured origins.
///
/// Credentials, methods and headers are always allowed. A `*` origin mirrors the
/// requesting origin since a literal wildcard cannot be combined with credentials.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
