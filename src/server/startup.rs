use crate::server::{config::Config, error::AppError, service::stats::StatsClient};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// The pool holds a single connection. Ledger transactions read before they write, and two
/// such transactions on separate SQLite connections can fail with `SQLITE_BUSY` when they
/// both try to upgrade to a write lock. Services take lookups off the pool before opening a
/// transaction and never use the pool while one is open, so one connection cannot deadlock.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .max_connections(1)
        .min_connections(1);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outgoing requests.
///
/// Redirects are disabled; the statistics service is expected to answer directly.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Creates the statistics client from configuration.
pub fn setup_stats_client(config: &Config, http_client: reqwest::Client) -> StatsClient {
    match &config.stats_server_url {
        Some(url) => tracing::info!("Recording endpoint hits at {}", url),
        None => tracing::warn!("STATS_SERVER_URL not set, endpoint hits will only be logged"),
    }

    StatsClient::new(http_client, config.stats_server_url.clone())
}
