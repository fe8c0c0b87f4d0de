use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::types::error::AppError;
use tracing::info;

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    /// Connects and brings the schema up to date. Any sea-orm URI works;
    /// production runs on PostgreSQL, tests on `sqlite::memory:`.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri.to_owned());
        if uri.starts_with("sqlite") {
            // An in-memory SQLite database only exists on its own connection.
            options.max_connections(1).min_connections(1);
        }
        options.sqlx_logging(false);

        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.database_connection.ping().await?)
    }
}
