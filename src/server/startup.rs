use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, service::player::seed::seed_demo_players};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Insert the demo players if enabled in the configuration
pub async fn seed_demo_data(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_demo_data {
        return Ok(());
    }

    seed_demo_players(db).await?;

    Ok(())
}
