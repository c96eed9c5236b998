use migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

const PRAGMAS: &[&str] =
    &["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA busy_timeout=5000"];

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    tracing::debug!("database migrations applied");
    Ok(db)
}
