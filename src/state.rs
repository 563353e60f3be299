use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, db};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    /// Connect and migrate a fresh database.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = db::create_orm_conn(config).await?;
        db::run_migrations(&orm).await?;
        Ok(Self { orm })
    }
}
