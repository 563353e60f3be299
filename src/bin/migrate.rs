use task_board_api::{config::AppConfig, db, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    if config.is_in_memory() {
        tracing::warn!("DATABASE_URL is in-memory; the migrated schema will not outlive this run");
    }

    let orm = db::create_orm_conn(&config).await?;
    db::run_migrations(&orm).await?;
    db::close(orm).await?;

    tracing::info!("migrations applied");
    Ok(())
}
