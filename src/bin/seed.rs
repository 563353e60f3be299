use task_board_api::{config::AppConfig, db, init_tracing, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    if config.is_in_memory() {
        tracing::warn!("DATABASE_URL is in-memory; seeded rows will not outlive this run");
    }

    let state = AppState::connect(&config).await?;
    if seed::is_seeded(&state.orm).await? {
        tracing::info!("database already holds data, nothing to seed");
    } else {
        let report = seed::load_all(&state.orm, &config.seed_dir).await?;
        tracing::info!(?report, "seed completed");
    }

    db::close(state.orm).await?;
    Ok(())
}
