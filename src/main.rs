use std::net::SocketAddr;

use task_board_api::{build_app, config::AppConfig, db, init_tracing, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let state = AppState::connect(&config).await?;

    if config.seed_on_startup {
        if seed::is_seeded(&state.orm).await? {
            tracing::info!("database already holds data, skipping seed");
        } else {
            seed::load_all(&state.orm, &config.seed_dir).await?;
        }
    }

    let orm = state.orm.clone();
    let app = build_app(state);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db::close(orm).await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
