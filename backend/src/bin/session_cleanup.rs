use gestion_gym_backend::{
    config::Config, db::connection::create_pool, repositories::auth as auth_repo,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let deleted = auth_repo::cleanup_expired_sessions(&pool).await?;
    if deleted > 0 {
        tracing::info!("Deleted {} expired sessions", deleted);
    }

    sqlx::query("VACUUM (ANALYZE) sesiones")
        .execute(&pool)
        .await?;

    Ok(())
}
