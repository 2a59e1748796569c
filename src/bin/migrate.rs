use truck_sign_api::{config::AppConfig, db::{create_orm_conn, prepare_schema}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    prepare_schema(&orm).await?;
    tracing::info!("migrations applied");
    Ok(())
}
