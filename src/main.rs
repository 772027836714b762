mod modules;

use anyhow::Context;
use estante_db::Database;
use estante_kernel::settings::Settings;
use estante_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Estante settings")?;
    estante_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.path,
        "estante-app bootstrap starting"
    );

    let db = Database::new(&settings.database.path);

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        db: &db,
    };
    registry.init_all(&ctx).await?;

    // The process must not serve traffic against a missing table.
    db.run_migrations(&registry.migrations())
        .await
        .with_context(|| "failed to apply startup migrations")?;

    registry.start_all(&ctx).await?;

    tracing::info!("estante-app bootstrap complete");

    estante_http::start_server(&registry, &db, &settings).await?;

    registry.stop_all().await?;

    Ok(())
}
