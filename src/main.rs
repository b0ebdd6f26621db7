use std::net::{Ipv4Addr, SocketAddr};

use league_ops_server::{
    config::AppConfig,
    database::client::{Database, DbConfig},
    init,
    middleware::{
        error::{AppError, AppResult},
        mw_ctx::create_ctx_state,
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let _sentry = config.sentry_project_link.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        password: config.db_password.as_deref(),
        username: config.db_username.as_deref(),
    })
    .await?;
    db.run_migrations().await?;

    let ctx_state = create_ctx_state(db, &config);

    if config.is_development {
        match config.init_server_password.as_deref() {
            Some(password) => {
                init::create_default_data_for_dev(&ctx_state, password).await?
            }
            None => warn!("->> DEVELOPMENT set without START_PASSWORD, skipping dev data"),
        }
    }

    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    info!("->> LISTENING on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    axum::serve(listener, routes_all.into_make_service())
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    Ok(())
}
