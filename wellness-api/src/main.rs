use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;
use wellness_api::cli::Cli;
use wellness_api::config::ApiConfig;
use wellness_api::logging::init_logging;
use wellness_api::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) = ApiConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(&config.logging.level, cli.verbose)?;
    info!(path = %config_path.display(), "Loaded configuration");

    let state = AppState::from_config(&config)?;
    let allowed_origins = config
        .cors
        .as_ref()
        .map(|cors| cors.allowed_origins.clone())
        .unwrap_or_default();

    let bind_addr = config.bind_addr();
    info!("Starting wellness-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
