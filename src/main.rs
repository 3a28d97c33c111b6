use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use travel_match::config::{LogFormat, LoggingSettings, Settings};
use travel_match::routes::{self, evaluations::AppState};
use travel_match::Evaluator;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::from_str(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Full => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Travel Match evaluation service...");

    // Build the catalog once, before accepting traffic
    let evaluator = Evaluator::builtin();
    info!(
        "Catalog v{} loaded with {} categories",
        evaluator.catalog().version,
        evaluator.catalog().len()
    );

    if settings.profile.default_language.trim().is_empty() {
        error!("profile.default_language must not be empty");
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "profile.default_language must not be empty",
        ));
    }

    let app_state = AppState {
        evaluator,
        default_language: settings.profile.default_language.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
