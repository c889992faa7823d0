mod animation;
mod carousel;
mod config;
mod feed;
mod filters;
mod forms;
mod modal;
mod models;
mod relay;
mod router;
mod routes;
mod state;
mod store;
mod templates;
mod validate;

use std::time::Duration;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};

use crate::{config::SiteConfig, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = run().await {
        eprintln!("Startup error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let config = SiteConfig::from_env();
    if !config.store_enabled() {
        log::warn!("TESTIMONIAL_STORE_URL or TESTIMONIAL_STORE_KEY not set; showing built-in testimonials");
    }

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .build()?;

    let address = config.address();
    let static_dir = config.static_dir.clone();
    let state = AppState::new(config, http);

    log::info!("Starting Lucid site on http://{address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .configure(routes::public::configure)
            .configure(routes::events::configure)
            .default_service(web::to(routes::public::fallback))
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
