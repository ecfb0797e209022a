mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::other(err)
    })?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("{}", err);
        std::io::Error::other(err)
    })?;

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(handlers::routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
