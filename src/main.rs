use actix_web::{middleware::Logger, web, App, HttpServer};

use trivia_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_address = config.bind_address();

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if let Some(db) = &state.db {
        log::info!("Using database '{}'", db.db_name());
    }
    let data = web::Data::new(state);

    log::info!("Starting HTTP server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&data.config))
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure(data.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
