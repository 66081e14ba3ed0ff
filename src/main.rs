use std::io;

use actix_cors::Cors;
use actix_web::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::Logger,
    web, App, HttpServer,
};
use calchub_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET])
        .allowed_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production().map_err(io::Error::other)?;
    }

    if !config.users_listing.require_auth {
        log::warn!(
            "GET /api/users is served without authentication (USERS_LISTING_REQUIRE_AUTH is off)"
        );
    }

    let state = AppState::new(config.clone()).await.map_err(io::Error::other)?;

    let bind = (config.web_server_host.clone(), config.web_server_port);
    log::info!("Starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %T %{x-request-id}o"#))
            .wrap(cors(&config))
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}
