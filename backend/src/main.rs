use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use backend::config::ServerConfig;
use backend::store::Store;
use env_logger::Env;
use log::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();

    let store = Store::open(&config.database_path).map_err(|e| {
        error!("Cannot open {}: {}", config.database_path.display(), e);
        std::io::Error::other(e)
    })?;

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; only the API will answer",
            config.static_dir.display()
        );
    }

    info!("Server running at {}", config.url());

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(backend::configure_api(store.clone(), config.clone()))
            .service(Files::new("/", &config.static_dir).index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}
