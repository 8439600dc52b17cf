//! Backend for importing, re-categorising, splitting and exporting comment datasets.

pub mod config;
pub mod error;
pub mod services;
pub mod store;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::store::Store;
use actix_web::web;

/// Registers the store, request extractor settings and every `/api` scope.
///
/// Static file serving is left to the caller so tests can mount the API alone.
pub fn configure_api(store: Store, config: ServerConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let json_config = web::JsonConfig::default()
            .limit(config.upload_limit)
            .content_type_required(false)
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());
        let path_config = web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());
        let query_config = web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

        cfg.app_data(web::Data::new(store))
            .app_data(web::Data::new(config))
            .app_data(json_config)
            .app_data(path_config)
            .app_data(query_config)
            .service(services::comments::configure_routes())
            .service(services::categories::configure_routes())
            .service(services::split::configure_routes())
            .service(services::import::configure_routes())
            .service(services::datasets::configure_routes())
            .service(services::export::configure_routes());
    }
}
