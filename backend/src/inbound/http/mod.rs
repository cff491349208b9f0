//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers live under `/rest/v1`; [`configure`] registers them together
//! with the extractor error handlers so every rejection uses the JSON error
//! envelope.

pub mod error;
pub mod health;
pub mod schemas;
pub mod search;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Path prefix for every REST endpoint.
pub const API_PREFIX: &str = "/rest/v1";

/// Register the REST scope on an application or service config.
///
/// The caller provides `web::Data<HttpState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(web::QueryConfig::default().error_handler(error::query_rejection))
            .app_data(web::PathConfig::default().error_handler(error::path_rejection))
            .app_data(web::JsonConfig::default().error_handler(error::json_rejection))
            .service(search::search_all)
            .service(search::search_users)
            .service(search::search_pages)
            .service(users::list_users)
            .service(users::users_by_name)
            .service(users::user_by_email)
            .service(users::users_by_study_field)
            .service(users::get_user)
            .service(users::create_user)
            .service(users::update_user)
            .service(users::delete_user)
            .service(users::list_study_fields),
    );
}
