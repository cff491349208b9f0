//! Builders wiring the domain services over the configured directory.

use std::sync::Arc;

use actix_web::web;

use westbook::domain::ports::UnrestrictedMutationPolicy;
use westbook::domain::{FederatedSearch, UserDirectoryService};
use westbook::inbound::http::state::HttpState;

use super::ServerConfig;

/// Build the handler state: one federated search and one user service, both
/// reading the configured directory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let directory = config.directory.clone();
    let search = FederatedSearch::new(directory.clone(), directory.clone())
        .with_policy(config.budget_policy);
    let users = Arc::new(UserDirectoryService::new(
        directory.clone(),
        directory,
        Arc::new(UnrestrictedMutationPolicy),
    ));
    web::Data::new(HttpState::new(Arc::new(search), users.clone(), users))
}
