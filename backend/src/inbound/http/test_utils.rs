//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::UnrestrictedMutationPolicy;
use crate::domain::test_support::{page, study_field, user};
use crate::domain::{FederatedSearch, StudyFieldId, UserDirectoryService};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryDirectory, Seed};

/// Directory holding a small, fixed data set.
///
/// Users `u-anna`, `u-kari` (both surname `Olsen`) and `u-ola`; pages
/// `p-kor` and `p-olsen`; study fields `sf-prog` and `sf-design`. Anna is
/// enrolled in `sf-prog`.
pub fn seeded_directory() -> Arc<InMemoryDirectory> {
    let programming = StudyFieldId::new("sf-prog").expect("study field id");
    let anna = user("u-anna", "Anna", "Olsen").with_study_field(Some(programming));
    Arc::new(InMemoryDirectory::from_seed(Seed {
        users: vec![
            anna,
            user("u-kari", "Kari", "Olsen"),
            user("u-ola", "Ola", "Nordmann"),
        ],
        pages: vec![page("p-kor", "Westerdals Kor"), page("p-olsen", "Olsen")],
        study_fields: vec![
            study_field("sf-prog", "Programmering"),
            study_field("sf-design", "Design"),
        ],
    }))
}

/// Wire the real services over an in-memory directory.
pub fn state_over(directory: Arc<InMemoryDirectory>) -> HttpState {
    let service = Arc::new(UserDirectoryService::new(
        directory.clone(),
        directory.clone(),
        Arc::new(UnrestrictedMutationPolicy),
    ));
    HttpState::new(
        Arc::new(FederatedSearch::new(directory.clone(), directory)),
        service.clone(),
        service,
    )
}

/// Build the REST application around `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
