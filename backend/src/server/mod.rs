//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use westbook::Trace;
#[cfg(debug_assertions)]
use westbook::doc::ApiDoc;
use westbook::inbound::http::configure;
use westbook::inbound::http::health::{HealthState, live, ready};
use westbook::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Wiring tests for the assembled application.

    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    use westbook::domain::{BudgetPolicy, Page, PageId, TRACE_ID_HEADER, User, UserDraft, UserId};
    use westbook::outbound::memory::{InMemoryDirectory, Seed};

    fn config_with_olsens(policy: BudgetPolicy) -> ServerConfig {
        let olsen = |id: &str, first: &str| {
            User::from_draft(
                UserId::new(id).expect("user id"),
                UserDraft::new(first, "Olsen", format!("{id}@example.com")),
            )
        };
        let seed = Seed {
            users: vec![olsen("u-1", "Anna"), olsen("u-2", "Kari")],
            pages: vec![Page::new(PageId::new("p-1").expect("page id"), "Olsen")],
            study_fields: Vec::new(),
        };
        ServerConfig::new("127.0.0.1:0".parse().expect("addr"))
            .with_directory(Arc::new(InMemoryDirectory::from_seed(seed)))
            .with_budget_policy(policy)
    }

    fn deps(config: &ServerConfig) -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: build_http_state(config),
        }
    }

    #[rstest]
    #[case(BudgetPolicy::Independent, 3)]
    #[case(BudgetPolicy::Shared, 2)]
    #[actix_web::test]
    async fn search_honours_the_configured_budget_policy(
        #[case] policy: BudgetPolicy,
        #[case] expected_hits: usize,
    ) {
        let app = test::init_service(build_app(deps(&config_with_olsens(policy)))).await;
        let req = test::TestRequest::get()
            .uri("/rest/v1/search?query=Olsen&maxResults=2")
            .to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.as_array().map(Vec::len), Some(expected_hits));
    }

    #[rstest]
    #[actix_web::test]
    async fn health_probes_are_mounted_outside_the_api_scope() {
        let deps = deps(&config_with_olsens(BudgetPolicy::Independent));
        deps.health_state.mark_ready();
        let app = test::init_service(build_app(deps)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
