//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerSettings;
pub use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ExecutionMode;
use crate::inbound::http::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::inbound::http::error::{json_config, not_found};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::landing::landing;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{login, verify_security_questions};
use crate::middleware::RequestScope;

/// Shared state handed to every worker's application.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub mode: ExecutionMode,
}

/// Assemble the application: routes, extractor config and request scope.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use books::domain::ExecutionMode;
/// use books::inbound::http::health::HealthState;
/// use books::server::{AppDependencies, build_app, build_http_state};
///
/// let state = build_http_state(4).expect("seeded state");
/// let _app = build_app(AppDependencies {
///     health_state: web::Data::new(HealthState::new()),
///     http_state: web::Data::new(state),
///     mode: ExecutionMode::Production,
/// });
/// ```
pub fn build_app(
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
        mode,
    } = deps;

    let api = web::scope("/api")
        .service(list_books)
        .service(get_book)
        .service(create_book)
        .service(update_book)
        .service(delete_book)
        .service(login)
        .service(verify_security_questions);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(RequestScope::new(mode))
        .service(api)
        .service(landing)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Construct an Actix HTTP server from loaded settings.
///
/// Seeds the in-memory stores, binds the socket and marks the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when the settings are invalid, seeding fails
/// or binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let mode = settings.execution_mode().map_err(std::io::Error::other)?;
    let http_state = build_http_state(settings.hash_cost())
        .map(web::Data::new)
        .map_err(|err| std::io::Error::other(format!("failed to seed user store: {err}")))?;
    let bind_addr = settings.bind_addr();

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            mode,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, %mode, "server listening");
    health_state.mark_ready();
    Ok(server)
}
