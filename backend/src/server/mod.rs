//! Server construction and dependency wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crud_backend::Trace;
#[cfg(debug_assertions)]
use crud_backend::doc::ApiDoc;
use crud_backend::domain::ports::UserService;
use crud_backend::domain::{UserServiceImpl, UserValidatorService};
use crud_backend::inbound::http::state::HttpState;
use crud_backend::inbound::http::users;
use crud_backend::outbound::persistence::{DbPool, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire repository, validator and service around one shared pool.
pub fn build_user_service(pool: DbPool) -> Arc<dyn UserService> {
    let repository = Arc::new(DieselUserRepository::new(pool));
    let validator = Arc::new(UserValidatorService::new(Arc::clone(&repository)));
    Arc::new(UserServiceImpl::new(validator, repository))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(users::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        request_timeout,
    } = config;

    let http_state = web::Data::new(
        HttpState::new(build_user_service(db_pool)).with_request_timeout(request_timeout),
    );

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "http server bound");
    Ok(server)
}
