//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the four user endpoints and the schema wrappers from
//! [`crate::inbound::http::schemas`], so domain types never derive utoipa
//! traits themselves.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    UserDraftSchema, UserEnvelopeSchema, UserListEnvelopeSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        description = "Create, list, update and soft-delete users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        UserSchema,
        UserDraftSchema,
        UserEnvelopeSchema,
        UserListEnvelopeSchema
    )),
    tags(
        (name = "users", description = "Operations on the user resource")
    )
)]
pub struct ApiDoc;
