//! User CRUD handlers.
//!
//! ```text
//! GET    /users/list
//! POST   /users/create      {"name":"John","age":10}
//! PUT    /users/update/{id} {"name":"Jane","age":20}
//! DELETE /users/delete/{id}
//! ```
//!
//! Bodies are read as raw bytes and decoded here, so any malformed or
//! oversized body is reported as `invalid JSON format` whatever its content
//! type.

use actix_web::{HttpResponse, delete, get, post, put, web};
use futures_util::StreamExt;

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::{ApiError, ApiResult, EnvelopeResult};
use crate::inbound::http::schemas::{UserDraftSchema, UserEnvelopeSchema, UserListEnvelopeSchema};
use crate::inbound::http::state::HttpState;

const SUCCESS_BODY: &str = "Success";
/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Collect the request body, rejecting streams over [`MAX_BODY_BYTES`].
async fn read_body(mut payload: web::Payload) -> ApiResult<web::Bytes> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|_| ApiError::InvalidPayload)?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(ApiError::InvalidPayload);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Decode an optional user from the request body. `null` is a nil user.
fn decode_draft(body: &[u8]) -> ApiResult<Option<UserDraft>> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidPayload)
}

fn parse_id(segment: &str) -> ApiResult<UserId> {
    Ok(UserId::parse_path_segment(segment)?)
}

fn success() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(SUCCESS_BODY)
}

/// List live users ordered by identifier.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use crud_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/users").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/users/list",
    responses(
        (status = 200, description = "Live users", body = UserListEnvelopeSchema),
        (status = 500, description = "Storage failure", body = UserListEnvelopeSchema),
        (status = 503, description = "Storage unavailable or timed out", body = UserListEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/list")]
pub async fn list_users(
    state: web::Data<HttpState>,
) -> EnvelopeResult<web::Json<Envelope<Vec<User>>>> {
    let users = state.bounded(state.users.list()).await?;
    Ok(web::Json(Envelope::success(users)))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users/create",
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "Created user", body = UserEnvelopeSchema),
        (status = 400, description = "Invalid payload or validation failure", body = UserEnvelopeSchema),
        (status = 500, description = "Storage failure", body = UserEnvelopeSchema),
        (status = 503, description = "Storage unavailable or timed out", body = UserEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> EnvelopeResult<web::Json<Envelope<User>>> {
    let body = read_body(payload).await?;
    let draft = decode_draft(&body)?;
    let user = state.bounded(state.users.create(draft)).await?;
    Ok(web::Json(Envelope::success(user)))
}

/// Replace the name and age of a live user.
///
/// The identifier is checked before the body is decoded.
#[utoipa::path(
    put,
    path = "/users/update/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "Updated", body = String),
        (status = 400, description = "Invalid identifier, payload or field", body = String),
        (status = 404, description = "No live user with this identifier", body = String),
        (status = 500, description = "Storage failure", body = String),
        (status = 503, description = "Storage unavailable or timed out", body = String)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/update/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let body = read_body(payload).await?;
    let draft = decode_draft(&body)?;
    state.bounded(state.users.update(draft, id)).await?;
    Ok(success())
}

/// Soft-delete a live user.
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted", body = String),
        (status = 400, description = "Invalid identifier", body = String),
        (status = 404, description = "No live user with this identifier", body = String),
        (status = 500, description = "Storage failure", body = String),
        (status = 503, description = "Storage unavailable or timed out", body = String)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/delete/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.bounded(state.users.delete(id)).await?;
    Ok(success())
}

/// Register the user routes under `/users`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(list_users)
            .service(create_user)
            .service(update_user)
            .service(delete_user),
    );
}
