//! REST API endpoints for the terms-acceptance flag

use std::sync::Arc;

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::TermsStore;

/// Terms-acceptance state
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TermsResponse {
    pub accepted: bool,
}

/// Read the terms-acceptance flag
#[utoipa::path(
    get,
    path = "/v1/terms",
    responses(
        (status = 200, description = "Current terms state", body = TermsResponse)
    ),
    tag = "terms"
)]
#[get("/v1/terms")]
pub async fn get_terms(store: web::Data<Arc<TermsStore>>) -> HttpResponse {
    HttpResponse::Ok().json(TermsResponse {
        accepted: store.is_accepted(),
    })
}

/// Set the terms-acceptance flag
///
/// The flag is persisted immediately and gates every submission path.
#[utoipa::path(
    put,
    path = "/v1/terms",
    request_body = TermsResponse,
    responses(
        (status = 200, description = "Terms state updated", body = TermsResponse),
        (status = 500, description = "State could not be persisted", body = crate::api::error::ErrorResponse)
    ),
    tag = "terms"
)]
#[put("/v1/terms")]
pub async fn put_terms(
    store: web::Data<Arc<TermsStore>>,
    body: web::Json<TermsResponse>,
) -> Result<HttpResponse, ApiError> {
    store.set_accepted(body.accepted)?;
    Ok(HttpResponse::Ok().json(TermsResponse {
        accepted: store.is_accepted(),
    }))
}

/// Configure terms routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_terms).service(put_terms);
}
