//! REST API endpoints for conversations

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use futures::TryStreamExt;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::service::ConversationService;
use crate::service::conversation::{Attachment, NewTurn};

/// Response for a newly created conversation
#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationCreated {
    pub id: Uuid,
}

/// Create a new conversation
#[utoipa::path(
    post,
    path = "/v1/conversations",
    responses(
        (status = 201, description = "Conversation created", body = ConversationCreated)
    ),
    tag = "conversations"
)]
#[post("/v1/conversations")]
pub async fn create_conversation(service: web::Data<ConversationService>) -> HttpResponse {
    let id = service.create().await;
    HttpResponse::Created().json(ConversationCreated { id })
}

/// Get a conversation's message log
#[utoipa::path(
    get,
    path = "/v1/conversations/{id}",
    params(
        ("id" = Uuid, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Conversation retrieved", body = crate::model::Conversation),
        (status = 404, description = "Conversation not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "conversations"
)]
#[get("/v1/conversations/{id}")]
pub async fn get_conversation(
    service: web::Data<ConversationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match service.get(id).await {
        Some(conversation) => Ok(HttpResponse::Ok().json(conversation)),
        None => Err(ApiError::ConversationNotFound(id.to_string())),
    }
}

/// Submit a turn to a conversation
///
/// Multipart form with an optional `text` field and an optional `file`
/// attachment (.txt, .md, .pdf, .docx). At least one must be present.
#[utoipa::path(
    post,
    path = "/v1/conversations/{id}/messages",
    params(
        ("id" = Uuid, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Turn resolved; assistant message returned", body = crate::model::Message),
        (status = 400, description = "Blank submission or unusable attachment", body = crate::api::error::ErrorResponse),
        (status = 403, description = "Terms not accepted", body = crate::api::error::ErrorResponse),
        (status = 404, description = "Conversation not found", body = crate::api::error::ErrorResponse),
        (status = 502, description = "LLM call failed or returned an invalid response", body = crate::api::error::ErrorResponse)
    ),
    tag = "conversations"
)]
#[post("/v1/conversations/{id}/messages")]
pub async fn submit_message(
    service: web::Data<ConversationService>,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let turn = read_submission(payload).await?;
    let message = service.submit(id, turn).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// Get the cited-case list of a conversation's latest turn
#[utoipa::path(
    get,
    path = "/v1/conversations/{id}/cited-cases",
    params(
        ("id" = Uuid, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Cited cases retrieved", body = [crate::model::CaseLaw]),
        (status = 404, description = "Conversation not found", body = crate::api::error::ErrorResponse)
    ),
    tag = "conversations"
)]
#[get("/v1/conversations/{id}/cited-cases")]
pub async fn get_cited_cases(
    service: web::Data<ConversationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let cases = service.cited_cases(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cases))
}

/// Read the multipart submission into a turn
async fn read_submission(mut payload: Multipart) -> Result<NewTurn, ApiError> {
    let mut text = None;
    let mut attachment = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart payload: {}", e)))?
    {
        let name = field.name().to_string();
        match name.as_str() {
            "text" => {
                let bytes = read_field(&mut field).await?;
                let value = String::from_utf8(bytes).map_err(|_| {
                    ApiError::BadRequest("Text field is not valid UTF-8".to_string())
                })?;
                text = Some(value);
            }
            "file" => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ApiError::BadRequest("Attachment is missing a filename".to_string())
                    })?;
                let bytes = read_field(&mut field).await?;
                attachment = Some(Attachment { filename, bytes });
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
                // Drain the field so the stream can continue.
                while field
                    .try_next()
                    .await
                    .map_err(|e| {
                        ApiError::BadRequest(format!("Malformed multipart payload: {}", e))
                    })?
                    .is_some()
                {}
            }
        }
    }

    Ok(NewTurn { text, attachment })
}

/// Collect a multipart field's bytes
async fn read_field(field: &mut actix_multipart::Field) -> Result<Vec<u8>, ApiError> {
    let mut buffer = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

/// Configure conversation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_conversation)
        .service(get_conversation)
        .service(submit_message)
        .service(get_cited_cases);
}
