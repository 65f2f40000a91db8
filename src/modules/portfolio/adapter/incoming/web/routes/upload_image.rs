use actix_web::{http::header, put, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ImageTarget, ImageUpload, IngestImageError,
};
use crate::modules::portfolio::domain::entities::EntryId;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Raw body uploads
// ──────────────────────────────────────────────────────────
// The body is the image itself; its type comes from Content-Type.
//

/// `image/PNG; charset=x` -> `image/png`. A missing header yields "".
fn mime_essence(req: &HttpRequest) -> String {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

async fn ingest(
    target: ImageTarget,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> HttpResponse {
    let upload = ImageUpload {
        target,
        mime_type: mime_essence(&req),
        bytes: body.to_vec(),
    };

    match data.portfolio.ingest_image.execute(upload).await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(IngestImageError::NotAnImage(mime)) => ApiResponse::unsupported_media_type(
            "NOT_AN_IMAGE",
            &format!("Please select an image file (got '{mime}')"),
        ),

        Err(err @ IngestImageError::TooLarge { .. }) => {
            ApiResponse::payload_too_large("IMAGE_TOO_LARGE", &err.to_string())
        }

        Err(IngestImageError::StoreError(e)) => {
            error!("Store error ingesting image: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/portfolio/avatar")]
pub async fn upload_avatar_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    ingest(ImageTarget::Avatar, req, body, data).await
}

#[put("/api/portfolio/projects/{project_id}/image")]
pub async fn upload_project_image_handler(
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = EntryId::from(path.into_inner());
    ingest(ImageTarget::Project(project_id), req, body, data).await
}
