use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, PortfolioCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Body is a single tagged edit intent, e.g.
/// `{"type": "addTechnology", "projectId": "...", "technology": "Rust"}`.
#[post("/api/portfolio/edits")]
pub async fn apply_edit_handler(
    req: web::Json<PortfolioCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = req.into_inner();
    let kind = command.kind();

    match data.portfolio.edit.execute(command).await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(EditPortfolioError::StoreError(e)) => {
            error!("Store error applying {} edit: {}", kind, e);
            ApiResponse::internal_error()
        }
    }
}
