use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::ResetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Discards the session and answers with the fresh default snapshot.
#[delete("/api/portfolio")]
pub async fn reset_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.reset.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(ResetPortfolioError::StoreError(e)) => {
            error!("Store error resetting portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
