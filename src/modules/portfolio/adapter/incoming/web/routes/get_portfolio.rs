use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(GetPortfolioError::StoreError(e)) => {
            error!("Store error reading portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
