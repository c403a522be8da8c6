use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollment::responses::GpaResult;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::compute_gpa;

/// 当前学生的 GPA；没有已评定的课程时为 0.0
pub async fn get_gpa(service: &StudentService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(uid) => uid,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };
    let storage = service.get_storage(request);

    match storage.get_letter_grades(&uid).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(GpaResult {
            gpa: compute_gpa(&grades),
        })),
        Err(e) => {
            error!("Failed to compute GPA for {}: {}", uid, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to compute GPA",
                )),
            )
        }
    }
}
