use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProfessorService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::ClassScope;
use crate::models::{ApiResponse, ErrorCode};

/// 当前教授讲授的课堂，uid 取自令牌
pub async fn get_my_classes(
    service: &ProfessorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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

    match storage.get_classes_taught_by(&uid).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to list classes taught by {}: {}", uid, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

/// 某课堂的选课学生名单
pub async fn get_students_in_class(
    service: &ProfessorService,
    request: &HttpRequest,
    query: ClassScope,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_students_in_class(&query).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!(
                "Failed to list students in {} {} {} {}: {}",
                query.subject, query.number, query.season, query.year, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list students",
                )),
            )
        }
    }
}
