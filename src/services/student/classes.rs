use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::ClassScope;
use crate::models::{ApiResponse, ErrorCode, WriteResult};

/// 当前学生选修的课堂，uid 取自令牌
pub async fn get_my_classes(
    service: &StudentService,
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

    match storage.get_enrolled_classes(&uid).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Failed to list enrolled classes of {}: {}", uid, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrolled classes",
                )),
            )
        }
    }
}

/// 选课；重复选课回 {"success": false}
pub async fn enroll(
    service: &StudentService,
    request: &HttpRequest,
    query: ClassScope,
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

    match storage.enroll(&query, &uid).await {
        Ok(()) => {
            info!(
                "Student {} enrolled in {} {} {} {}",
                uid, query.subject, query.number, query.season, query.year
            );
            Ok(HttpResponse::Ok().json(WriteResult::ok()))
        }
        Err(e) => {
            if e.is_rejection() {
                info!(
                    "Enroll rejected for {} in {} {} {} {}: {}",
                    uid, query.subject, query.number, query.season, query.year, e
                );
            } else {
                error!(
                    "Failed to enroll {} in {} {} {} {}: {}",
                    uid, query.subject, query.number, query.season, query.year, e
                );
            }
            Ok(HttpResponse::Ok().json(WriteResult::fail()))
        }
    }
}
